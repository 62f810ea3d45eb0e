#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("dyspnoea descriptor not recognised: {0:?}")]
    InvalidSelection(String),
    #[error("invalid questionnaire rating: {0}")]
    InvalidRating(#[from] copd_types::RatingError),
    #[error("failed to create report directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write report file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read report file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialise report: {0}")]
    YamlSerialisation(serde_yaml::Error),
    #[error("failed to deserialise report: {0}")]
    YamlDeserialisation(serde_yaml::Error),
    #[error("unsupported report schema version: {0}")]
    UnsupportedSchemaVersion(u32),
}

pub type AssessmentResult<T> = std::result::Result<T, AssessmentError>;
