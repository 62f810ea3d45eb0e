use clap::{Parser, Subcommand};
use copd_core::{
    AssessmentReport, AssessmentRequest, AssessmentService, CoreConfig, KnowledgeBase,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "copd")]
#[command(about = "COPD assessment and treatment recommendation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an assessment from a JSON request file and persist the report
    Assess {
        /// Path to a JSON file containing the patient profile and observation
        input: PathBuf,
        /// Directory to write the report into (default: assessment_reports)
        #[arg(long)]
        report_dir: Option<PathBuf>,
        /// Compute and print the result without persisting a report
        #[arg(long)]
        no_save: bool,
    },
    /// Print the GOLD treatment knowledge base
    Knowledge,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Assess {
            input,
            report_dir,
            no_save,
        }) => {
            let contents = std::fs::read_to_string(&input)?;
            let request: AssessmentRequest = serde_json::from_str(&contents)?;

            let cfg = match report_dir {
                Some(dir) => CoreConfig::new(dir),
                None => CoreConfig::default(),
            };
            let service = AssessmentService::new(Arc::new(cfg));

            if no_save {
                let report = service.assess(request.patient, request.observation)?;
                print_report(&report);
            } else {
                let (report, path) =
                    service.assess_and_save(request.patient, request.observation)?;
                print_report(&report);
                println!();
                println!("Report saved: {}", path.display());
            }
        }
        Some(Commands::Knowledge) => {
            print_knowledge(KnowledgeBase::global());
        }
        None => {
            println!("Use 'copd --help' for commands");
        }
    }

    Ok(())
}

fn print_report(report: &AssessmentReport) {
    println!("Patient: {}", report.patient.patient_id);
    println!(
        "GOLD Group: {} ({})",
        report.recommendation.risk_group, report.recommendation.group_description
    );
    println!(
        "Scores: mMRC {}, CAT {}",
        report.scores.mmrc, report.scores.cat_total
    );

    match &report.scores.airflow {
        Some(airflow) => println!(
            "Airflow: {:.1}% predicted, {}",
            airflow.percent_predicted, airflow.stage
        ),
        None => println!("Airflow: not computed (predicted FEV1 unavailable)"),
    }

    println!();
    println!(
        "Primary treatment strategy: {}",
        report.recommendation.treatment_strategy
    );

    println!("Medication options:");
    for (i, medication) in report.recommendation.medications.iter().enumerate() {
        println!("  {}. {}", i + 1, medication);
    }

    if !report.recommendation.special_considerations.is_empty() {
        println!("Special considerations:");
        for consideration in &report.recommendation.special_considerations {
            println!("  - {}", consideration);
        }
    }

    println!("Rescue therapy (all patients):");
    for therapy in &report.recommendation.rescue_therapy {
        println!("  - {}", therapy);
    }
}

fn print_knowledge(kb: &KnowledgeBase) {
    println!("GOLD ABE classification");
    for guidance in kb.groups() {
        println!();
        println!("Group {}: {}", guidance.group, guidance.description);
        println!("  Criteria: {}", guidance.criteria);
        println!("  Treatment: {}", guidance.treatment);
        println!("  Medication options:");
        for medication in guidance.medications {
            println!("    - {}", medication);
        }
    }

    println!();
    println!("Rescue therapy (all patients):");
    for therapy in kb.rescue_therapy() {
        println!("  - {}", therapy);
    }

    println!();
    println!("Spirometry classification (FEV1 % predicted):");
    for reference in kb.stages() {
        println!(
            "  {} ({}): {}",
            reference.stage.label(),
            reference.stage.severity(),
            reference.fev1_band
        );
    }
}
