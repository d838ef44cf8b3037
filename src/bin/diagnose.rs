// Diagnosis CLI
//
// Purpose: Score one classifier prediction and print the advisory report
// Usage: cargo run --bin diagnose -- --label Tomato___Late_blight --confidence 0.95

use anyhow::{bail, Context};
use clap::Parser;
use leaf_diagnosis::labels::{is_known_label, CLASS_NAMES};
use leaf_diagnosis::{
    try_diagnose, AdvisoryTables, HtmlFormatter, JsonFormatter, MarkdownFormatter, Prediction,
    ReportFormat, ReportGenerator,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "diagnose")]
#[command(about = "Plant leaf diagnosis and advisory report")]
struct Args {
    /// Classifier label, e.g. Tomato___Late_blight
    #[arg(short, long, required_unless_present_any = ["probabilities", "list_labels"])]
    label: Option<String>,

    /// Classifier confidence, as a probability (0-1) or a percentage (0-100)
    #[arg(short, long, requires = "label", allow_negative_numbers = true)]
    confidence: Option<f64>,

    /// JSON array of class probabilities in vocabulary order
    #[arg(long, conflicts_with = "label")]
    probabilities: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Markdown)]
    format: ReportFormat,

    /// Advisory table overrides (JSON)
    #[arg(long, env = "ADVISORY_TABLES")]
    tables: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the known class labels and exit
    #[arg(long)]
    list_labels: bool,
}

fn main() -> anyhow::Result<()> {
    // Default log level: info for our crate, warn for others
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leaf_diagnosis=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if args.list_labels {
        for (index, label) in CLASS_NAMES.iter().enumerate() {
            println!("{:2}  {}", index, label);
        }
        return Ok(());
    }

    let tables = match &args.tables {
        Some(path) => AdvisoryTables::load(path)
            .with_context(|| format!("Failed to load advisory tables: {}", path.display()))?,
        None => AdvisoryTables::builtin(),
    };

    let prediction = read_prediction(&args)?;
    tracing::info!(
        "Diagnosing {} (confidence {})",
        prediction.label,
        prediction.confidence
    );
    for ranked in prediction.top_k.iter().skip(1) {
        tracing::info!("  alternative: {} ({:.4})", ranked.label, ranked.probability);
    }

    if !is_known_label(&prediction.label) {
        tracing::warn!(
            "Label {:?} is not in the {}-class vocabulary; scoring falls back to keyword defaults",
            prediction.label,
            CLASS_NAMES.len()
        );
    }

    let diagnosis = try_diagnose(&prediction.label, prediction.confidence)?;
    tracing::info!(
        "Pathogen: {}, health score: {:.1}, severity: {}",
        diagnosis.pathogen,
        diagnosis.health_score,
        diagnosis.severity
    );

    let report = ReportGenerator::new().generate(&diagnosis, &tables);
    let rendered = match args.format {
        ReportFormat::Markdown => MarkdownFormatter::format(&report),
        ReportFormat::Json => JsonFormatter::format(&report).context("Failed to serialize report")?,
        ReportFormat::Html => HtmlFormatter::format(&report),
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn read_prediction(args: &Args) -> anyhow::Result<Prediction> {
    if let Some(path) = &args.probabilities {
        return load_probabilities(path);
    }

    let Some(label) = &args.label else {
        bail!("either --label or --probabilities is required");
    };
    let Some(confidence) = args.confidence else {
        bail!("--confidence is required with --label");
    };
    Ok(Prediction::new(label.clone(), confidence))
}

fn load_probabilities(path: &Path) -> anyhow::Result<Prediction> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read probabilities: {}", path.display()))?;
    let probabilities: Vec<f32> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse probabilities: {}", path.display()))?;
    Ok(Prediction::from_probabilities(&probabilities)?)
}
