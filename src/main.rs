use anyhow::Result;
use clap::{Parser, Subcommand};
use potability::sample::{FEATURE_SPECS, N_FEATURES};
use potability::{InferenceContext, WaterSample};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Water potability inference over pre-trained artifacts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one sample from form-style NAME=VALUE fields
    Predict {
        /// Path to the forest artifact (JSON)
        #[arg(long)]
        forest: PathBuf,
        /// Path to the scaler artifact (JSON)
        #[arg(long)]
        scaler: PathBuf,
        /// Nine fields as NAME=VALUE, e.g. ph=7.0 Hardness=200 ...
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Load the artifacts and print their metadata
    Inspect {
        /// Path to the forest artifact (JSON)
        #[arg(long)]
        forest: PathBuf,
        /// Path to the scaler artifact (JSON)
        #[arg(long)]
        scaler: PathBuf,
    },
    /// List the expected fields, units, and typical ranges
    Fields,
}

fn parse_fields(pairs: &[String]) -> Result<HashMap<String, String>> {
    let mut fields = HashMap::with_capacity(pairs.len());
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected NAME=VALUE, got '{}'", pair))?;
        fields.insert(name.to_string(), value.to_string());
    }
    Ok(fields)
}

fn load_context(forest: &PathBuf, scaler: &PathBuf) -> Result<InferenceContext> {
    let ctx = InferenceContext::load(forest, scaler)?;
    let f = ctx.classifier().forest();
    info!(
        forest = %ctx.forest_path(),
        scaler = %ctx.scaler_path(),
        n_trees = f.n_trees(),
        max_depth = f.max_depth(),
        total_nodes = f.total_nodes(),
        "artifacts loaded"
    );
    Ok(ctx)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            forest,
            scaler,
            fields,
        } => {
            let ctx = load_context(&forest, &scaler)?;
            let sample = WaterSample::from_form(&parse_fields(&fields)?)?;
            let verdict = ctx.classify(&sample)?;
            println!(
                "Water is predicted {} ({:.1}% of trees agree)",
                verdict.label,
                verdict.confidence * 100.0
            );
        }
        Commands::Inspect { forest, scaler } => {
            let ctx = load_context(&forest, &scaler)?;
            let f = ctx.classifier().forest();
            println!("forest:  {}", ctx.forest_path());
            println!("scaler:  {}", ctx.scaler_path());
            println!("trees:   {}", f.n_trees());
            println!("depth:   {}", f.max_depth());
            println!("nodes:   {}", f.total_nodes());
            println!("inputs:  {} features, {} classes", f.n_features(), f.n_classes());
        }
        Commands::Fields => {
            println!("{} required fields, in this order:", N_FEATURES);
            for spec in FEATURE_SPECS {
                println!(
                    "  {:<16} {:<6} typical {:.2} to {:.2}",
                    spec.name, spec.unit, spec.typical_range.0, spec.typical_range.1
                );
            }
        }
    }

    Ok(())
}
