//! `rulefit generate` — Assemble a rules document for a destination.

use crate::{content, detect};
use clap::Args;
use rulefit_config::AppConfig;
use rulefit_core::{AssemblyRequest, Complexity, ProfileRegistry};
use rulefit_engine::Engine;
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    /// Destination identifier (defaults to the configured destination;
    /// unknown values use the default profile)
    #[arg(short, long)]
    dest: Option<String>,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Example category (defaults to detection from the current directory)
    #[arg(long)]
    category: Option<String>,

    /// Requested depth: minimal, standard, or detailed
    #[arg(long, default_value = "standard")]
    complexity: Complexity,

    /// Locale tag carried on the request
    #[arg(long)]
    locale: Option<String>,

    /// Extra rule line appended to the document (repeatable)
    #[arg(long = "directive")]
    directives: Vec<String>,

    /// Emit the full result (document, applied steps, warnings) as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let mut registry = ProfileRegistry::builtin();
    config.apply_overrides(&mut registry);
    let engine = Engine::new(content::default_library(), registry).with_tuning(config.tuning());

    let destination = args.dest.unwrap_or_else(|| config.default_destination.clone());
    let category = args
        .category
        .or_else(|| detect::detect_category(&std::env::current_dir().unwrap_or_default()));

    let request = AssemblyRequest {
        destination,
        complexity: args.complexity,
        locale: args.locale.unwrap_or_else(|| config.default_locale.clone()),
        directives: args.directives,
        category,
    };

    let result = engine.generate(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match args.out {
        Some(path) => {
            std::fs::write(&path, &result.document)?;
            println!(
                "✅ Wrote {} ({} chars, steps: {})",
                path.display(),
                result.document.len(),
                result
                    .applied_steps
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            for warning in &result.warnings {
                println!("   ⚠️  {warning}");
            }
        }
        None => {
            println!("{}", result.document);
            for warning in &result.warnings {
                eprintln!("⚠️  {warning}");
            }
        }
    }

    Ok(())
}
