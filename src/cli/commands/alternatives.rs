//! `pantry alternatives` command - Interchangeable pasta bases

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::open;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::bases::alternatives_for_base;

#[derive(clap::Args, Debug)]
pub struct AlternativesArgs {
    /// Pasta base, e.g. "Spaghetti"
    pub base: String,
}

pub fn run(args: AlternativesArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = open(global)?;
    let bases = ctx.pantry.bases()?;
    let alternatives = alternatives_for_base(&args.base, &bases);

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&alternatives).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&alternatives).into_diagnostic()?);
        }
        OutputFormat::Tsv | OutputFormat::Csv => {
            for alt in &alternatives {
                println!("{}", alt);
            }
        }
        _ => {
            let listed = if alternatives.is_empty() {
                style("None".to_string()).dim()
            } else {
                style(alternatives.join(", ")).cyan()
            };
            println!("Alternative Pastas: {}", listed);
        }
    }

    Ok(())
}
