//! `pantry config` command - Inspect configuration

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::open;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration and resolved data files
    Show,

    /// Show paths to configuration files
    Path,
}

pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(global),
        ConfigCommands::Path => run_path(global),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let ctx = open(global)?;
    let files = ctx.pantry.files();

    match ctx.format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "config": ctx.config, "files": files });
            println!("{}", serde_json::to_string_pretty(&value).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&ctx.config).into_diagnostic()?);
        }
        _ => {
            println!("{}", style("Effective Configuration").bold().underlined());
            println!();
            print_value(
                "data_dir",
                ctx.config.data_dir.as_ref().map(|d| d.display().to_string()),
            );
            print_value("default_format", ctx.config.default_format.clone());

            println!();
            println!("{}", style("Data files:").bold());
            for (key, path) in [
                ("selection", &files.selection),
                ("quantities", &files.quantities),
                ("recipes", &files.recipes),
                ("recipe_details", &files.recipe_details),
                ("pasta_base_grouped", &files.pasta_base_grouped),
            ] {
                let marker = if path.exists() {
                    style("✓").green()
                } else {
                    style("✗").red()
                };
                println!("  {} {:<20} {}", marker, key, path.display());
            }

            println!();
            println!("{}", style("Config Sources (in priority order):").dim());
            println!("  1. Environment variables (PANTRY_DATA_DIR)");
            println!("  2. Project config (.pantry/config.yaml)");
            println!("  3. Global config (~/.config/pantry/config.yaml)");
        }
    }

    Ok(())
}

fn print_value(key: &str, value: Option<String>) {
    match value {
        Some(v) => println!("  {:<16} {}", style(key).cyan(), v),
        None => println!("  {:<16} {}", style(key).cyan(), style("(not set)").dim()),
    }
}

fn run_path(global: &GlobalOpts) -> Result<()> {
    println!("{}", style("Configuration file paths:").bold());
    println!();

    match Config::global_config_path() {
        Some(path) => println!("  {} {}", style("Global:").cyan(), path.display()),
        None => println!("  {} {}", style("Global:").cyan(), style("(unavailable)").dim()),
    }

    match open(global) {
        Ok(ctx) => {
            let path = ctx.project.config_path();
            let state = if path.exists() { "(exists)" } else { "(not created)" };
            println!(
                "  {} {} {}",
                style("Project:").cyan(),
                path.display(),
                style(state).dim()
            );
        }
        Err(_) => println!(
            "  {} {}",
            style("Project:").cyan(),
            style("(not in a pantry project)").dim()
        ),
    }

    Ok(())
}
