//! `pantry init` command - Initialize a new pantry

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::project::{Project, ProjectError};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: std::path::PathBuf,

    /// Reinitialize even if .pantry/ already exists (data files are kept)
    #[arg(long)]
    pub force: bool,

    /// Do not write the starter CSV files
    #[arg(long)]
    pub no_seed: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let path = if args.path.as_os_str() == "." {
        std::env::current_dir().into_diagnostic()?
    } else {
        args.path.clone()
    };

    // Create directory if it doesn't exist
    if !path.exists() {
        std::fs::create_dir_all(&path).into_diagnostic()?;
        println!(
            "{} Created directory {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }

    let project = if args.force {
        Project::init_force(&path)
    } else {
        Project::init(&path)
    };

    let project = match project {
        Ok(project) => project,
        Err(ProjectError::AlreadyExists(path)) => {
            println!(
                "{} Pantry already exists at {}",
                style("!").yellow(),
                style(path.display()).cyan()
            );
            println!();
            println!("Use {} to reinitialize", style("pantry init --force").yellow());
            return Ok(());
        }
        Err(e) => return Err(miette::miette!("{}", e)),
    };

    println!(
        "{} Initialized pantry at {}",
        style("✓").green(),
        style(project.root().display()).cyan()
    );

    if !args.no_seed {
        let files = Config::load(Some(&project)).data_files(project.root());
        let written = Project::seed_data(&files.dir).map_err(|e| miette::miette!("{}", e))?;
        if !written.is_empty() {
            println!();
            println!("Created starter data:");
            for name in &written {
                println!("  {}", style(name).dim());
            }
        }
    }

    println!();
    println!("Next steps:");
    println!("  {} Record what you bought or used", style("pantry stock update Egg=6").yellow());
    println!("  {} List what is on hand", style("pantry stock list").yellow());
    println!("  {} See what you can cook", style("pantry cook").yellow());
    Ok(())
}
