//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use miette::Result;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Pantry, Project};

/// Everything a command needs to reach the data files
pub struct Context {
    pub project: Project,
    pub config: Config,
    pub pantry: Pantry,
    pub format: OutputFormat,
}

/// Locate the project, load its configuration and resolve the data files
pub fn open(global: &GlobalOpts) -> Result<Context> {
    let project = match &global.project {
        Some(path) => Project::discover_from(path),
        None => Project::discover(),
    }
    .map_err(|e| miette::miette!("{}", e))?;

    let config = Config::load(Some(&project));
    let pantry = Pantry::for_project(&project, &config);
    let format = global.format.or_default(config.default_format.as_deref());

    tracing::debug!(root = %project.root().display(), data = %pantry.files().dir.display(), "opened pantry");
    Ok(Context {
        project,
        config,
        pantry,
        format,
    })
}

/// Format a quantity without a trailing `.0` for whole numbers
pub fn format_qty(qt: f64) -> String {
    if qt.fract() == 0.0 && qt.abs() < 1e15 {
        format!("{}", qt as i64)
    } else {
        format!("{}", qt)
    }
}

/// Image search link for a dish, words joined with `+`
pub fn image_search_link(dish: &str) -> String {
    format!(
        "https://www.google.com/search?tbm=isch&q={}",
        dish.split_whitespace().collect::<Vec<_>>().join("+")
    )
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
