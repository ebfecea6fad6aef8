//! Errors raised while reading and writing pantry data files

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Failure loading or saving one of the pantry CSV files.
///
/// Any of these ends the current command; they are never retried.
#[derive(Debug, Error, Diagnostic)]
pub enum PantryError {
    #[error("cannot access {}: {source}", path.display())]
    #[diagnostic(
        code(pantry::io),
        help("run `pantry init` to create the starter data files")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    #[diagnostic(code(pantry::csv))]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no '{column}' column", path.display())]
    #[diagnostic(code(pantry::missing_column))]
    MissingColumn { path: PathBuf, column: String },

    #[error("{} line {line}: dish name is blank", path.display())]
    #[diagnostic(code(pantry::recipe))]
    BlankDish { path: PathBuf, line: u64 },
}

impl PantryError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = PantryError> = std::result::Result<T, E>;
