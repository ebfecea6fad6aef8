//! Project discovery and structure

use rust_embed::Embed;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Starter CSV files written by `pantry init`
#[derive(Embed)]
#[folder = "seed/"]
struct SeedData;

/// Name of the marker directory at the project root
pub const PANTRY_DIR: &str = ".pantry";

/// Represents a pantry project
#[derive(Debug)]
pub struct Project {
    /// Root directory of the project (parent of .pantry/)
    root: PathBuf,
}

impl Project {
    /// Find project root by walking up from the current directory
    pub fn discover() -> Result<Self, ProjectError> {
        let current = std::env::current_dir().map_err(|e| ProjectError::IoError(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find project root by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        loop {
            if current.join(PANTRY_DIR).is_dir() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(ProjectError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new project at the given path
    pub fn init(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if root.join(PANTRY_DIR).exists() {
            return Err(ProjectError::AlreadyExists(root));
        }
        Self::init_force(&root)
    }

    /// Initialize even if .pantry/ exists; existing data files are kept
    pub fn init_force(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let pantry_dir = root.join(PANTRY_DIR);

        std::fs::create_dir_all(&pantry_dir).map_err(|e| ProjectError::IoError(e.to_string()))?;
        std::fs::write(pantry_dir.join("config.yaml"), Self::default_config())
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        Ok(Self { root })
    }

    fn default_config() -> &'static str {
        r#"# Pantry project configuration

# Directory holding the CSV files, relative to the project root
# data_dir: "."

# Override individual file names
# files:
#   selection: Ingredients_selection_table.csv
#   quantities: Ingredients_qt._table.csv
#   recipes: Pasta_Exp_recipes.csv
#   recipe_details: Recipes.csv
#   pasta_base_grouped: Pasta_base_grouped.csv

# Default output format (auto, md, json, yaml, tsv, csv)
# default_format: auto
"#
    }

    /// Write the starter CSV files into `dir`, skipping files that exist.
    ///
    /// Returns the names of the files written.
    pub fn seed_data(dir: &Path) -> Result<Vec<String>, ProjectError> {
        std::fs::create_dir_all(dir).map_err(|e| ProjectError::IoError(e.to_string()))?;

        let mut written = Vec::new();
        for name in SeedData::iter() {
            let target = dir.join(name.as_ref());
            if target.exists() {
                continue;
            }
            let Some(file) = SeedData::get(name.as_ref()) else {
                continue;
            };
            std::fs::write(&target, file.data.as_ref())
                .map_err(|e| ProjectError::IoError(e.to_string()))?;
            written.push(name.to_string());
        }
        written.sort();
        Ok(written)
    }

    /// Get the project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the .pantry configuration directory
    pub fn pantry_dir(&self) -> PathBuf {
        self.root.join(PANTRY_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.pantry_dir().join("config.yaml")
    }
}

/// Errors related to project operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("not a pantry project (searched from {searched_from:?}). Run 'pantry init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("pantry project already exists at {0:?}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_marker_and_config() {
        let tmp = tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();

        assert!(project.pantry_dir().is_dir());
        assert!(project.config_path().is_file());
    }

    #[test]
    fn test_init_twice_fails() {
        let tmp = tempdir().unwrap();
        Project::init(tmp.path()).unwrap();
        assert!(matches!(
            Project::init(tmp.path()),
            Err(ProjectError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let tmp = tempdir().unwrap();
        Project::init(tmp.path()).unwrap();
        let nested = tmp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = Project::discover_from(&nested).unwrap();
        assert_eq!(found.root(), tmp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_discover_outside_project() {
        let tmp = tempdir().unwrap();
        assert!(matches!(
            Project::discover_from(tmp.path()),
            Err(ProjectError::NotFound { .. })
        ));
    }

    #[test]
    fn test_seed_data_keeps_existing_files() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("Recipes.csv"), "mine").unwrap();

        let written = Project::seed_data(tmp.path()).unwrap();

        assert_eq!(written.len(), 4);
        assert!(!written.contains(&"Recipes.csv".to_string()));
        assert!(tmp.path().join("Ingredients_qt._table.csv").is_file());
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("Recipes.csv")).unwrap(),
            "mine"
        );
    }
}
