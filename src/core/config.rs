//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::Project;

/// Default data file names
pub const SELECTION_FILE: &str = "Ingredients_selection_table.csv";
pub const QUANTITIES_FILE: &str = "Ingredients_qt._table.csv";
pub const RECIPES_FILE: &str = "Pasta_Exp_recipes.csv";
pub const RECIPE_DETAILS_FILE: &str = "Recipes.csv";
pub const PASTA_BASE_GROUPED_FILE: &str = "Pasta_base_grouped.csv";

/// Per-file name overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNames {
    pub selection: Option<String>,
    pub quantities: Option<String>,
    pub recipes: Option<String>,
    pub recipe_details: Option<String>,
    pub pasta_base_grouped: Option<String>,
}

impl FileNames {
    fn merge(&mut self, other: FileNames) {
        if other.selection.is_some() {
            self.selection = other.selection;
        }
        if other.quantities.is_some() {
            self.quantities = other.quantities;
        }
        if other.recipes.is_some() {
            self.recipes = other.recipes;
        }
        if other.recipe_details.is_some() {
            self.recipe_details = other.recipe_details;
        }
        if other.pasta_base_grouped.is_some() {
            self.pasta_base_grouped = other.pasta_base_grouped;
        }
    }
}

/// Pantry configuration with layered hierarchy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the CSV files, relative to the project root
    pub data_dir: Option<PathBuf>,

    pub files: FileNames,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load(project: Option<&Project>) -> Self {
        let mut config = Config::default();

        // 1. Global user config (~/.config/pantry/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 2. Project config (.pantry/config.yaml)
        if let Some(project) = project {
            if let Some(project_config) = Self::read_file(&project.config_path()) {
                config.merge(project_config);
            }
        }

        // 3. Environment variables
        if let Ok(dir) = std::env::var("PANTRY_DATA_DIR") {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        config
    }

    fn read_file(path: &Path) -> Option<Config> {
        let contents = std::fs::read_to_string(path).ok()?;
        let has_settings = contents
            .lines()
            .map(str::trim)
            .any(|l| !l.is_empty() && !l.starts_with('#'));
        if !has_settings {
            return None;
        }
        match serde_yml::from_str::<Config>(&contents) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                None
            }
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pantry")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        self.files.merge(other.files);
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Resolve every data file path under `root`
    pub fn data_files(&self, root: &Path) -> DataFiles {
        let dir = match &self.data_dir {
            Some(d) if d.is_absolute() => d.clone(),
            Some(d) => root.join(d),
            None => root.to_path_buf(),
        };
        let pick = |name: &Option<String>, default: &str| {
            dir.join(name.as_deref().unwrap_or(default))
        };

        DataFiles {
            selection: pick(&self.files.selection, SELECTION_FILE),
            quantities: pick(&self.files.quantities, QUANTITIES_FILE),
            recipes: pick(&self.files.recipes, RECIPES_FILE),
            recipe_details: pick(&self.files.recipe_details, RECIPE_DETAILS_FILE),
            pasta_base_grouped: pick(&self.files.pasta_base_grouped, PASTA_BASE_GROUPED_FILE),
            dir,
        }
    }
}

/// Absolute locations of the five pantry data files
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataFiles {
    pub dir: PathBuf,
    pub selection: PathBuf,
    pub quantities: PathBuf,
    pub recipes: PathBuf,
    pub recipe_details: PathBuf,
    pub pasta_base_grouped: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let files = Config::default().data_files(Path::new("/p"));
        assert_eq!(files.dir, PathBuf::from("/p"));
        assert_eq!(files.quantities, PathBuf::from("/p/Ingredients_qt._table.csv"));
        assert_eq!(files.recipes, PathBuf::from("/p/Pasta_Exp_recipes.csv"));
    }

    #[test]
    fn test_overrides_apply() {
        let config: Config = serde_yml::from_str(
            "data_dir: data\nfiles:\n  recipes: dishes.csv\ndefault_format: json\n",
        )
        .unwrap();
        let files = config.data_files(Path::new("/p"));

        assert_eq!(files.recipes, PathBuf::from("/p/data/dishes.csv"));
        assert_eq!(files.selection, PathBuf::from("/p/data/Ingredients_selection_table.csv"));
        assert_eq!(config.default_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_merge_prefers_later_layer() {
        let mut base: Config = serde_yml::from_str("files:\n  recipes: a.csv\n  quantities: q.csv\n").unwrap();
        let top: Config = serde_yml::from_str("files:\n  recipes: b.csv\n").unwrap();
        base.merge(top);

        assert_eq!(base.files.recipes.as_deref(), Some("b.csv"));
        assert_eq!(base.files.quantities.as_deref(), Some("q.csv"));
    }

    #[test]
    fn test_commented_out_file_reads_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "# nothing set\n").unwrap();
        assert_eq!(Config::read_file(&path), None);
    }
}
