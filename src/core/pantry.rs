//! Access to a project's data files
//!
//! Commands load each file at most once through a [`Pantry`] and pass the
//! loaded tables to the pure functions in `inventory` and `matcher`.

use std::path::Path;

use crate::core::bases::BaseGroups;
use crate::core::catalog::Catalog;
use crate::core::config::{Config, DataFiles};
use crate::core::error::Result;
use crate::core::project::Project;
use crate::core::recipes::{DetailTable, RecipeBook};
use crate::core::store::{CsvQuantityStore, QuantityStore, QuantityTable};

#[derive(Debug, Clone)]
pub struct Pantry {
    files: DataFiles,
}

impl Pantry {
    pub fn new(files: DataFiles) -> Self {
        Self { files }
    }

    /// Pantry for a project, honoring its configuration
    pub fn for_project(project: &Project, config: &Config) -> Self {
        Self::new(config.data_files(project.root()))
    }

    /// Pantry with default file names in `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(Config::default().data_files(dir))
    }

    pub fn files(&self) -> &DataFiles {
        &self.files
    }

    pub fn store(&self) -> CsvQuantityStore {
        CsvQuantityStore::new(&self.files.quantities)
    }

    pub fn quantities(&self) -> Result<QuantityTable> {
        self.store().load()
    }

    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::load(&self.files.selection)
    }

    pub fn recipes(&self) -> Result<RecipeBook> {
        RecipeBook::load(&self.files.recipes)
    }

    pub fn details(&self) -> Result<DetailTable> {
        DetailTable::load(&self.files.recipe_details)
    }

    pub fn bases(&self) -> Result<BaseGroups> {
        BaseGroups::load(&self.files.pasta_base_grouped)
    }
}
