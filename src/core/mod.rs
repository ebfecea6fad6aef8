//! Core module - data files, inventory and recipe matching

pub mod bases;
pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;
pub mod matcher;
pub mod names;
pub mod pantry;
pub mod project;
pub mod recipes;
pub mod sheet;
pub mod store;

pub use bases::{alternatives_for_base, BaseGroups};
pub use catalog::Catalog;
pub use config::{Config, DataFiles};
pub use error::PantryError;
pub use inventory::{apply_delta, availability_set, list_available, Delta, UpdateOutcome};
pub use matcher::{
    dish_details, find_fully_preparable, find_missing_exactly_one, AvailabilitySet, NearMiss,
};
pub use pantry::Pantry;
pub use project::{Project, ProjectError};
pub use recipes::{normalize_recipe_table, DetailTable, DishDetail, RecipeBook};
pub use store::{CsvQuantityStore, MemoryQuantityStore, QuantityStore, QuantityTable};
