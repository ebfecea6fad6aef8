//! Pantry: ingredient inventory and pasta recipe matching
//!
//! Quantities, the ingredient catalog and the recipe tables are plain CSV
//! files. The `core` module holds the data handling and matching; `cli`
//! wraps it in the `pantry` command.

pub mod cli;
pub mod core;
