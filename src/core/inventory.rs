//! Inventory updates and availability
//!
//! Quantities only ever change through [`apply_delta`], which adds signed
//! amounts to the stored totals and clamps at zero.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::core::catalog::Catalog;
use crate::core::error::Result;
use crate::core::matcher::AvailabilitySet;
use crate::core::names::{clean_name, normalize};
use crate::core::store::{QuantityStore, QuantityTable};

/// A signed change to one ingredient's total
#[derive(Debug, Clone, PartialEq)]
pub struct Delta {
    /// Ingredient as the user typed or selected it
    pub ingredient: String,
    pub amount: f64,
}

impl Delta {
    pub fn new(ingredient: impl Into<String>, amount: f64) -> Self {
        Self {
            ingredient: ingredient.into(),
            amount,
        }
    }
}

/// A quantity input that is not a number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub ingredient: String,
    pub input: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid quantity for {}. Please enter a valid number.",
            self.ingredient
        )
    }
}

/// Parse one quantity input for `ingredient`
pub fn parse_delta(ingredient: &str, input: &str) -> std::result::Result<Delta, ValidationError> {
    match input.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(Delta::new(ingredient.trim(), amount)),
        _ => Err(ValidationError {
            ingredient: ingredient.trim().to_string(),
            input: input.to_string(),
        }),
    }
}

/// Parse `NAME=QTY` entries.
///
/// Bad entries are returned separately and never stop the rest of the batch.
pub fn parse_deltas<S: AsRef<str>>(entries: &[S]) -> (Vec<Delta>, Vec<ValidationError>) {
    let mut deltas = Vec::new();
    let mut errors = Vec::new();

    for entry in entries {
        let entry = entry.as_ref();
        // Split on the last '=' so names may contain one
        let parsed = match entry.rsplit_once('=') {
            Some((name, qty)) => parse_delta(name, qty),
            None => Err(ValidationError {
                ingredient: entry.trim().to_string(),
                input: String::new(),
            }),
        };
        match parsed {
            Ok(delta) => deltas.push(delta),
            Err(err) => errors.push(err),
        }
    }

    (deltas, errors)
}

/// A delta that reached a stored row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Applied {
    pub ingredient: String,
    pub previous: f64,
    pub delta: f64,
    pub total: f64,
}

/// A delta that would have taken a total below zero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClampWarning {
    pub ingredient: String,
    /// The negative total that was replaced with zero
    pub attempted: f64,
}

impl fmt::Display for ClampWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot set a negative total quantity for {}. Adjusted to 0.",
            self.ingredient
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateOutcome {
    pub applied: Vec<Applied>,
    pub warnings: Vec<ClampWarning>,
    /// Ingredients with no row in the quantities table
    pub unknown: Vec<String>,
}

/// Add `deltas` to the stored totals and save the table once.
///
/// Totals that would go negative are set to zero and reported in
/// [`UpdateOutcome::warnings`]. Ingredients missing from the table are
/// skipped and listed in [`UpdateOutcome::unknown`].
pub fn apply_delta<S: QuantityStore + ?Sized>(store: &S, deltas: &[Delta]) -> Result<UpdateOutcome> {
    let mut table = store.load()?;
    let mut outcome = UpdateOutcome::default();

    for delta in deltas {
        let name = clean_name(&delta.ingredient);
        let Some(row) = table.get_mut(name) else {
            tracing::debug!(ingredient = name, "not in quantities table, skipped");
            outcome.unknown.push(delta.ingredient.clone());
            continue;
        };

        let previous = row.qt;
        let mut total = previous + delta.amount;
        if total < 0.0 {
            tracing::warn!(ingredient = name, attempted = total, "clamped negative total to zero");
            outcome.warnings.push(ClampWarning {
                ingredient: delta.ingredient.clone(),
                attempted: total,
            });
            total = 0.0;
        }
        row.qt = total;

        outcome.applied.push(Applied {
            ingredient: row.ingredient.clone(),
            previous,
            delta: delta.amount,
            total,
        });
    }

    store.save(&table)?;
    Ok(outcome)
}

/// An in-stock ingredient with its category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableIngredient {
    pub category: String,
    pub ingredient: String,
    pub qt: f64,
    pub unit: Option<String>,
}

/// Catalogued ingredients with a total above zero, sorted by category then
/// name.
///
/// An ingredient listed under two categories appears once per category.
/// Rows missing from the catalog are left out.
pub fn list_available(table: &QuantityTable, catalog: &Catalog) -> Vec<AvailableIngredient> {
    let mut available = Vec::new();
    for row in table.rows().iter().filter(|r| r.qt > 0.0) {
        for category in catalog.categories_of(&row.ingredient) {
            available.push(AvailableIngredient {
                category: category.to_string(),
                ingredient: row.ingredient.clone(),
                qt: row.qt,
                unit: row.unit().map(str::to_string),
            });
        }
    }

    available.sort_by(|a, b| match a.category.cmp(&b.category) {
        Ordering::Equal => a.ingredient.cmp(&b.ingredient),
        other => other,
    });
    available
}

/// Normalized names of every row with a total above zero
pub fn availability_set(table: &QuantityTable) -> AvailabilitySet {
    table
        .rows()
        .iter()
        .filter(|r| r.qt > 0.0)
        .map(|r| r.ingredient.as_str())
        .collect()
}

/// Unit to show next to `ingredient` when asking for a quantity
pub fn unit_for<'a>(table: &'a QuantityTable, ingredient: &str) -> Option<&'a str> {
    table.get(&normalize(ingredient)).and_then(|r| r.unit())
}
