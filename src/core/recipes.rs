//! Recipe tables
//!
//! `Pasta_Exp_recipes.csv` lists one dish per row: the first column is
//! `Dish Name`, every following column is an ingredient slot. Slots are
//! positional and rows may be ragged, so the table is turned into a
//! [`RecipeBook`] once at load time and never indexed by position again.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::error::{PantryError, Result};
use crate::core::names::{normalize, normalize_cell};
use crate::core::sheet::Sheet;

const DISH_COLUMN: &str = "Dish Name";

/// A dish and its required ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    /// Dish name as written, trimmed
    pub dish: String,
    /// Normalized ingredient names in slot order, blanks removed
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new<I, S>(dish: &str, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            dish: dish.trim().to_string(),
            ingredients: ingredients
                .into_iter()
                .filter_map(|s| normalize_cell(s.as_ref()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn load(path: &Path) -> Result<Self> {
        normalize_recipe_table(&Sheet::open(path)?)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Build a [`RecipeBook`] from the raw recipe sheet.
///
/// Every cell except the dish name loses its bracketed annotation and is
/// trimmed and lowercased; blank cells are dropped. The first header must be
/// `Dish Name` and no row may leave it blank.
pub fn normalize_recipe_table(sheet: &Sheet) -> Result<RecipeBook> {
    let first = sheet.headers().first().map(|h| h.trim());
    if !first.is_some_and(|h| h.eq_ignore_ascii_case(DISH_COLUMN)) {
        return Err(PantryError::MissingColumn {
            path: sheet.path().to_path_buf(),
            column: DISH_COLUMN.to_string(),
        });
    }

    let mut recipes = Vec::with_capacity(sheet.rows().len());
    for row in sheet.rows() {
        let dish = row.get(0).ok_or_else(|| PantryError::BlankDish {
            path: sheet.path().to_path_buf(),
            line: row.line,
        })?;
        recipes.push(Recipe::new(dish, row.cells_from(1)));
    }

    tracing::debug!(recipes = recipes.len(), "normalized recipe table");
    Ok(RecipeBook { recipes })
}

/// Descriptive row from `Recipes.csv`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishDetail {
    #[serde(rename = "Dish Name")]
    pub dish: String,
    #[serde(rename = "Base", default)]
    pub base: String,
    #[serde(rename = "Cooking Time", default)]
    pub cooking_time: String,
    #[serde(rename = "Calories per Serving", default)]
    pub calories_per_serving: String,
    #[serde(rename = "Ingredients & Quantity", default)]
    pub ingredients_and_quantity: String,
    #[serde(rename = "Level of Cost", default)]
    pub level_of_cost: String,
    #[serde(rename = "Dosage Size", default)]
    pub dosage_size: String,
}

impl DishDetail {
    /// Join key shared with [`crate::core::matcher::find_fully_preparable`]
    pub fn key(&self) -> String {
        normalize(&self.dish)
    }
}

/// All rows of the recipe detail file, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailTable {
    rows: Vec<DishDetail>,
}

impl DetailTable {
    pub fn new(rows: Vec<DishDetail>) -> Self {
        Self { rows }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| PantryError::io(path, e))?;
        Self::from_reader(path, BufReader::new(file))
    }

    pub fn from_reader<R: Read>(path: &Path, reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in rdr.deserialize::<DishDetail>() {
            rows.push(result.map_err(|e| PantryError::csv(path, e))?);
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[DishDetail] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(data: &str) -> Sheet {
        Sheet::from_reader("recipes.csv", data.as_bytes()).unwrap()
    }

    #[test]
    fn test_normalize_recipe_table() {
        let book = normalize_recipe_table(&sheet(
            "Dish Name,Ingredient 1,Ingredient 2,Ingredient 3\n\
             Carbonara ,Spaghetti,EGG,Pecorino Romano [grated]\n\
             Aglio e Olio,Spaghetti,,Garlic\n",
        ))
        .unwrap();

        assert_eq!(book.len(), 2);
        assert_eq!(book.recipes()[0].dish, "Carbonara");
        assert_eq!(
            book.recipes()[0].ingredients,
            vec!["spaghetti", "egg", "pecorino romano"]
        );
        assert_eq!(book.recipes()[1].ingredients, vec!["spaghetti", "garlic"]);
    }

    #[test]
    fn test_dish_name_keeps_case() {
        let book = normalize_recipe_table(&sheet("Dish Name,a\nCacio e Pepe,Pepper\n")).unwrap();
        assert_eq!(book.recipes()[0].dish, "Cacio e Pepe");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let book = normalize_recipe_table(&sheet("Dish Name,a,b\nX,Egg,egg\n")).unwrap();
        assert_eq!(book.recipes()[0].ingredients, vec!["egg", "egg"]);
    }

    #[test]
    fn test_missing_dish_column() {
        let err = normalize_recipe_table(&sheet("Name,a\nX,Egg\n")).unwrap_err();
        assert!(matches!(err, PantryError::MissingColumn { .. }));
    }

    #[test]
    fn test_blank_dish_reports_line() {
        let err = normalize_recipe_table(&sheet("Dish Name,a\nX,Egg\n ,Egg\n")).unwrap_err();
        match err {
            PantryError::BlankDish { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_detail_table() {
        let data = "Dish Name,Base,Cooking Time,Calories per Serving,Ingredients & Quantity,Level of Cost,Dosage Size\n\
                    Carbonara ,Spaghetti,20 min,650,\"Spaghetti 100g, Egg 2\",Medium,1 serving\n";
        let table = DetailTable::from_reader(Path::new("Recipes.csv"), data.as_bytes()).unwrap();

        let row = &table.rows()[0];
        assert_eq!(row.key(), "carbonara");
        assert_eq!(row.base, "Spaghetti");
        assert_eq!(row.ingredients_and_quantity, "Spaghetti 100g, Egg 2");
        assert_eq!(row.dosage_size, "1 serving");
    }
}
