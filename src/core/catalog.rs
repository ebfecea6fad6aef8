//! Ingredient category catalog
//!
//! The selection file is a wide table: every column is a category and its
//! cells are ingredient display names, e.g.
//!
//! ```text
//! Dairy,Protein,Vegetable
//! Egg,Guanciale,Garlic
//! Pecorino Romano [grated],,Chili
//! ```

use std::path::Path;

use crate::core::error::Result;
use crate::core::names::{clean_name, normalize};
use crate::core::sheet::Sheet;

/// One catalog column
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    /// Display names as written, annotations included
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_sheet(&Sheet::open(path)?))
    }

    pub fn from_sheet(sheet: &Sheet) -> Self {
        let categories = sheet
            .headers()
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.trim().is_empty())
            .map(|(idx, name)| Category {
                name: name.trim().to_string(),
                items: sheet.column(idx).map(str::to_string).collect(),
            })
            .collect();
        Self { categories }
    }

    /// Categories in file column order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Long form of the table: `(category, ingredient)` with annotations
    /// stripped from the ingredient
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.categories.iter().flat_map(|c| {
            c.items
                .iter()
                .map(move |item| (c.name.as_str(), clean_name(item)))
        })
    }

    /// Every category that lists `ingredient`, in column order
    pub fn categories_of(&self, ingredient: &str) -> Vec<&str> {
        let key = normalize(ingredient);
        let mut found: Vec<&str> = Vec::new();
        for (category, name) in self.entries() {
            if normalize(name) == key && !found.contains(&category) {
                found.push(category);
            }
        }
        found
    }
}

/// Heading icon for the well-known categories
pub fn emoji_for(category: &str) -> &'static str {
    match category {
        "Dairy" => "\u{1F9C0}",
        "Protein" => "\u{1F969}",
        "Sea Protein" => "\u{1F41F}",
        "Vegetable" => "\u{1F966}",
        "Sauce" => "\u{1F372}",
        "Basic Condiments" => "\u{1F9C2}",
        "Other" => "\u{1F954}",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let data = "Dairy,Protein,Vegetable\n\
                    Egg,Guanciale,Garlic\n\
                    Pecorino Romano [grated],,Chili\n\
                    ,,Egg\n";
        Catalog::from_sheet(&Sheet::from_reader("sel.csv", data.as_bytes()).unwrap())
    }

    #[test]
    fn test_columns_become_categories() {
        let catalog = sample();
        let names: Vec<_> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Dairy", "Protein", "Vegetable"]);
        assert_eq!(
            catalog.categories()[0].items,
            vec!["Egg", "Pecorino Romano [grated]"]
        );
        assert_eq!(catalog.categories()[1].items, vec!["Guanciale"]);
    }

    #[test]
    fn test_entries_strip_annotations() {
        let catalog = sample();
        let entries: Vec<_> = catalog.entries().collect();
        assert!(entries.contains(&("Dairy", "Pecorino Romano")));
        assert_eq!(entries.len(), 6);
    }

    #[test]
    fn test_categories_of() {
        let catalog = sample();
        assert_eq!(catalog.categories_of("egg"), vec!["Dairy", "Vegetable"]);
        assert_eq!(catalog.categories_of("pecorino romano"), vec!["Dairy"]);
        assert!(catalog.categories_of("Saffron").is_empty());
    }

    #[test]
    fn test_emoji_for() {
        assert_eq!(emoji_for("Dairy"), "\u{1F9C0}");
        assert_eq!(emoji_for("Spices"), "");
    }
}
