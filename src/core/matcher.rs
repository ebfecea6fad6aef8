//! Recipe matching against the current pantry
//!
//! Matching is pure set membership: a quantity above zero means "on hand",
//! whatever the amount.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::names::normalize;
use crate::core::recipes::{DetailTable, DishDetail, RecipeBook};

/// Normalized names of everything on hand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySet {
    names: BTreeSet<String>,
}

impl AvailabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str) {
        let key = normalize(name);
        if !key.is_empty() {
            self.names.insert(key);
        }
    }

    /// Membership test; `name` is normalized before the lookup
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for AvailabilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

/// A dish that is one ingredient short
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NearMiss {
    pub dish: String,
    pub missing: String,
    /// Ingredients on hand, in recipe order
    pub present: Vec<String>,
}

/// Dishes whose every required ingredient is on hand.
///
/// Names come back normalized so they can be joined against the detail
/// table with [`dish_details`].
pub fn find_fully_preparable(available: &AvailabilitySet, book: &RecipeBook) -> Vec<String> {
    let dishes: Vec<String> = book
        .recipes()
        .iter()
        .filter(|r| r.ingredients.iter().all(|i| available.contains(i)))
        .map(|r| normalize(&r.dish))
        .collect();

    tracing::debug!(count = dishes.len(), "fully preparable dishes");
    dishes
}

/// Dishes missing exactly one required ingredient.
///
/// Dishes missing nothing or two or more are left out.
pub fn find_missing_exactly_one(available: &AvailabilitySet, book: &RecipeBook) -> Vec<NearMiss> {
    let mut near = Vec::new();
    for recipe in book.recipes() {
        let (present, missing): (Vec<&String>, Vec<&String>) = recipe
            .ingredients
            .iter()
            .partition(|i| available.contains(i));

        if let [only] = missing.as_slice() {
            near.push(NearMiss {
                dish: recipe.dish.trim().to_string(),
                missing: (*only).clone(),
                present: present.into_iter().cloned().collect(),
            });
        }
    }

    tracing::debug!(count = near.len(), "dishes missing one ingredient");
    near
}

/// Detail rows for the given dishes, in detail-file order.
///
/// Detail dish names are normalized before the join, so `"  Carbonara"` in
/// the detail file still matches `"carbonara"`.
pub fn dish_details<'a>(dishes: &[String], details: &'a DetailTable) -> Vec<&'a DishDetail> {
    let wanted: BTreeSet<String> = dishes.iter().map(|d| normalize(d)).collect();
    details
        .rows()
        .iter()
        .filter(|row| wanted.contains(&row.key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recipes::Recipe;

    fn book() -> RecipeBook {
        RecipeBook::new(vec![
            Recipe::new("Carbonara", ["Egg", "Pasta", "Cheese"]),
            Recipe::new("Aglio e Olio", ["Pasta", "Garlic", "Olive Oil"]),
            Recipe::new(" Plain Pasta ", ["Pasta", ""]),
            Recipe::new("Pesto", ["Pasta", "Basil", "Pine Nuts", "Cheese"]),
        ])
    }

    #[test]
    fn test_availability_set_normalizes() {
        let set: AvailabilitySet = ["Egg [large]", "PASTA", " "].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("egg"));
        assert!(set.contains("Pasta"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_carbonara_missing_cheese() {
        let available: AvailabilitySet = ["Egg", "Pasta"].into_iter().collect();
        let near = find_missing_exactly_one(&available, &book());

        let carbonara = near.iter().find(|n| n.dish == "Carbonara").unwrap();
        assert_eq!(carbonara.missing, "cheese");
        assert_eq!(carbonara.present, vec!["egg", "pasta"]);
    }

    #[test]
    fn test_fully_preparable() {
        let available: AvailabilitySet = ["egg", "pasta", "cheese"].into_iter().collect();
        let dishes = find_fully_preparable(&available, &book());
        assert_eq!(dishes, vec!["carbonara", "plain pasta"]);
    }

    #[test]
    fn test_preparable_dishes_have_every_ingredient() {
        let available: AvailabilitySet = ["pasta", "garlic", "olive oil", "egg"].into_iter().collect();
        let book = book();
        for dish in find_fully_preparable(&available, &book) {
            let recipe = book
                .recipes()
                .iter()
                .find(|r| normalize(&r.dish) == dish)
                .unwrap();
            assert!(recipe.ingredients.iter().all(|i| available.contains(i)));
        }
    }

    #[test]
    fn test_near_miss_excludes_complete_and_far_dishes() {
        let available: AvailabilitySet = ["pasta", "garlic", "egg"].into_iter().collect();
        let book = book();
        let full = find_fully_preparable(&available, &book);
        let near = find_missing_exactly_one(&available, &book);

        let near_dishes: Vec<_> = near.iter().map(|n| n.dish.as_str()).collect();
        assert_eq!(near_dishes, vec!["Carbonara", "Aglio e Olio"]);
        for miss in &near {
            assert!(!full.contains(&normalize(&miss.dish)));
            let recipe = book.recipes().iter().find(|r| r.dish == miss.dish).unwrap();
            let missing = recipe
                .ingredients
                .iter()
                .filter(|i| !available.contains(i))
                .count();
            assert_eq!(missing, 1);
        }
    }

    #[test]
    fn test_near_miss_dish_name_is_trimmed() {
        let book = RecipeBook::new(vec![Recipe::new("  Cacio e Pepe ", ["Pasta", "Pepper"])]);
        let available: AvailabilitySet = ["pasta"].into_iter().collect();
        let near = find_missing_exactly_one(&available, &book);
        assert_eq!(near[0].dish, "Cacio e Pepe");
        assert_eq!(near[0].missing, "pepper");
    }

    #[test]
    fn test_duplicate_ingredients_count_twice() {
        let book = RecipeBook::new(vec![Recipe::new("X", ["Egg", "Egg", "Pasta"])]);

        let pasta_only: AvailabilitySet = ["pasta"].into_iter().collect();
        assert!(find_missing_exactly_one(&pasta_only, &book).is_empty());

        let egg_only: AvailabilitySet = ["egg"].into_iter().collect();
        let near = find_missing_exactly_one(&egg_only, &book);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].missing, "pasta");
        assert_eq!(near[0].present, vec!["egg", "egg"]);
    }

    #[test]
    fn test_empty_availability() {
        let available = AvailabilitySet::new();
        let book = book();
        assert!(find_fully_preparable(&available, &book).is_empty());
        assert!(find_missing_exactly_one(&available, &book).is_empty());
    }

    #[test]
    fn test_dish_details_join_renormalizes() {
        let details = DetailTable::new(vec![
            DishDetail {
                dish: "  CARBONARA".into(),
                base: "Spaghetti".into(),
                ..Default::default()
            },
            DishDetail {
                dish: "Pesto".into(),
                ..Default::default()
            },
        ]);
        let rows = dish_details(&["carbonara".to_string()], &details);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].base, "Spaghetti");
    }
}
