//! Interchangeable pasta bases
//!
//! `Pasta_base_grouped.csv` has one column per group; any member of a group
//! can stand in for any other member.

use std::path::Path;

use crate::core::error::Result;
use crate::core::names::{normalize, title_case};
use crate::core::sheet::Sheet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseGroup {
    pub name: String,
    /// Normalized member names, in file order
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseGroups {
    groups: Vec<BaseGroup>,
}

impl BaseGroups {
    pub fn new(groups: Vec<BaseGroup>) -> Self {
        Self { groups }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_sheet(&Sheet::open(path)?))
    }

    pub fn from_sheet(sheet: &Sheet) -> Self {
        let groups = sheet
            .headers()
            .iter()
            .enumerate()
            .map(|(idx, name)| BaseGroup {
                name: name.trim().to_string(),
                members: sheet
                    .column(idx)
                    .map(normalize)
                    .filter(|m| !m.is_empty())
                    .collect(),
            })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[BaseGroup] {
        &self.groups
    }
}

/// Other members of the first group containing `base`, title-cased.
///
/// Returns an empty list when no group lists `base`. If `base` appears in
/// several groups only the first one counts.
pub fn alternatives_for_base(base: &str, groups: &BaseGroups) -> Vec<String> {
    let key = normalize(base);
    groups
        .groups()
        .iter()
        .find(|g| g.members.contains(&key))
        .map(|g| {
            g.members
                .iter()
                .filter(|m| **m != key)
                .map(|m| title_case(m))
                .collect()
        })
        .unwrap_or_default()
}
