use serde::Deserialize;

use crate::dashboard::FilterChange;
use crate::domain::filters::Availability;

/// Search bar submission. Categories arrive as repeated `category` keys.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub availability: Availability,
}

impl SearchForm {
    /// Field updates to apply before searching.
    pub fn into_changes(self) -> Vec<FilterChange> {
        let mut categories: Vec<String> = self
            .category
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        categories.dedup();

        vec![
            FilterChange::Name(self.name),
            FilterChange::Categories(categories),
            FilterChange::Availability(self.availability),
        ]
    }
}
