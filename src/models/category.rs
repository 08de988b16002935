// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Category labels used to tag and filter projects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Labels every catalog accepts when it does not declare its own list.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Renders", "Schematics", "Prototyping", "Simulation"];

/// An opaque, comparable category label.
///
/// The closed set of valid labels is owned by the catalog, so nothing here
/// assumes a particular vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// The default category enumeration, in declaration order.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES.iter().map(|c| Category::from(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ordering_is_lexicographic() {
        let mut labels = default_categories();
        labels.sort();
        let names: Vec<&str> = labels.iter().map(Category::as_str).collect();
        assert_eq!(names, ["Prototyping", "Renders", "Schematics", "Simulation"]);
    }

    #[test]
    fn test_category_serializes_as_plain_string() {
        let json = serde_json::to_string(&Category::from("Renders")).unwrap();
        assert_eq!(json, "\"Renders\"");
    }
}
