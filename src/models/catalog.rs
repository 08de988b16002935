// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The validated, immutable project catalog.
//!
//! A [`Catalog`] can only be built through [`Catalog::new`], which enforces
//! the record invariants the gallery relies on: every project has at least
//! one image, at least one category, only categories from the catalog's
//! enumeration, and an id no other project uses.

use super::category::{default_categories, Category};
use super::project::Project;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Catalog configuration errors, reported at load time.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("project #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate project id '{id}'")]
    DuplicateId { id: String },

    #[error("project '{id}' has no images; the carousel needs at least one")]
    NoImages { id: String },

    #[error("project '{id}' has no categories")]
    NoCategories { id: String },

    #[error("project '{id}' uses category '{category}', which is not in the catalog's category list")]
    UnknownCategory { id: String, category: Category },
}

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    pub projects: Vec<Project>,
}

/// Ordered, validated collection of projects.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    projects: Vec<Project>,
}

impl Catalog {
    /// Validate `projects` against `categories` and build the catalog.
    pub fn new(categories: Vec<Category>, projects: Vec<Project>) -> Result<Self, CatalogError> {
        let allowed: HashSet<&Category> = categories.iter().collect();
        let mut seen_ids = HashSet::new();

        for (index, project) in projects.iter().enumerate() {
            if project.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen_ids.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId { id: project.id.clone() });
            }
            if project.images.is_empty() {
                return Err(CatalogError::NoImages { id: project.id.clone() });
            }
            if project.categories.is_empty() {
                return Err(CatalogError::NoCategories { id: project.id.clone() });
            }
            if let Some(category) = project.categories.iter().find(|c| !allowed.contains(c)) {
                return Err(CatalogError::UnknownCategory {
                    id: project.id.clone(),
                    category: category.clone(),
                });
            }
        }

        Ok(Self { categories, projects })
    }

    /// Build from a parsed file, falling back to the default enumeration.
    pub fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let categories = file.categories.unwrap_or_else(default_categories);
        Self::new(categories, file.projects)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The closed category enumeration this catalog was validated against.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            projects: Vec::new(),
        }
    }
}
