// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Category filtering over the project catalog.
//!
//! Both functions are pure: they never reorder the catalog and never
//! invent labels that no project carries.

use crate::models::{category::Category, project::Project};
use std::collections::BTreeSet;

/// Sorted, duplicate-free union of every project's categories.
pub fn unique_categories(projects: &[Project]) -> Vec<Category> {
    projects
        .iter()
        .flat_map(|p| p.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Projects matching at least one active filter, in catalog order.
///
/// Matching ignores the order of `active`; an empty filter matches everything.
pub fn filter_projects<'a>(projects: &'a [Project], active: &[Category]) -> Vec<&'a Project> {
    if active.is_empty() {
        return projects.iter().collect();
    }

    projects
        .iter()
        .filter(|p| p.has_any_category(active.iter()))
        .collect()
}
