// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog file parsing.
//!
//! Catalogs are stored as YAML or JSON. Parsing is followed by validation,
//! so a successfully loaded catalog always satisfies the gallery's
//! invariants.

use crate::models::catalog::{Catalog, CatalogFile};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// The catalog shipped inside the binary.
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.yaml");

/// Parse and validate a YAML catalog.
pub fn parse_yaml(yaml: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_yaml::from_str(yaml)?;
    Ok(Catalog::from_file(file)?)
}

/// Parse and validate a JSON catalog.
pub fn parse_json(json: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(json)?;
    Ok(Catalog::from_file(file)?)
}

/// Load a catalog file, picking the format from its extension.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let extension = path.extension().and_then(|s| s.to_str());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;

    let catalog = match extension {
        Some("yaml") | Some("yml") => parse_yaml(&text),
        Some("json") => parse_json(&text),
        _ => bail!("Unsupported catalog extension: {:?}", extension),
    }
    .with_context(|| format!("Invalid catalog {}", path.display()))?;

    log::info!("Loaded {} projects from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// The built-in catalog.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_yaml(BUILTIN_CATALOG).context("Built-in catalog is invalid")
}
