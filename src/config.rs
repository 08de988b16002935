// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command-line and environment configuration.

use crate::contact::relay::DEFAULT_ENDPOINT;
use crate::io::serialization;
use crate::models::catalog::Catalog;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Catalog file (.yaml, .yml or .json). Uses the built-in catalog if omitted.
    #[arg(long, value_name = "PATH", env = "VIZFOLIO_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Directory that media references like /images/a.jpg resolve against
    #[arg(long, value_name = "DIR", env = "VIZFOLIO_ASSETS", default_value = ".")]
    pub assets: PathBuf,

    /// Form relay endpoint for the contact form
    #[arg(long, value_name = "URL", env = "VIZFOLIO_RELAY_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub relay_endpoint: String,
}

impl Config {
    /// Load the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => serialization::load_catalog(path),
            None => serialization::builtin_catalog(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["vizfolio"]).unwrap();
        assert_eq!(config.assets, PathBuf::from("."));
        assert!(config.relay_endpoint.starts_with("https://"));
        assert!(config.load_catalog().unwrap().len() >= 1);
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "vizfolio",
            "--catalog",
            "site/catalog.json",
            "--assets",
            "site/public",
            "--relay-endpoint",
            "http://localhost:9000/relay",
        ])
        .unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("site/catalog.json")));
        assert_eq!(config.assets, PathBuf::from("site/public"));
        assert_eq!(config.relay_endpoint, "http://localhost:9000/relay");
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let config = Config::try_parse_from(["vizfolio", "--catalog", "/no/such/catalog.yaml"]).unwrap();
        assert!(config.load_catalog().is_err());
    }
}
