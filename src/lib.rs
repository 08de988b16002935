// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Vizfolio - engineering visualization portfolio.
//!
//! The gallery core ([`gallery`]) is independent of the UI: a validated
//! [`models::catalog::Catalog`], pure category filters, and a controller
//! that owns the filter set and the modal carousel.

pub mod app;
pub mod config;
pub mod contact;
pub mod gallery;
pub mod io;
pub mod models;
pub mod ui;
