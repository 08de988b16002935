// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the portfolio catalog.

pub mod catalog;
pub mod category;
pub mod project;
