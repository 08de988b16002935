// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog files and media assets on disk.

pub mod media;
pub mod serialization;
