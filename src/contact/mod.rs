// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact form: validation, bot suppression and relay delivery.

pub mod form;
pub mod relay;
pub mod submission;

pub use relay::{FormRelay, HttpRelay};
pub use submission::{ContactController, FormStatus};
