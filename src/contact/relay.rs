// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Delivery of contact messages to the third-party form relay.

use super::form::ContactMessage;
use reqwest::header::ACCEPT;
use thiserror::Error;

/// Relay used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/mqadgedg";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("relay answered with HTTP {0}")]
    Status(u16),

    #[error("relay worker stopped before answering")]
    Interrupted,
}

/// Something that can deliver a contact message. One attempt, no retries.
pub trait FormRelay: Send + Sync {
    fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// Posts messages as JSON to an HTTP endpoint.
pub struct HttpRelay {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RelayError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("vizfolio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl FormRelay for HttpRelay {
    fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(message)
            .send()?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Status(status.as_u16()))
        }
    }
}
