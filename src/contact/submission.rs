// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact form submission state.
//!
//! At most one message is in flight. The relay call runs on a background
//! thread and its result is picked up by [`ContactController::poll`] on the
//! UI thread, the same way image loads are handed back.

use super::form::{ContactForm, FieldErrors};
use super::relay::{FormRelay, RelayError};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

/// Shown for every failed delivery, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or contact me directly.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// What a call to [`ContactController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message is on its way.
    Dispatched,
    /// The fields were valid but the honeypot was filled; nothing was sent.
    Suppressed,
    /// One or more fields failed validation.
    Invalid,
    /// A previous message is still in flight.
    Busy,
}

pub struct ContactController {
    pub form: ContactForm,
    errors: FieldErrors,
    status: FormStatus,
    relay: Arc<dyn FormRelay>,
    pending: Option<Receiver<Result<(), RelayError>>>,
}

impl ContactController {
    pub fn new(relay: Arc<dyn FormRelay>) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::default(),
            status: FormStatus::Idle,
            relay,
            pending: None,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Validate the form and send it. Field errors come first; a filled
    /// honeypot is only checked once the fields are valid.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }

        let message = match self.form.validate() {
            Ok(message) => message,
            Err(errors) => {
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };
        self.errors = FieldErrors::default();

        if self.form.is_bot() {
            log::debug!("Honeypot filled, dropping contact submission");
            return SubmitOutcome::Suppressed;
        }
        self.status = FormStatus::Submitting;

        let (sender, receiver) = channel();
        self.pending = Some(receiver);
        let relay = Arc::clone(&self.relay);

        std::thread::spawn(move || {
            let result = relay.send(&message);
            let _ = sender.send(result);
        });

        SubmitOutcome::Dispatched
    }

    /// Apply the result of the in-flight submission, if it has arrived.
    /// Returns `true` when the status changed.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.pending else {
            return false;
        };

        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(RelayError::Interrupted),
        };
        self.pending = None;

        match result {
            Ok(()) => {
                log::info!("Contact message sent");
                self.status = FormStatus::Success;
                self.form.reset();
            }
            Err(e) => {
                log::error!("Failed to send contact message: {}", e);
                self.status = FormStatus::Error(FAILURE_MESSAGE.to_string());
            }
        }
        true
    }
}
