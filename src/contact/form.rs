// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact form fields and validation.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 1000;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// What the user has typed so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden field; humans never fill it in.
    pub honeypot: String,
}

/// Validated payload posted to the relay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

fn length_error(label: &str, value: &str, min: usize, max: usize) -> Option<String> {
    let len = value.chars().count();
    if len < min {
        Some(format!("{label} must be at least {min} characters"))
    } else if len > max {
        Some(format!("{label} must be at most {max} characters"))
    } else {
        None
    }
}

impl ContactForm {
    /// A filled honeypot marks the submission as automated.
    pub fn is_bot(&self) -> bool {
        !self.honeypot.is_empty()
    }

    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let errors = FieldErrors {
            name: length_error("Name", name, NAME_MIN, NAME_MAX),
            email: (!email_pattern().is_match(email))
                .then(|| "Please enter a valid email address".to_string()),
            message: length_error("Message", message, MESSAGE_MIN, MESSAGE_MAX),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  Ada Lovelace ".into(),
            email: "ada@example.com".into(),
            message: "I need renders for a gearbox housing.".into(),
            honeypot: String::new(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let message = filled().validate().unwrap();
        assert_eq!(message.name, "Ada Lovelace");
        assert_eq!(message.email, "ada@example.com");
    }

    #[test]
    fn test_each_field_reports_its_own_error() {
        let form = ContactForm {
            name: "A".into(),
            email: "not-an-email".into(),
            message: "short".into(),
            honeypot: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.name.as_deref(), Some("Name must be at least 2 characters"));
        assert_eq!(errors.email.as_deref(), Some("Please enter a valid email address"));
        assert_eq!(errors.message.as_deref(), Some("Message must be at least 10 characters"));
    }

    #[test]
    fn test_message_too_long() {
        let mut form = filled();
        form.message = "x".repeat(MESSAGE_MAX + 1);
        let errors = form.validate().unwrap_err();
        assert!(errors.name.is_none());
        assert_eq!(errors.message.as_deref(), Some("Message must be at most 1000 characters"));
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let mut form = filled();
        form.name = "x".repeat(NAME_MAX);
        form.message = "x".repeat(MESSAGE_MAX);
        assert!(form.validate().is_ok());

        form.name.push('x');
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.name.as_deref(), Some("Name must be at most 100 characters"));
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.co", "first.last+tag@studio.example.org"] {
            assert!(email_pattern().is_match(ok), "{ok}");
        }
        for bad in ["", "a@b", "@b.com", "a b@c.com", "a@b .com"] {
            assert!(!email_pattern().is_match(bad), "{bad}");
        }
    }

    #[test]
    fn test_honeypot_and_reset() {
        let mut form = filled();
        assert!(!form.is_bot());
        form.honeypot = "http://spam".into();
        assert!(form.is_bot());
        form.honeypot = " ".into();
        assert!(form.is_bot());

        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
