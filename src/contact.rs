//! Contact form validation and WhatsApp deep links.
//!
//! Sending the message is left to WhatsApp itself (or an email relay); this
//! module only checks the form and composes the link.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const DEFAULT_SUBJECT: &str = "General Inquiry";

/// Form field names, as reported in validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Per-field validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Contact form is invalid: {}", summary(.0))]
pub struct ContactError(pub BTreeMap<Field, &'static str>);

fn summary(errors: &BTreeMap<Field, &'static str>) -> String {
    errors.values().copied().collect::<Vec<_>>().join("; ")
}

impl ContactError {
    /// Message for one field, if it failed
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }
}

/// A visitor's inquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: DEFAULT_SUBJECT.to_string(),
            message: String::new(),
        }
    }
}

impl ContactForm {
    /// Check required fields and email shape
    pub fn validate(&self) -> Result<(), ContactError> {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.insert(Field::Email, "Enter a valid email address");
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, "Message is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ContactError(errors))
        }
    }

    /// Plain-text message body
    pub fn message_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nSubject: {}\nMessage: {}",
            self.name, self.email, self.subject, self.message
        )
    }

    /// Validated `wa.me` link carrying the message body
    pub fn whatsapp_url(&self, number: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(format!(
            "https://wa.me/{}?text={}",
            number,
            urlencoding::encode(&self.message_body())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            message: "Bulk order of 500 Scholar pencils".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let err = ContactForm::default().validate().unwrap_err();
        assert_eq!(err.get(Field::Name), Some("Name is required"));
        assert_eq!(err.get(Field::Email), Some("Email is required"));
        assert_eq!(err.get(Field::Message), Some("Message is required"));
    }

    #[test]
    fn test_email_shape() {
        let form = ContactForm {
            email: "asha@example".to_string(),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.get(Field::Email), Some("Enter a valid email address"));
        assert_eq!(err.get(Field::Name), None);
    }

    #[test]
    fn test_whatsapp_url_encodes_body() {
        let url = filled().whatsapp_url("919022854954").unwrap();
        assert!(url.starts_with("https://wa.me/919022854954?text=Name%3A%20Asha%0AEmail%3A"));
        assert!(url.contains("Subject%3A%20General%20Inquiry"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_whatsapp_url_requires_valid_form() {
        assert!(ContactForm::default().whatsapp_url("1").is_err());
    }
}
