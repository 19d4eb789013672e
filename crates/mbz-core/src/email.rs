use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A mailbox address with optional display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            email: email.into(),
        }
    }

    pub fn named(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Decoded content of one body part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyValue {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub is_encoding_problem: bool,
    #[serde(default)]
    pub is_truncated: bool,
}

/// An inbox message as handed over by the mail backend.
///
/// Only `id` is required when deserializing; every other field defaults to
/// empty so partially fetched messages still score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub id: String,
    #[serde(default)]
    pub thread_id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub from: Vec<EmailAddress>,
    #[serde(default)]
    pub preview: String,
    /// Keyed by part id; iteration order is ascending part id.
    #[serde(default)]
    pub body_values: BTreeMap<String, BodyValue>,
}

impl Email {
    pub fn new(id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            ..Default::default()
        }
    }

    pub fn with_sender(mut self, address: impl Into<String>) -> Self {
        self.from.push(EmailAddress::new(address));
        self
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = preview.into();
        self
    }

    pub fn with_body_value(mut self, part_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.body_values.insert(
            part_id.into(),
            BodyValue {
                value: value.into(),
                ..Default::default()
            },
        );
        self
    }

    /// The first `from` address, if any.
    pub fn primary_sender(&self) -> Option<&EmailAddress> {
        self.from.first()
    }
}
