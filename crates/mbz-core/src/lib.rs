//! Mailbox Zero core types: messages, configuration and errors.

pub mod config;
pub mod email;
pub mod error;

pub use config::{MailboxZeroConfig, ScoreWeights, SimilarityConfig};
pub use email::{BodyValue, Email, EmailAddress};
pub use error::{MbzError, Result};
