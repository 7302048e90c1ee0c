//! Forms.

pub mod contact;

pub use contact::{ContactForm, Field, SubmitOutcome, SENT_DESCRIPTION, SENT_TITLE};
