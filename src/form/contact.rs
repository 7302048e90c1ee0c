//! Contact form state.
//!
//! Four required text fields. Submitting with every field filled shows a
//! confirmation toast and clears the form; submitting with a blank field is
//! blocked the way the browser blocks a `required` input. Nothing is sent
//! anywhere.
//!
//! # Example
//!
//! ```
//! use artvince_site::form::{ContactForm, Field, SubmitOutcome};
//! use artvince_site::toast::ToastQueue;
//!
//! let toasts = ToastQueue::default();
//! let form = ContactForm::new(toasts.clone());
//! form.set_field(Field::Name, "Ada");
//! form.set_field(Field::Email, "ada@example.com");
//! form.set_field(Field::Subject, "Hello");
//! form.set_field(Field::Message, "Do you teach Blender?");
//!
//! assert_eq!(form.submit(), SubmitOutcome::Sent);
//! assert_eq!(form.value(Field::Name), "");
//! assert_eq!(toasts.visible()[0].title, "Message Sent!");
//! ```

use spark_signals::{signal, Signal};

use crate::toast::ToastQueue;

pub const SENT_TITLE: &str = "Message Sent!";
pub const SENT_DESCRIPTION: &str = "We'll get back to you as soon as possible.";

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name and id.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "How can we help?",
            Self::Message => "Tell us more about your inquiry...",
        }
    }

    /// HTML input type; the message is a textarea.
    pub const fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::Name | Self::Subject => Some("text"),
            Self::Email => Some("email"),
            Self::Message => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    const fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Confirmation shown and fields cleared.
    Sent,
    /// Blank required fields, in form order. Nothing changed.
    Blocked { missing: Vec<Field> },
}

/// Contact form state.
#[derive(Clone)]
pub struct ContactForm {
    values: [Signal<String>; 4],
    toasts: ToastQueue,
}

impl ContactForm {
    pub fn new(toasts: ToastQueue) -> Self {
        Self {
            values: std::array::from_fn(|_| signal(String::new())),
            toasts,
        }
    }

    pub fn value(&self, field: Field) -> String {
        self.values[field.index()].get()
    }

    pub fn signal(&self, field: Field) -> Signal<String> {
        self.values[field.index()].clone()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.values[field.index()].set(value.into());
    }

    /// Required fields that are still empty.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| self.value(*f).is_empty())
            .collect()
    }

    pub fn submit(&self) -> SubmitOutcome {
        let missing = self.missing();
        if !missing.is_empty() {
            log::debug!("contact form blocked, missing {missing:?}");
            return SubmitOutcome::Blocked { missing };
        }

        log::info!("contact form submitted");
        self.toasts.show(SENT_TITLE, SENT_DESCRIPTION);
        self.clear();
        SubmitOutcome::Sent
    }

    pub fn clear(&self) {
        for value in &self.values {
            value.set(String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (ContactForm, ToastQueue) {
        let toasts = ToastQueue::default();
        (ContactForm::new(toasts.clone()), toasts)
    }

    fn fill(form: &ContactForm) {
        form.set_field(Field::Name, "Jane");
        form.set_field(Field::Email, "not-even-an-email");
        form.set_field(Field::Subject, "Partnership");
        form.set_field(Field::Message, "Hi");
    }

    #[test]
    fn test_submit_clears_and_toasts() {
        let (form, toasts) = setup();
        fill(&form);
        assert_eq!(form.submit(), SubmitOutcome::Sent);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
        let visible = toasts.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, SENT_TITLE);
        assert_eq!(visible[0].description, SENT_DESCRIPTION);
    }

    #[test]
    fn test_blank_field_blocks_submit() {
        let (form, toasts) = setup();
        fill(&form);
        form.set_field(Field::Subject, "");
        assert_eq!(
            form.submit(),
            SubmitOutcome::Blocked { missing: vec![Field::Subject] }
        );
        assert_eq!(form.value(Field::Name), "Jane");
        assert!(toasts.visible().is_empty());
    }

    #[test]
    fn test_empty_form_lists_every_field() {
        let (form, _) = setup();
        assert_eq!(
            form.submit(),
            SubmitOutcome::Blocked { missing: Field::ALL.to_vec() }
        );
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let (form, _) = setup();
        fill(&form);
        form.set_field(Field::Message, " ");
        assert_eq!(form.submit(), SubmitOutcome::Sent);
    }

    #[test]
    fn test_field_names_roundtrip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("phone"), None);
    }
}
