//! User intents raised by the rendered page.
//!
//! Interactive elements carry a `data-action` hook plus one keyed value
//! (`data-category`, `data-field`, `data-toast-id`, `href`). The platform
//! shell reads those and hands them to [`Action::from_hook`].

use crate::form::Field;
use crate::state::PlatformEvent;
use crate::types::Category;

/// Something the visitor did.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Typed into the catalog search box.
    Search(String),
    /// Clicked a category chip.
    SelectCategory(Category),
    /// Clicked "Clear Filters" in the empty state.
    ClearFilters,
    /// Hamburger button.
    ToggleMenu,
    /// Followed an internal link.
    Navigate(String),
    /// Browser back.
    Back,
    /// Typed into a contact form field.
    SetField(Field, String),
    /// Submitted the contact form.
    SubmitContact,
    /// Closed a toast.
    DismissToast(u64),
}

impl Action {
    /// Decode a `data-action` hook.
    ///
    /// `key` is the element's keyed attribute, `value` the control's
    /// current value. Unknown hooks and malformed keys yield `None`.
    pub fn from_hook(action: &str, key: &str, value: &str) -> Option<Self> {
        let decoded = match action {
            "search" => Self::Search(value.to_string()),
            "select-category" => Self::SelectCategory(Category::from_label(key)?),
            "clear-filters" => Self::ClearFilters,
            "toggle-menu" => Self::ToggleMenu,
            "navigate" => Self::Navigate(key.to_string()),
            "back" => Self::Back,
            "set-field" => Self::SetField(Field::from_name(key)?, value.to_string()),
            "submit-contact" => Self::SubmitContact,
            "dismiss-toast" => Self::DismissToast(key.parse().ok()?),
            _ => {
                log::debug!("ignoring unknown hook {action:?}");
                return None;
            }
        };
        Some(decoded)
    }
}

/// Anything the runtime accepts through `dispatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    Platform(PlatformEvent),
    Action(Action),
}

impl From<PlatformEvent> for SiteEvent {
    fn from(event: PlatformEvent) -> Self {
        Self::Platform(event)
    }
}

impl From<Action> for SiteEvent {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hooks() {
        assert_eq!(
            Action::from_hook("select-category", "3D Animation", ""),
            Some(Action::SelectCategory(Category::Animation3d))
        );
        assert_eq!(
            Action::from_hook("set-field", "email", "a@b.c"),
            Some(Action::SetField(Field::Email, "a@b.c".to_string()))
        );
        assert_eq!(Action::from_hook("dismiss-toast", "7", ""), Some(Action::DismissToast(7)));
        assert_eq!(Action::from_hook("search", "", "unity"), Some(Action::Search("unity".to_string())));
    }

    #[test]
    fn test_malformed_hooks() {
        assert_eq!(Action::from_hook("select-category", "Sculpting", ""), None);
        assert_eq!(Action::from_hook("set-field", "phone", "123"), None);
        assert_eq!(Action::from_hook("dismiss-toast", "seven", ""), None);
        assert_eq!(Action::from_hook("explode", "", ""), None);
    }
}
