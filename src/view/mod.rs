//! View layer: HTML nodes, icons and the render context.
//!
//! Pages and components are plain functions from a [`ViewContext`] to a
//! [`Node`] tree.

pub mod context;
pub mod icons;
pub mod node;

pub use context::{CatalogView, ContactView, MotionView, NavbarView, RevealPolicy, ViewContext};
pub use icons::{filled_icon, icon};
pub use node::{el, escape_text, fragment, raw, text, Element, Node};
