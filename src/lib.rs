//! # artvince-site
//!
//! Reactive marketing site for Artvince Academy.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The site is a reactive model plus an HTML view layer. Platform events
//! (pointer, scroll, resize, element bounds, animation frames) flow into
//! signals; springs smooth them on the frame clock; pure presentation
//! functions turn the current values into a render snapshot:
//! ```text
//! PlatformEvent → InputSignals → springs / latches / filter → ViewContext → HTML
//! ```
//!
//! The same components render the static bundle with every reveal settled.
//!
//! ## Modules
//!
//! - [`types`] - Course, Mentor, Category and the other content records
//! - [`catalog`] - The static content store
//! - [`filter`] - Search and category filtering
//! - [`state`] - Platform events, reveal latches, frame clock
//! - [`motion`] - Springs and pointer/scroll transforms
//! - [`form`] - Contact form
//! - [`router`] - Client-side routes and history
//! - [`view`], [`components`], [`pages`] - HTML rendering
//! - [`theme`] - Palette and stylesheet
//! - [`app`] - Mount/unmount runtime
//! - [`export`] - Static bundle writer

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod form;
pub mod motion;
pub mod pages;
pub mod router;
pub mod state;
pub mod theme;
pub mod toast;
pub mod types;
pub mod view;

pub use app::{mount, Action, Dirty, MountHandle, SiteEvent};
pub use config::SiteConfig;
pub use error::{CatalogError, MotionError, SiteError};
pub use export::export_site;
pub use router::{Route, Router};
pub use state::PlatformEvent;
