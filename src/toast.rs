//! Toast notifications.
//!
//! At most [`TOAST_LIMIT`] toasts are visible; a new toast pushes the oldest
//! out. Each toast dismisses itself after the queue's duration, counted in
//! frame-clock time, or earlier through [`ToastQueue::dismiss`].
//!
//! # Example
//!
//! ```
//! use artvince_site::toast::ToastQueue;
//!
//! let toasts = ToastQueue::new(5.0);
//! let id = toasts.show("Message Sent!", "We'll get back to you as soon as possible.");
//! assert_eq!(toasts.visible()[0].id, id);
//!
//! toasts.tick(5.0);
//! assert!(toasts.visible().is_empty());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use spark_signals::{signal, Signal};

use crate::state::{Cleanup, FrameClock};

/// Maximum toasts on screen at once.
pub const TOAST_LIMIT: usize = 1;

/// Default auto-dismiss delay in seconds.
pub const DEFAULT_TOAST_SECONDS: f64 = 5.0;

/// A notification shown in the corner of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

#[derive(Default)]
struct Pending {
    next_id: u64,
    /// Seconds left for each visible toast, parallel to the signal's list.
    remaining: Vec<(u64, f64)>,
}

/// Visible toasts plus their timers.
#[derive(Clone)]
pub struct ToastQueue {
    toasts: Signal<Vec<Toast>>,
    pending: Rc<RefCell<Pending>>,
    duration: f64,
}

impl ToastQueue {
    /// Queue whose toasts live for `duration` seconds.
    ///
    /// A non-finite or non-positive duration falls back to
    /// [`DEFAULT_TOAST_SECONDS`].
    pub fn new(duration: f64) -> Self {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            log::warn!("invalid toast duration {duration}, using {DEFAULT_TOAST_SECONDS}");
            DEFAULT_TOAST_SECONDS
        };
        Self {
            toasts: signal(Vec::new()),
            pending: Rc::new(RefCell::new(Pending::default())),
            duration,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Show a toast and return its id.
    pub fn show(&self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        let toast = Toast {
            id: {
                let mut pending = self.pending.borrow_mut();
                pending.next_id += 1;
                pending.next_id
            },
            title: title.into(),
            description: description.into(),
        };
        log::debug!("toast {}: {}", toast.id, toast.title);

        let mut list = self.toasts.get();
        list.insert(0, toast.clone());
        list.truncate(TOAST_LIMIT);

        {
            let mut pending = self.pending.borrow_mut();
            pending.remaining.insert(0, (toast.id, self.duration));
            pending.remaining.truncate(TOAST_LIMIT);
        }
        self.toasts.set(list);
        toast.id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut list = self.toasts.get();
        let before = list.len();
        list.retain(|t| t.id != id);
        if list.len() == before {
            return false;
        }
        self.pending.borrow_mut().remaining.retain(|(tid, _)| *tid != id);
        self.toasts.set(list);
        true
    }

    /// Advance timers by `dt` seconds, dismissing expired toasts.
    pub fn tick(&self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let expired: Vec<u64> = {
            let mut pending = self.pending.borrow_mut();
            for (_, left) in pending.remaining.iter_mut() {
                *left -= dt;
            }
            pending
                .remaining
                .iter()
                .filter(|(_, left)| *left <= 1e-9)
                .map(|(id, _)| *id)
                .collect()
        };
        for id in expired {
            log::trace!("toast {id} expired");
            self.dismiss(id);
        }
    }

    /// Run timers on `clock` until the returned cleanup runs.
    pub fn attach(&self, clock: &FrameClock) -> Cleanup {
        let this = self.clone();
        clock.subscribe(move |dt| this.tick(dt))
    }

    /// Visible toasts, newest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn signal(&self) -> Signal<Vec<Toast>> {
        self.toasts.clone()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_SECONDS)
    }
}
