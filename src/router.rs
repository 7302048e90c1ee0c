//! Client-side routing.
//!
//! Paths map to a closed set of [`Route`]s. Navigation swaps the current
//! route signal and keeps a back stack; there is never a full reload.
//! Anything unrecognized is [`Route::NotFound`].
//!
//! # Example
//!
//! ```
//! use artvince_site::router::{Route, Router};
//! use artvince_site::types::Category;
//!
//! assert_eq!(Route::parse("/courses/3d-animation"), Route::CourseCategory(Category::Animation3d));
//!
//! let router = Router::new("/");
//! router.navigate("/mentors");
//! assert_eq!(router.current(), Route::Mentors);
//! assert!(router.back());
//! assert_eq!(router.current(), Route::Home);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::types::Category;

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Courses,
    /// Course catalog with a category preselected.
    CourseCategory(Category),
    About,
    Mentors,
    Contact,
    /// Unknown path, kept as requested.
    NotFound(String),
}

impl Route {
    /// Parse a location path. Query strings, fragments and a trailing
    /// slash are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Self::Home,
            "/courses" => Self::Courses,
            "/about" => Self::About,
            "/mentors" => Self::Mentors,
            "/contact" => Self::Contact,
            other => other
                .strip_prefix("/courses/")
                .and_then(Category::from_slug)
                .map(Self::CourseCategory)
                .unwrap_or_else(|| Self::NotFound(path.to_string())),
        }
    }

    /// Canonical path.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Courses => "/courses".to_string(),
            Self::CourseCategory(category) => match category.slug() {
                Some(slug) => format!("/courses/{slug}"),
                None => "/courses".to_string(),
            },
            Self::About => "/about".to_string(),
            Self::Mentors => "/mentors".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Document title suffix.
    pub fn title(&self) -> String {
        match self {
            Self::Home => "Master the Art of Game Creation".to_string(),
            Self::Courses => "Courses".to_string(),
            Self::CourseCategory(category) => format!("{} Courses", category.label()),
            Self::About => "About".to_string(),
            Self::Mentors => "Mentors".to_string(),
            Self::Contact => "Contact".to_string(),
            Self::NotFound(_) => "Page Not Found".to_string(),
        }
    }

    /// Navbar entry this route highlights.
    pub fn nav_href(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::Courses | Self::CourseCategory(_) => Some("/courses"),
            Self::About => Some("/about"),
            Self::Mentors => Some("/mentors"),
            Self::Contact => Some("/contact"),
            Self::NotFound(_) => None,
        }
    }

    /// Category the catalog starts with on this route.
    pub fn initial_category(&self) -> Option<Category> {
        match self {
            Self::Courses => Some(Category::All),
            Self::CourseCategory(category) => Some(*category),
            _ => None,
        }
    }

    /// Every route that has a page of its own, in export order.
    pub fn static_routes() -> Vec<Route> {
        let mut routes = vec![Self::Home, Self::Courses];
        routes.extend(
            Category::ALL
                .iter()
                .filter(|c| !c.is_all())
                .map(|c| Self::CourseCategory(*c)),
        );
        routes.extend([Self::Mentors, Self::About, Self::Contact]);
        routes
    }
}

/// Current route plus history.
#[derive(Clone)]
pub struct Router {
    current: Signal<Route>,
    history: Rc<RefCell<Vec<Route>>>,
}

impl Router {
    pub fn new(initial_path: &str) -> Self {
        Self {
            current: signal(Route::parse(initial_path)),
            history: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn signal(&self) -> Signal<Route> {
        self.current.clone()
    }

    /// Go to `path`. Returns true when the route changed.
    pub fn navigate(&self, path: &str) -> bool {
        let next = Route::parse(path);
        let current = self.current.get();
        if next == current {
            return false;
        }
        if let Route::NotFound(path) = &next {
            log::warn!("no page for {path}");
        }
        log::info!("navigate {} -> {}", current.path(), next.path());
        self.history.borrow_mut().push(current);
        self.current.set(next);
        true
    }

    /// Return to the previous route. False when there is none.
    pub fn back(&self) -> bool {
        let Some(previous) = self.history.borrow_mut().pop() else {
            return false;
        };
        log::info!("back -> {}", previous.path());
        self.current.set(previous);
        true
    }

    /// Route `back` would return to.
    pub fn previous(&self) -> Option<Route> {
        self.history.borrow().last().cloned()
    }

    pub fn history_len(&self) -> usize {
        self.history.borrow().len()
    }
}
