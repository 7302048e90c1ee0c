//! Filter Engine - Search and category filtering over the course catalog.
//!
//! Filtering is a pure predicate over the in-memory list:
//! - category matches when the selection is "All Courses" or equal
//! - query matches when title or instructor contains it, case-insensitively
//! - an empty query matches everything
//!
//! Results keep catalog order. There is no ranking and no pagination.
//!
//! [`CourseFilter`] holds the transient UI state (query + selected category)
//! as signals and exposes the filtered list as a derived, so views re-read it
//! after every keystroke or category click.
//!
//! # Example
//!
//! ```
//! use artvince_site::catalog;
//! use artvince_site::filter::filter_courses;
//! use artvince_site::types::Category;
//!
//! let hits = filter_courses(catalog::courses(), "unity", Category::All);
//! assert_eq!(hits.iter().map(|c| c.id).collect::<Vec<_>>(), vec![6]);
//! ```

use spark_signals::{derived, signal, Derived, Signal};

use crate::types::{Category, Course};

// =============================================================================
// Pure filter
// =============================================================================

/// Whether a single course passes the query and category predicates.
///
/// `query_lower` must already be lowercased.
fn matches(course: &Course, query_lower: &str, category: Category) -> bool {
    let matches_category = category.is_all() || course.category == category;
    if !matches_category {
        return false;
    }
    if query_lower.is_empty() {
        return true;
    }
    course.title.to_lowercase().contains(query_lower)
        || course.instructor.to_lowercase().contains(query_lower)
}

/// Filter courses by free-text query and category.
///
/// Returns the ordered subsequence of `courses` that match. Never reorders,
/// never duplicates.
pub fn filter_courses<'a>(courses: &'a [Course], query: &str, category: Category) -> Vec<&'a Course> {
    let query_lower = query.to_lowercase();
    courses
        .iter()
        .filter(|course| matches(course, &query_lower, category))
        .collect()
}

// =============================================================================
// Reactive filter state
// =============================================================================

/// Search and category state for the course catalog page.
///
/// Owned by the courses page; dropped when the page unmounts.
pub struct CourseFilter {
    courses: &'static [Course],
    query: Signal<String>,
    category: Signal<Category>,
    results: Derived<Vec<Course>>,
}

impl CourseFilter {
    /// Create filter state over `courses` with the default selection
    /// (empty query, All Courses).
    pub fn new(courses: &'static [Course]) -> Self {
        Self::with_category(courses, Category::All)
    }

    /// Create filter state with a preselected category (category routes).
    pub fn with_category(courses: &'static [Course], category: Category) -> Self {
        let query = signal(String::new());
        let category = signal(category);

        let q = query.clone();
        let c = category.clone();
        let results = derived(move || {
            filter_courses(courses, &q.get(), c.get())
                .into_iter()
                .cloned()
                .collect()
        });

        Self {
            courses,
            query,
            category,
            results,
        }
    }

    /// The unfiltered list this filter runs over.
    pub fn all(&self) -> &'static [Course] {
        self.courses
    }

    /// Current search query.
    pub fn query(&self) -> String {
        self.query.get()
    }

    /// Currently selected category.
    pub fn category(&self) -> Category {
        self.category.get()
    }

    /// Query signal, for views that bind the search input.
    pub fn query_signal(&self) -> Signal<String> {
        self.query.clone()
    }

    /// Update the search query (every keystroke).
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        log::trace!("catalog query = {query:?}");
        self.query.set(query);
    }

    /// Select a category chip.
    pub fn select_category(&self, category: Category) {
        log::debug!("catalog category = {}", category.label());
        self.category.set(category);
    }

    /// Reset both the query and the category to their defaults.
    pub fn reset(&self) {
        log::debug!("catalog filters cleared");
        self.query.set(String::new());
        self.category.set(Category::All);
    }

    /// Filtered courses in catalog order.
    pub fn results(&self) -> Vec<Course> {
        self.results.get()
    }

    /// Number of courses currently shown.
    pub fn result_count(&self) -> usize {
        self.results.get().len()
    }

    /// True when nothing matches; the page shows the empty state.
    pub fn is_empty(&self) -> bool {
        self.results.get().is_empty()
    }

    /// True when the selection differs from the defaults.
    pub fn is_active(&self) -> bool {
        !self.query.get().is_empty() || !self.category.get().is_all()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn ids(list: &[&Course]) -> Vec<u32> {
        list.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_empty_query_all_categories_returns_everything() {
        let all = catalog::courses();
        let hits = filter_courses(all, "", Category::All);
        assert_eq!(ids(&hits), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let all = catalog::courses();
        assert_eq!(ids(&filter_courses(all, "UNITY", Category::All)), vec![6]);
        assert_eq!(ids(&filter_courses(all, "unity", Category::All)), vec![6]);
    }

    #[test]
    fn test_query_matches_instructor() {
        let all = catalog::courses();
        assert_eq!(ids(&filter_courses(all, "maya", Category::All)), vec![2]);
        assert_eq!(ids(&filter_courses(all, "wang", Category::All)), vec![6]);
    }

    #[test]
    fn test_category_only() {
        let all = catalog::courses();
        assert_eq!(ids(&filter_courses(all, "", Category::CharacterDesign)), vec![2]);
        assert_eq!(ids(&filter_courses(all, "", Category::GameDevelopment)), vec![1, 6]);
    }

    #[test]
    fn test_query_and_category_combine() {
        let all = catalog::courses();
        assert_eq!(ids(&filter_courses(all, "game", Category::GameDevelopment)), vec![1, 6]);
        assert_eq!(ids(&filter_courses(all, "game", Category::AppDevelopment)), vec![8]);
        assert!(filter_courses(all, "unity", Category::WeaponDesign).is_empty());
    }

    #[test]
    fn test_results_are_a_subset_without_duplicates() {
        let all = catalog::courses();
        for query in ["", "a", "game", "design", "zzz", " "] {
            for category in Category::ALL {
                let hits = filter_courses(all, query, category);
                let mut seen = std::collections::HashSet::new();
                for hit in &hits {
                    assert!(seen.insert(hit.id));
                    assert!(all.iter().any(|c| std::ptr::eq(c, *hit)));
                }
                let positions: Vec<usize> = hits
                    .iter()
                    .map(|h| all.iter().position(|c| c.id == h.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_course_filter_reacts_to_query() {
        let filter = CourseFilter::new(catalog::courses());
        assert_eq!(filter.result_count(), 8);

        filter.set_query("unity");
        assert_eq!(filter.results().iter().map(|c| c.id).collect::<Vec<_>>(), vec![6]);

        filter.select_category(Category::CharacterDesign);
        assert!(filter.is_empty());
        assert!(filter.is_active());
    }

    #[test]
    fn test_reset_restores_full_list() {
        let filter = CourseFilter::new(catalog::courses());
        filter.set_query("nothing matches this");
        filter.select_category(Category::WeaponDesign);
        assert!(filter.is_empty());

        filter.reset();
        assert_eq!(filter.query(), "");
        assert_eq!(filter.category(), Category::All);
        assert_eq!(filter.results(), catalog::courses().to_vec());
        assert!(!filter.is_active());
    }

    #[test]
    fn test_preselected_category() {
        let filter = CourseFilter::with_category(catalog::courses(), Category::Animation3d);
        assert_eq!(filter.results().iter().map(|c| c.id).collect::<Vec<_>>(), vec![4]);
    }
}
