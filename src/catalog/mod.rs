//! Static catalog store.
//!
//! Course, mentor and marketing records are literal data built once on first
//! access and handed out as `&'static` slices. Nothing here is mutated at
//! runtime; views and the filter engine only ever read.
//!
//! # Example
//!
//! ```
//! use artvince_site::catalog;
//!
//! assert_eq!(catalog::courses().len(), 8);
//! assert!(catalog::validate(catalog::courses()).is_ok());
//! ```

mod content;
mod courses;
mod mentors;

use std::collections::HashSet;

use serde::Serialize;

pub use content::*;
pub use courses::*;
pub use mentors::*;

use crate::error::CatalogError;
use crate::types::{Course, Mentor, Testimonial};

// =============================================================================
// Invariants
// =============================================================================

/// Check the course list invariants: unique ids, concrete categories and
/// ratings inside [0, 5].
pub fn validate(courses: &[Course]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(courses.len());
    for course in courses {
        if !seen.insert(course.id) {
            return Err(CatalogError::DuplicateCourseId(course.id));
        }
        if course.category.is_all() {
            return Err(CatalogError::InvalidCategory {
                id: course.id,
                category: course.category,
            });
        }
        if !(0.0..=5.0).contains(&course.rating) {
            return Err(CatalogError::RatingOutOfRange {
                id: course.id,
                rating: course.rating,
            });
        }
    }
    Ok(())
}

/// Check mentor ids are unique.
pub fn validate_mentors(mentors: &[Mentor]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(mentors.len());
    for mentor in mentors {
        if !seen.insert(mentor.id) {
            return Err(CatalogError::DuplicateMentorId(mentor.id));
        }
    }
    Ok(())
}

// =============================================================================
// Snapshot
// =============================================================================

/// Everything the catalog holds, in one serializable value (`catalog.json`).
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot {
    pub courses: &'static [Course],
    pub mentors: &'static [Mentor],
    pub testimonials: &'static [Testimonial],
}

/// Snapshot of the catalog for export.
pub fn snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        courses: courses(),
        mentors: mentors(),
        testimonials: testimonials(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_catalog_is_valid() {
        assert!(validate(courses()).is_ok());
        assert!(validate_mentors(mentors()).is_ok());
    }

    #[test]
    fn test_course_order_is_stable() {
        let ids: Vec<u32> = courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut list = courses().to_vec();
        list.push(list[0].clone());
        assert_eq!(validate(&list), Err(CatalogError::DuplicateCourseId(1)));
    }

    #[test]
    fn test_sentinel_category_rejected() {
        let mut list = courses().to_vec();
        list[2].category = Category::All;
        assert_eq!(
            validate(&list),
            Err(CatalogError::InvalidCategory { id: 3, category: Category::All })
        );
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut list = courses().to_vec();
        list[0].rating = 5.5;
        assert!(matches!(validate(&list), Err(CatalogError::RatingOutOfRange { id: 1, .. })));
    }

    #[test]
    fn test_featured_selection() {
        let featured = featured_courses();
        assert_eq!(featured.len(), 4);
        let flagged: Vec<u32> = featured.iter().filter(|c| c.featured).map(|c| c.id).collect();
        assert_eq!(flagged, vec![1, 3]);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(find_course(6).map(|c| c.instructor.as_str()), Some("Lisa Wang"));
        assert!(find_course(99).is_none());
        assert_eq!(find_mentor(4).map(|m| m.name.as_str()), Some("Sarah Kim"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(json["courses"].as_array().map(Vec::len), Some(8));
        assert_eq!(json["mentors"].as_array().map(Vec::len), Some(6));
        assert_eq!(json["courses"][3]["category"], "3D Animation");
    }
}
