//! Behavioral properties of the site model, exercised through the public API.

use std::collections::HashSet;

use artvince_site::catalog;
use artvince_site::filter::{filter_courses, CourseFilter};
use artvince_site::motion::{Mapping, Spring, SpringConfig};
use artvince_site::state::{RevealOptions, Viewport, ViewportObserver};
use artvince_site::types::{Category, Rect};
use artvince_site::{mount, Action, PlatformEvent, Route, SiteConfig};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn filter_returns_subset_without_duplicates() {
    setup();
    let all = catalog::courses();
    let known: HashSet<u32> = all.iter().map(|c| c.id).collect();
    for query in ["", "a", "UNITY", "design", "Sarah", "zzz", "3d"] {
        for category in Category::ALL {
            let hits = filter_courses(all, query, category);
            let ids: Vec<u32> = hits.iter().map(|c| c.id).collect();
            let unique: HashSet<u32> = ids.iter().copied().collect();
            assert_eq!(unique.len(), ids.len(), "duplicates for {query:?} / {category:?}");
            assert!(unique.is_subset(&known));
        }
    }
}

#[test]
fn empty_filter_returns_full_list_in_order() {
    let all = catalog::courses();
    let hits: Vec<_> = filter_courses(all, "", Category::All).into_iter().cloned().collect();
    assert_eq!(hits, all.to_vec());
}

#[test]
fn unity_matches_only_the_bootcamp() {
    let hits = filter_courses(catalog::courses(), "unity", Category::All);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 6);
    assert_eq!(hits[0].title, "Unity Game Development Bootcamp");
}

#[test]
fn category_filter_matches_exactly_that_category() {
    let all = catalog::courses();
    let hits = filter_courses(all, "", Category::CharacterDesign);
    let expected: Vec<u32> = all
        .iter()
        .filter(|c| c.category == Category::CharacterDesign)
        .map(|c| c.id)
        .collect();
    assert_eq!(hits.iter().map(|c| c.id).collect::<Vec<_>>(), expected);
}

#[test]
fn reset_after_zero_results_restores_everything() {
    let filter = CourseFilter::new(catalog::courses());
    filter.set_query("no course is called this");
    filter.select_category(Category::EnvironmentDesign);
    assert_eq!(filter.result_count(), 0);

    filter.reset();
    assert_eq!(filter.results(), catalog::courses().to_vec());
}

#[test]
fn spring_converges_and_stays_at_rest() {
    for config in [SpringConfig::default(), SpringConfig::critical(100.0)] {
        let mut spring = Spring::new(config, 0.0);
        for _ in 0..600 {
            spring.step(0.37, 1.0 / 60.0);
        }
        assert!((spring.position() - 0.37).abs() < 1e-6);
        assert!(spring.is_at_rest());

        let settled = spring.position();
        spring.step(0.37, 1.0 / 60.0);
        assert_eq!(spring.position(), settled);
    }
}

#[test]
fn reveal_stays_triggered_after_leaving_view() {
    let observer = ViewportObserver::new(Viewport::new(1280.0, 800.0));
    let (latch, _unobserve) = observer.observe("card", RevealOptions::CARD);

    observer.report_bounds("card", Rect::new(0.0, 1000.0, 300.0, 400.0));
    assert!(!latch.is_triggered());

    observer.scroll_by(500.0);
    assert!(latch.is_triggered());

    observer.scroll_by(2000.0);
    assert!(latch.is_triggered());
}

#[test]
fn mapping_clamps_outside_input_range() {
    let mapping = Mapping::new(vec![0.0, 0.5], vec![1.0, 0.0]).unwrap();
    assert_eq!(mapping.map(-3.0), 1.0);
    assert_eq!(mapping.map(0.25), 0.5);
    assert_eq!(mapping.map(9.0), 0.0);
}

#[test]
fn category_route_preselects_category() {
    setup();
    let site = mount(SiteConfig::default(), "/courses/3d-animation");
    assert_eq!(site.route(), Route::CourseCategory(Category::Animation3d));
    let catalog = site.catalog().unwrap();
    assert_eq!(catalog.category, Category::Animation3d);
    assert!(catalog.results.iter().all(|c| c.category == Category::Animation3d));
}

#[test]
fn unmount_leaves_nothing_registered() {
    setup();
    let site = mount(SiteConfig::default(), "/");
    let before = site.listener_count();
    site.dispatch(Action::Navigate("/contact".to_string()));
    site.dispatch(Action::Navigate("/".to_string()));
    assert_eq!(site.listener_count(), before);

    site.dispatch(PlatformEvent::Scroll { y: 300.0 });
    site.unmount();
}

#[test]
fn hooks_decode_into_actions() {
    let site = mount(SiteConfig::default(), "/courses");
    let html = site.render();
    assert!(html.contains(r#"data-action="select-category""#));

    let action = Action::from_hook("select-category", "Weapon Design", "").unwrap();
    site.dispatch(action);
    let catalog = site.catalog().unwrap();
    assert_eq!(catalog.results.len(), 1);
    assert!(site.render().contains("Showing 1 courses"));
}
