//! The exported static bundle.

use std::fs;

use artvince_site::export::{export_site, page_file, CATALOG_FILE, STYLESHEET_FILE};
use artvince_site::{catalog, Route, SiteConfig};

#[test]
fn bundle_contains_every_route() {
    let dir = tempfile::tempdir().unwrap();
    export_site(&SiteConfig::default(), dir.path()).unwrap();

    for route in Route::static_routes() {
        let html = fs::read_to_string(dir.path().join(page_file(&route))).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!("<title>{} | Artvince Academy</title>", route.title())));
        assert!(html.contains(r#"href="/styles.css""#));
    }
    assert!(dir.path().join("courses/weapon-design/index.html").is_file());
}

#[test]
fn catalog_json_round_trips_ids() {
    let dir = tempfile::tempdir().unwrap();
    export_site(&SiteConfig::default(), dir.path()).unwrap();

    let text = fs::read_to_string(dir.path().join(CATALOG_FILE)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let ids: Vec<u64> = json["courses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_u64().unwrap())
        .collect();
    let expected: Vec<u64> = catalog::courses().iter().map(|c| u64::from(c.id)).collect();
    assert_eq!(ids, expected);
    assert_eq!(json["mentors"].as_array().unwrap().len(), 6);
}

#[test]
fn base_url_prefixes_links() {
    let dir = tempfile::tempdir().unwrap();
    let config = SiteConfig {
        base_url: "/academy/".to_string(),
        ..SiteConfig::default()
    };
    export_site(&config, dir.path()).unwrap();

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains(r#"href="/academy/styles.css""#));
    assert!(html.contains(r#"href="/academy/courses""#));

    let css = fs::read_to_string(dir.path().join(STYLESHEET_FILE)).unwrap();
    assert!(css.contains(":root"));
    assert!(css.contains(".reveal.is-visible"));
}
