//! Static bundle export.
//!
//! Renders every page settled (all reveals visible, motion at rest) and
//! writes the result as a directory any static file host can serve:
//!
//! ```text
//! out/
//!   index.html
//!   courses/index.html
//!   courses/<slug>/index.html
//!   mentors/index.html
//!   about/index.html
//!   contact/index.html
//!   404.html
//!   styles.css
//!   catalog.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::pages;
use crate::router::Route;
use crate::theme::{self, Palette};
use crate::view::ViewContext;

pub const NOT_FOUND_FILE: &str = "404.html";
pub const STYLESHEET_FILE: &str = "styles.css";
pub const CATALOG_FILE: &str = "catalog.json";

/// What an export wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Written files, relative to the output directory.
    pub files: Vec<PathBuf>,
    pub bytes: usize,
}

/// Output file for a page route, relative to the bundle root.
pub fn page_file(route: &Route) -> PathBuf {
    let path = route.path();
    let dir = path.trim_matches('/');
    if dir.is_empty() {
        PathBuf::from("index.html")
    } else {
        Path::new(dir).join("index.html")
    }
}

/// Render one route as a settled document.
pub fn render_route(config: &SiteConfig, route: Route) -> String {
    pages::document(&ViewContext::settled(config, route))
}

/// Write the whole bundle into `out`.
pub fn export_site(config: &SiteConfig, out: &Path) -> Result<ExportReport> {
    catalog::validate(catalog::courses())?;
    catalog::validate_mentors(catalog::mentors())?;

    let mut writer = BundleWriter::new(out);
    for route in Route::static_routes() {
        let file = page_file(&route);
        writer.write(&file, &render_route(config, route))?;
    }
    writer.write(
        Path::new(NOT_FOUND_FILE),
        &render_route(config, Route::NotFound("/404".to_string())),
    )?;
    writer.write(Path::new(STYLESHEET_FILE), &theme::stylesheet(&Palette::default()))?;

    let mut json = serde_json::to_string_pretty(&catalog::snapshot())?;
    json.push('\n');
    writer.write(Path::new(CATALOG_FILE), &json)?;

    log::info!(
        "exported {} files ({} bytes) to {}",
        writer.report.files.len(),
        writer.report.bytes,
        out.display()
    );
    Ok(writer.report)
}

struct BundleWriter<'a> {
    root: &'a Path,
    report: ExportReport,
}

impl<'a> BundleWriter<'a> {
    fn new(root: &'a Path) -> Self {
        Self {
            root,
            report: ExportReport::default(),
        }
    }

    fn write(&mut self, relative: &Path, contents: &str) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SiteError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, contents).map_err(|source| SiteError::Write {
            path: path.clone(),
            source,
        })?;
        log::debug!("wrote {} ({} bytes)", path.display(), contents.len());
        self.report.files.push(relative.to_path_buf());
        self.report.bytes += contents.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_page_files() {
        assert_eq!(page_file(&Route::Home), PathBuf::from("index.html"));
        assert_eq!(page_file(&Route::Courses), PathBuf::from("courses/index.html"));
        assert_eq!(
            page_file(&Route::CourseCategory(Category::Animation3d)),
            PathBuf::from("courses/3d-animation/index.html")
        );
    }

    #[test]
    fn test_export_writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let report = export_site(&SiteConfig::default(), dir.path()).unwrap();

        // 6 pages + 7 category pages + 404 + stylesheet + catalog
        assert_eq!(report.files.len(), Route::static_routes().len() + 3);
        for file in &report.files {
            assert!(dir.path().join(file).is_file(), "{}", file.display());
        }
        let total: u64 = report
            .files
            .iter()
            .map(|f| fs::metadata(dir.path().join(f)).unwrap().len())
            .sum();
        assert_eq!(total as usize, report.bytes);
    }

    #[test]
    fn test_exported_pages_are_settled() {
        let dir = tempfile::tempdir().unwrap();
        export_site(&SiteConfig::default(), dir.path()).unwrap();
        let mentors = fs::read_to_string(dir.path().join("mentors/index.html")).unwrap();
        assert!(mentors.contains("Meet Our Expert"));
        assert_eq!(mentors.matches("data-reveal=").count(), mentors.matches("is-visible").count());
        let not_found = fs::read_to_string(dir.path().join(NOT_FOUND_FILE)).unwrap();
        assert!(not_found.contains("Oops! Page not found"));
    }

    #[test]
    fn test_write_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("site");
        fs::write(&blocker, "not a directory").unwrap();

        let err = export_site(&SiteConfig::default(), &blocker).unwrap_err();
        match err {
            SiteError::Write { path, .. } => assert!(path.starts_with(&blocker)),
            other => panic!("unexpected error {other}"),
        }
    }
}
