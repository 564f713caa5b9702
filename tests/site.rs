//! End-to-end checks against the bundled fixture content.

use simple_folio::config;
use simple_folio::contact::{ContactError, ContactSubmission};
use simple_folio::content::{ContentError, ContentLoader};
use simple_folio::gallery::{self, FilterSelection};
use simple_folio::generate::{self, PageKind};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn names<'a>(projects: &[&'a simple_folio::model::Project]) -> Vec<&'a str> {
    projects.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn fixture_content_normalizes() {
    let content = ContentLoader::for_content_root(&fixture_root())
        .load_all()
        .unwrap();

    assert_eq!(content.profile.tagline, "Builder of practical AI tools");
    assert_eq!(content.profile.focus_areas, vec!["Retrieval", "Developer tooling"]);
    assert_eq!(content.profile.experience[0].end_label(), "Present");
    assert_eq!(content.profile.experience[1].stack, vec!["TypeScript"]);
    assert_eq!(content.profile.skills.radar[1].score, 70);
    assert_eq!(content.profile.skills.radar[2].score, 0);
    assert_eq!(content.profile.social_links[1].label, "Connect");

    assert_eq!(content.achievements[0].year, "2024");
    assert_eq!(content.achievements[2].issuer, "");

    let maturities: Vec<i64> = content.projects.iter().map(|p| p.maturity).collect();
    assert_eq!(maturities, vec![80, 45, 0, 140]);
    assert_eq!(content.projects[1].technologies.len(), 1);
    assert_eq!(content.projects[3].display_name(), "Untitled Project");
    assert_eq!(content.projects[3].progress(), 100);
}

#[test]
fn facets_cover_every_project() {
    let projects = ContentLoader::for_content_root(&fixture_root())
        .projects()
        .unwrap();
    let facets = gallery::derive_facets(&projects);

    assert_eq!(facets.categories.iter().collect::<Vec<_>>(), vec!["ML", "Web"]);
    assert_eq!(
        facets.tags.iter().collect::<Vec<_>>(),
        vec!["LangChain", "Python", "React", "Rust", "TypeScript"]
    );
}

#[test]
fn filters_combine_with_and() {
    let projects = ContentLoader::for_content_root(&fixture_root())
        .projects()
        .unwrap();

    let all = gallery::filter(&projects, &FilterSelection::default());
    assert_eq!(all.len(), projects.len());

    let python = FilterSelection::default().with_tag("Python");
    assert_eq!(
        names(&gallery::filter(&projects, &python)),
        vec!["Relief Bot", "Study Buddy"]
    );

    let narrowed = python.clone().with_tag("LangChain").with_category("ML");
    assert_eq!(names(&gallery::filter(&projects, &narrowed)), vec!["Relief Bot"]);

    let search = FilterSelection::default().with_search("RSVP");
    assert_eq!(names(&gallery::filter(&projects, &search)), vec!["Campus Hub"]);

    let none = FilterSelection::default()
        .with_category("Web")
        .with_tag("Python");
    assert!(gallery::filter(&projects, &none).is_empty());
}

#[test]
fn build_writes_every_page() {
    let root = fixture_root();
    let out = TempDir::new().unwrap();
    let site_config = config::load_config(&root).unwrap();
    let content = ContentLoader::for_content_root(&root).load_all().unwrap();

    let report = generate::generate(&content, &site_config, &root, out.path()).unwrap();

    // about + portfolio + all + 2 categories + 5 tags + contact
    assert_eq!(report.pages.len(), 11);
    assert_eq!(report.assets, vec!["resume.txt"]);
    for page in &report.pages {
        assert!(out.path().join(&page.path).is_file(), "{}", page.path);
    }
    assert!(report.pages.iter().any(|p| p.kind
        == PageKind::Category {
            value: "ML".to_string(),
            visible: 2,
        }));

    let about = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(about.contains("Maya Chen"));
    assert!(about.contains("Builder of practical AI tools"));
    assert!(about.contains(r#"href="/resume.txt""#));

    let ml = std::fs::read_to_string(out.path().join("portfolio/category/ml.html")).unwrap();
    assert!(ml.contains("Relief Bot"));
    assert!(ml.contains("Study Buddy"));
    assert!(!ml.contains("Campus Hub"));

    let contact = std::fs::read_to_string(out.path().join("contact.html")).unwrap();
    assert!(contact.contains("maya@example.com"));
}

#[test]
fn missing_data_dir_is_reported() {
    let tmp = TempDir::new().unwrap();
    let err = ContentLoader::for_content_root(tmp.path())
        .load_all()
        .unwrap_err();
    assert!(matches!(err, ContentError::SourceNotFound { .. }));
}

#[test]
fn contact_submission_rules() {
    assert!(
        ContactSubmission::new("Ada", "ada@example.com", "Hi")
            .validate()
            .is_ok()
    );
    assert!(matches!(
        ContactSubmission::new("Ada", "", "Hi").validate(),
        Err(ContactError::MissingFields(_))
    ));
    assert_eq!(
        ContactSubmission::new("Ada", "ada@example", "Hi").validate(),
        Err(ContactError::InvalidEmail)
    );
}
