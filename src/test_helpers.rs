//! Shared test utilities for the simple-folio test suite.
//!
//! Provides fixture setup, small record builders, and an in-memory sample
//! site so renderer and gallery tests don't need YAML on disk.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let content = ContentLoader::for_content_root(tmp.path()).load_all().unwrap();
//!
//! let projects = vec![project("A", Some("ML"), &["Python", "LangChain"])];
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::Content;
use crate::model::{Achievement, Profile, Project};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a content document into `data_dir`, creating the directory.
pub fn write_data(data_dir: &Path, file_name: &str, yaml: &str) {
    std::fs::create_dir_all(data_dir).unwrap();
    std::fs::write(data_dir.join(file_name), yaml).unwrap();
}

// =========================================================================
// Record builders
// =========================================================================

/// A project with just the fields the gallery filter looks at.
pub fn project(name: &str, category: Option<&str>, technologies: &[&str]) -> Project {
    Project {
        name: name.to_string(),
        category: category.map(str::to_string),
        technologies: technologies.iter().copied().collect(),
        ..Default::default()
    }
}

/// A small site: two ML projects, one Web project, two achievements.
pub fn sample_content() -> Content {
    let mut relief = project("Relief Bot", Some("ML"), &["Python", "LangChain"]);
    relief.summary = "Routes disaster relief requests".to_string();
    relief.maturity = 80;

    let mut tutor = project("Study Buddy", Some("ML"), &["Python"]);
    tutor.summary = "Flashcards generated from lecture notes".to_string();

    let mut hub = project("Campus Hub", Some("Web"), &["TS", "React"]);
    hub.summary = "Event board for student orgs".to_string();

    Content {
        profile: Profile {
            tagline: "Builder of practical AI tools".to_string(),
            ..Default::default()
        },
        achievements: vec![
            Achievement {
                year: "2024".to_string(),
                issuer: "Devpost".to_string(),
                title: "Hackathon Winner".to_string(),
            },
            Achievement {
                year: "2023".to_string(),
                issuer: "GDG".to_string(),
                title: "Community Lead".to_string(),
            },
        ],
        projects: vec![relief, tutor, hub],
    }
}
