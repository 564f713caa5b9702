//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each entity (project,
//! achievement, page) leads with its positional index and title; paths and
//! detail follow as indented context lines. This makes `check` readable as a
//! content inventory and `build` readable as a site map.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Profile
//!     Tagline: Builder of practical AI tools
//!     3 experience, 2 leadership categories, 4 skill categories
//!
//! Achievements
//! 001 2024 Hackathon Winner
//!     Issuer: Devpost
//!
//! Projects
//! 001 Relief Bot
//!     Category: ML
//!     Technologies: Python, LangChain
//!     Progress: 80%
//!
//! Facets
//!     Categories: ML, Web
//!     Tags: LangChain, Python, React, TS
//!
//! Sources
//!     data/profile.yaml
//!     data/achievements.yaml
//!     data/projects.yaml
//!     config.toml
//!     assets/
//! ```
//!
//! ## Build
//!
//! ```text
//! About → index.html
//! Portfolio (3 projects) → portfolio/index.html
//!     All (3 projects) → portfolio/all.html
//!     Category ML (2 projects) → portfolio/category/ml.html
//!     Tag Python (2 projects) → portfolio/tag/python.html
//! Contact → contact.html
//!
//! Assets
//!     cv.pdf
//!
//! Generated 6 pages, 1 asset
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::contact::{CONFIRMATION_MESSAGE, Confirmation, ContactError, DELIVERY_NOTE};
use crate::content::{Content, ContentLoader, ContentSource};
use crate::gallery::{Facets, FilterSelection};
use crate::generate::{ASSETS_DIR, GenerateReport, PageKind};
use crate::model::Project;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

fn join_or_none<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let joined = items.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Header plus context lines for one project.
fn project_lines(index: usize, project: &Project) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}",
        format_index(index),
        project.display_name()
    )];
    let ctx = indent(1);
    if let Some(category) = &project.category {
        lines.push(format!("{ctx}Category: {category}"));
    }
    if !project.technologies.is_empty() {
        lines.push(format!(
            "{ctx}Technologies: {}",
            join_or_none(project.technologies.iter())
        ));
    }
    if project.progress() > 0 {
        lines.push(format!("{ctx}Progress: {}%", project.progress()));
    }
    if !project.summary.is_empty() {
        lines.push(format!("{ctx}{}", truncate_desc(project.summary.trim(), 60)));
    }
    lines
}

fn facet_lines(facets: &Facets) -> Vec<String> {
    vec![
        format!(
            "{}Categories: {}",
            indent(1),
            join_or_none(facets.categories.iter().map(String::as_str))
        ),
        format!(
            "{}Tags: {}",
            indent(1),
            join_or_none(facets.tags.iter().map(String::as_str))
        ),
    ]
}

// ============================================================================
// Check
// ============================================================================

/// Format the content inventory shown by `check`.
pub fn format_check_output(
    content: &Content,
    facets: &Facets,
    loader: &ContentLoader,
    source_root: &Path,
) -> Vec<String> {
    let mut lines = Vec::new();
    let profile = &content.profile;

    lines.push("Profile".to_string());
    if !profile.tagline.is_empty() {
        lines.push(format!("{}Tagline: {}", indent(1), profile.tagline));
    }
    lines.push(format!(
        "{}{}, {}, {}",
        indent(1),
        plural(profile.experience.len(), "experience", "experience"),
        plural(
            profile.leadership.len(),
            "leadership category",
            "leadership categories"
        ),
        plural(
            profile.skills.categories.len(),
            "skill category",
            "skill categories"
        ),
    ));

    lines.push(String::new());
    lines.push("Achievements".to_string());
    for (i, achievement) in content.achievements.iter().enumerate() {
        lines.push(format!(
            "{} {} {}",
            format_index(i + 1),
            achievement.year,
            achievement.title
        ));
        if !achievement.issuer.is_empty() {
            lines.push(format!("{}Issuer: {}", indent(1), achievement.issuer));
        }
    }

    lines.push(String::new());
    lines.push("Projects".to_string());
    for (i, project) in content.projects.iter().enumerate() {
        lines.extend(project_lines(i + 1, project));
    }

    lines.push(String::new());
    lines.push("Facets".to_string());
    lines.extend(facet_lines(facets));

    lines.push(String::new());
    lines.push("Sources".to_string());
    let data_dir = loader.data_dir();
    let data_prefix = data_dir
        .strip_prefix(source_root)
        .unwrap_or(data_dir)
        .display()
        .to_string();
    for source in ContentSource::ALL {
        lines.push(format!(
            "{}{}/{}",
            indent(1),
            data_prefix,
            source.file_name()
        ));
    }
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join(ASSETS_DIR).is_dir() {
        lines.push(format!("{}{}/", indent(1), ASSETS_DIR));
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(
    content: &Content,
    facets: &Facets,
    loader: &ContentLoader,
    source_root: &Path,
) {
    for line in format_check_output(content, facets, loader, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Facets and filter
// ============================================================================

/// Format the facet listing shown by `facets`.
pub fn format_facets_output(facets: &Facets) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    for (i, category) in facets.categories.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), category));
    }
    lines.push(String::new());
    lines.push("Tags".to_string());
    for (i, tag) in facets.tags.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), tag));
    }
    lines
}

pub fn print_facets_output(facets: &Facets) {
    for line in format_facets_output(facets) {
        println!("{}", line);
    }
}

/// Format the visible projects for a selection.
pub fn format_filter_output(
    selection: &FilterSelection,
    visible: &[&Project],
    total: usize,
) -> Vec<String> {
    let mut lines = Vec::new();
    if !selection.categories.is_empty() {
        lines.push(format!(
            "Categories: {}",
            join_or_none(selection.categories.iter().map(String::as_str))
        ));
    }
    if !selection.tags.is_empty() {
        lines.push(format!(
            "Tags (all of): {}",
            join_or_none(selection.tags.iter().map(String::as_str))
        ));
    }
    if !selection.search_term.is_empty() {
        lines.push(format!("Search: {:?}", selection.search_term));
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }

    if visible.is_empty() {
        lines.push(
            "No projects match the current filters. Try broadening your selection.".to_string(),
        );
    } else {
        for (i, project) in visible.iter().enumerate() {
            lines.extend(project_lines(i + 1, project));
        }
    }

    lines.push(String::new());
    lines.push(format!("Showing {} of {}", visible.len(), plural(total, "project", "projects")));
    lines
}

pub fn print_filter_output(selection: &FilterSelection, visible: &[&Project], total: usize) {
    for line in format_filter_output(selection, visible, total) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the site map produced by `build`.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    for page in &report.pages {
        let line = match &page.kind {
            PageKind::About => format!("About → {}", page.path),
            PageKind::Portfolio { visible } => format!(
                "Portfolio ({}) → {}",
                plural(*visible, "project", "projects"),
                page.path
            ),
            PageKind::AllProjects { visible } => format!(
                "{}All ({}) → {}",
                indent(1),
                plural(*visible, "project", "projects"),
                page.path
            ),
            PageKind::Category { value, visible } => format!(
                "{}Category {} ({}) → {}",
                indent(1),
                value,
                plural(*visible, "project", "projects"),
                page.path
            ),
            PageKind::Tag { value, visible } => format!(
                "{}Tag {} ({}) → {}",
                indent(1),
                value,
                plural(*visible, "project", "projects"),
                page.path
            ),
            PageKind::Contact => format!("Contact → {}", page.path),
        };
        lines.push(line);
    }

    if !report.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("{}{}", indent(1), asset));
        }
    }
    if !report.skipped_assets.is_empty() {
        lines.push(String::new());
        lines.push("Skipped assets (a generated page uses the same path)".to_string());
        for asset in &report.skipped_assets {
            lines.push(format!("{}{}", indent(1), asset));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        plural(report.pages.len(), "page", "pages"),
        plural(report.assets.len(), "asset", "assets")
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Contact
// ============================================================================

/// Format the local confirmation for an accepted contact submission.
pub fn format_contact_output(confirmation: &Confirmation) -> Vec<String> {
    vec![
        CONFIRMATION_MESSAGE.to_string(),
        format!("({})", DELIVERY_NOTE),
        String::new(),
        confirmation.from_line(),
        confirmation.message.clone(),
    ]
}

pub fn print_contact_output(confirmation: &Confirmation) {
    for line in format_contact_output(confirmation) {
        println!("{}", line);
    }
}

/// Format a rejected submission the way the form shows it inline.
pub fn format_contact_error(err: &ContactError) -> Vec<String> {
    let mut lines = vec![err.user_message().to_string()];
    if let ContactError::MissingFields(fields) = err {
        lines.push(format!("{}Missing: {}", indent(1), fields.join(", ")));
    }
    lines
}

/// Print a rejected submission to stderr.
pub fn print_contact_error(err: &ContactError) {
    for line in format_contact_error(err) {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{derive_facets, filter};
    use crate::generate::GeneratedPage;
    use crate::test_helpers::{project, sample_content, setup_fixtures};

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_desc("short", 10), "short");
        assert_eq!(truncate_desc("héllo wörld", 5), "héllo...");
    }

    #[test]
    fn project_lines_show_context() {
        let mut p = project("Relief Bot", Some("ML"), &["Python", "LangChain"]);
        p.maturity = 80;
        let lines = project_lines(1, &p);
        assert_eq!(lines[0], "001 Relief Bot");
        assert_eq!(lines[1], "    Category: ML");
        assert_eq!(lines[2], "    Technologies: Python, LangChain");
        assert_eq!(lines[3], "    Progress: 80%");
    }

    #[test]
    fn filter_output_lists_selection_and_count() {
        let content = sample_content();
        let sel = FilterSelection::default().with_tag("Python");
        let visible = filter(&content.projects, &sel);
        let lines = format_filter_output(&sel, &visible, content.projects.len());

        assert_eq!(lines[0], "Tags (all of): Python");
        assert!(lines.contains(&"001 Relief Bot".to_string()));
        assert!(lines.contains(&"002 Study Buddy".to_string()));
        assert_eq!(lines.last().unwrap(), "Showing 2 of 3 projects");
    }

    #[test]
    fn filter_output_when_nothing_matches() {
        let content = sample_content();
        let sel = FilterSelection::default().with_search("zzz");
        let lines = format_filter_output(&sel, &[], content.projects.len());
        assert_eq!(lines[0], "Search: \"zzz\"");
        assert!(lines.iter().any(|l| l.starts_with("No projects match")));
    }

    #[test]
    fn facets_output_is_sorted() {
        let facets = derive_facets(&sample_content().projects);
        let lines = format_facets_output(&facets);
        assert_eq!(lines[0], "Categories");
        assert_eq!(lines[1], "    001 ML");
        assert_eq!(lines[2], "    002 Web");
        assert_eq!(lines[4], "Tags");
        assert_eq!(lines[5], "    001 LangChain");
    }

    #[test]
    fn generate_output_summarizes_pages() {
        let report = GenerateReport {
            pages: vec![
                GeneratedPage {
                    kind: PageKind::About,
                    path: "index.html".to_string(),
                },
                GeneratedPage {
                    kind: PageKind::Portfolio { visible: 3 },
                    path: "portfolio/index.html".to_string(),
                },
                GeneratedPage {
                    kind: PageKind::Tag {
                        value: "Python".to_string(),
                        visible: 1,
                    },
                    path: "portfolio/tag/python.html".to_string(),
                },
            ],
            assets: vec!["cv.pdf".to_string()],
            skipped_assets: vec!["index.html".to_string()],
        };
        let lines = format_generate_output(&report);
        assert_eq!(lines[0], "About → index.html");
        assert_eq!(lines[1], "Portfolio (3 projects) → portfolio/index.html");
        assert_eq!(lines[2], "    Tag Python (1 project) → portfolio/tag/python.html");
        assert!(lines.contains(&"    index.html".to_string()));
        assert_eq!(lines.last().unwrap(), "Generated 3 pages, 1 asset");
    }

    #[test]
    fn check_output_lists_sources() {
        let tmp = setup_fixtures();
        let loader = ContentLoader::for_content_root(tmp.path());
        let content = loader.load_all().unwrap();
        let facets = derive_facets(&content.projects);
        let lines = format_check_output(&content, &facets, &loader, tmp.path());

        assert_eq!(lines[0], "Profile");
        assert!(lines.contains(&"    data/profile.yaml".to_string()));
        assert!(lines.contains(&"    data/projects.yaml".to_string()));
        assert!(lines.contains(&"    config.toml".to_string()));
    }

    #[test]
    fn contact_output_echoes_submission() {
        let confirmation = Confirmation {
            from_name: "Ada".to_string(),
            from_email: "a@b.com".to_string(),
            message: "Hello".to_string(),
        };
        let lines = format_contact_output(&confirmation);
        assert_eq!(lines[0], CONFIRMATION_MESSAGE);
        assert_eq!(lines[3], "From: Ada, a@b.com");
        assert_eq!(lines[4], "Hello");
    }

    #[test]
    fn contact_error_uses_inline_messages() {
        let lines = format_contact_error(&ContactError::MissingFields(vec!["name", "message"]));
        assert_eq!(lines[0], "Please fill all fields before sending.");
        assert_eq!(lines[1], "    Missing: name, message");

        let lines = format_contact_error(&ContactError::InvalidEmail);
        assert_eq!(lines, vec!["Please provide a valid email address."]);
    }
}
