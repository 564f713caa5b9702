//! HTML site generation.
//!
//! Takes the normalized [`Content`] and the resolved [`SiteConfig`] and
//! writes the final static site.
//!
//! ## Generated Pages
//!
//! - **About** (`/index.html`): hero, spotlight achievements, professional
//!   journey, leadership, skills, education, certifications
//! - **Portfolio** (`/portfolio/index.html`): facet links plus the projects
//!   visible under the configured initial selection
//! - **All projects** (`/portfolio/all.html`): the unfiltered gallery, linked
//!   from the "All" facet whatever the initial selection is
//! - **Facet pages** (`/portfolio/category/{slug}.html`,
//!   `/portfolio/tag/{slug}.html`): one page per category and technology,
//!   each the result of [`gallery::filter`] with that single facet selected
//! - **Contact** (`/contact.html`): local-only form with in-browser validation
//!
//! Every page shares the navigation and the sidebar (location, resume
//! download, quick facts, recent highlights, socials, contact details).
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── contact.html
//! ├── cv.pdf                     # Copied from content/assets/
//! └── portfolio/
//!     ├── index.html
//!     ├── all.html
//!     ├── category/
//!     │   └── civic-tech.html
//!     └── tag/
//!         ├── python.html
//!         └── rust.html
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/gallery.js`: Free-text search over rendered project cards
//! - `static/contact.js`: Contact form validation and confirmation
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All content interpolation is auto-escaped; only markdown fields
//! (`hero_quote`, `call_to_action`) are rendered through pulldown-cmark.

use crate::config::{self, SiteConfig};
use crate::contact;
use crate::content::Content;
use crate::gallery::{self, Facets, FilterSelection};
use crate::model::{Achievement, Profile, Project};
use crate::naming::{title_case, unique_slugs};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const GALLERY_JS: &str = include_str!("../static/gallery.js");
const CONTACT_JS: &str = include_str!("../static/contact.js");

/// Directory under the content root whose files are copied to the output root.
pub const ASSETS_DIR: &str = "assets";

/// Unfiltered gallery page, the target of the "All" facet link.
pub const ALL_PROJECTS_PAGE: &str = "portfolio/all.html";

/// Top-level navigation sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Portfolio, Section::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Section::About => "/",
            Section::Portfolio => "/portfolio/",
            Section::Contact => "/contact.html",
        }
    }
}

/// What a page shows, for CLI reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    About,
    Portfolio { visible: usize },
    AllProjects { visible: usize },
    Category { value: String, visible: usize },
    Tag { value: String, visible: usize },
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub kind: PageKind,
    /// Output path relative to the output directory.
    pub path: String,
}

/// Result of a generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    /// Asset paths copied, relative to the output directory.
    pub assets: Vec<String>,
    /// Asset paths left out because a generated page is written there.
    pub skipped_assets: Vec<String>,
}

/// Everything page renderers need, resolved once per build.
struct SiteContext<'a> {
    config: &'a SiteConfig,
    content: &'a Content,
    facets: Facets,
    category_slugs: BTreeMap<String, String>,
    tag_slugs: BTreeMap<String, String>,
    css: String,
    /// `/file` link when the resume exists in the assets directory.
    resume_href: Option<String>,
}

impl<'a> SiteContext<'a> {
    fn new(content: &'a Content, config: &'a SiteConfig, source_root: &Path) -> Self {
        let facets = gallery::derive_facets(&content.projects);
        let category_slugs = unique_slugs(&facets.categories);
        let tag_slugs = unique_slugs(&facets.tags);
        let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
        let resume_href = resume_href(&content.profile, source_root);
        Self {
            config,
            content,
            facets,
            category_slugs,
            tag_slugs,
            css,
            resume_href,
        }
    }

    fn page_title(&self, page: &str) -> String {
        format!("{} · {}", page, self.config.site.title)
    }
}

/// Render the whole site into `output_dir`.
pub fn generate(
    content: &Content,
    config: &SiteConfig,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let ctx = SiteContext::new(content, config, source_root);
    let mut report = GenerateReport::default();

    fs::create_dir_all(output_dir)?;

    write_page(output_dir, "index.html", render_about_page(&ctx))?;
    report.pages.push(GeneratedPage {
        kind: PageKind::About,
        path: "index.html".to_string(),
    });

    let initial = FilterSelection::initial(&ctx.facets, config.gallery.initial_selection);
    let visible = gallery::filter(&content.projects, &initial);
    write_page(
        output_dir,
        "portfolio/index.html",
        render_portfolio_page(&ctx, &initial, &visible, None),
    )?;
    report.pages.push(GeneratedPage {
        kind: PageKind::Portfolio {
            visible: visible.len(),
        },
        path: "portfolio/index.html".to_string(),
    });

    let everything = FilterSelection::default();
    let all = gallery::filter(&content.projects, &everything);
    write_page(
        output_dir,
        ALL_PROJECTS_PAGE,
        render_portfolio_page(&ctx, &everything, &all, None),
    )?;
    report.pages.push(GeneratedPage {
        kind: PageKind::AllProjects { visible: all.len() },
        path: ALL_PROJECTS_PAGE.to_string(),
    });

    for (category, slug) in &ctx.category_slugs {
        let selection = FilterSelection::default().with_category(category.as_str());
        let visible = gallery::filter(&content.projects, &selection);
        let path = format!("portfolio/category/{slug}.html");
        write_page(
            output_dir,
            &path,
            render_portfolio_page(&ctx, &selection, &visible, Some(FacetRef::Category(category))),
        )?;
        report.pages.push(GeneratedPage {
            kind: PageKind::Category {
                value: category.clone(),
                visible: visible.len(),
            },
            path,
        });
    }

    for (tag, slug) in &ctx.tag_slugs {
        let selection = FilterSelection::default().with_tag(tag.as_str());
        let visible = gallery::filter(&content.projects, &selection);
        let path = format!("portfolio/tag/{slug}.html");
        write_page(
            output_dir,
            &path,
            render_portfolio_page(&ctx, &selection, &visible, Some(FacetRef::Tag(tag))),
        )?;
        report.pages.push(GeneratedPage {
            kind: PageKind::Tag {
                value: tag.clone(),
                visible: visible.len(),
            },
            path,
        });
    }

    write_page(output_dir, "contact.html", render_contact_page(&ctx))?;
    report.pages.push(GeneratedPage {
        kind: PageKind::Contact,
        path: "contact.html".to_string(),
    });

    let reserved: HashSet<&str> = report.pages.iter().map(|p| p.path.as_str()).collect();
    let (copied, skipped) = copy_assets(&source_root.join(ASSETS_DIR), output_dir, &reserved)?;
    report.assets = copied;
    report.skipped_assets = skipped;

    Ok(report)
}

fn write_page(output_dir: &Path, rel_path: &str, markup: Markup) -> std::io::Result<()> {
    let target = output_dir.join(rel_path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, markup.into_string())
}

/// Copy every file under `assets_dir` into `output_dir`, keeping structure.
///
/// Files whose relative path is in `reserved` are skipped and returned
/// separately. A missing assets directory is not an error.
fn copy_assets(
    assets_dir: &Path,
    output_dir: &Path,
    reserved: &HashSet<&str>,
) -> Result<(Vec<String>, Vec<String>), GenerateError> {
    let mut copied = Vec::new();
    let mut skipped = Vec::new();
    if !assets_dir.is_dir() {
        return Ok((copied, skipped));
    }
    for entry in WalkDir::new(assets_dir).sort_by_file_name() {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let dst: PathBuf = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else {
            let rel_path = rel.to_string_lossy().replace('\\', "/");
            if reserved.contains(rel_path.as_str()) {
                skipped.push(rel_path);
            } else {
                fs::copy(entry.path(), &dst)?;
                copied.push(rel_path);
            }
        }
    }
    Ok((copied, skipped))
}

fn resume_href(profile: &Profile, source_root: &Path) -> Option<String> {
    let file = profile.resume.file.trim().trim_start_matches('/');
    if file.is_empty() {
        return None;
    }
    // Only plain paths inside assets/ end up in the output.
    if !Path::new(file)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    source_root
        .join(ASSETS_DIR)
        .join(file)
        .is_file()
        .then(|| format!("/{file}"))
}

fn markdown(text: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(text));
    PreEscaped(out)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, lang: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the About / Portfolio / Contact selector
pub fn render_nav(current: Section) -> Markup {
    html! {
        nav.site-nav {
            ul {
                @for section in Section::ALL {
                    li class=[(section == current).then_some("current")] {
                        a href=(section.href()) { (section.label()) }
                    }
                }
            }
        }
    }
}

/// Wraps page content with navigation and the shared sidebar
fn page_layout(ctx: &SiteContext, current: Section, title: &str, main: Markup) -> Markup {
    let content = html! {
        div.layout {
            aside.sidebar {
                (render_nav(current))
                (render_sidebar(ctx))
            }
            (main)
        }
    };
    base_document(
        &ctx.page_title(title),
        &ctx.config.site.language,
        &ctx.css,
        content,
    )
}

fn divider() -> Markup {
    html! { hr.sidebar-divider; }
}

/// Renders the sidebar shown on every page
fn render_sidebar(ctx: &SiteContext) -> Markup {
    let profile = &ctx.content.profile;
    let site = &ctx.config.site;
    let highlights = preview(&ctx.content.achievements, ctx.config.previews.sidebar_highlights);

    html! {
        div.sidebar-hero {
            span { "👋" }
            h2 { (ctx.config.display_owner()) }
            @if !site.headline.is_empty() {
                p { (site.headline) }
            }
        }
        @if !profile.contact.location.is_empty() {
            p { "📍 " (profile.contact.location) }
        }
        @if !profile.sidebar_summary.is_empty() {
            p.caption { (profile.sidebar_summary) }
        }

        (render_resume(profile, ctx.resume_href.as_deref()))

        @if !profile.quick_stats.is_empty() {
            (divider())
            h4 { "Quick Facts" }
            @for fact in &profile.quick_stats {
                div.fact-chip {
                    (fact.icon) " " strong { (fact.value) }
                    span { (fact.label) }
                    small { (fact.hint) }
                }
            }
        }

        @if !highlights.is_empty() {
            (divider())
            h4 { "Recent Highlights" }
            @for item in highlights {
                div.highlight-item {
                    strong { (item.year) } " · " (item.title)
                }
            }
        }

        @if !profile.social_links.is_empty() {
            (divider())
            h4 { "Socials" }
            @for link in &profile.social_links {
                p {
                    (link.icon) " "
                    a href=(link.url) target="_blank" rel="noopener" { (link.label) }
                }
            }
        }

        (divider())
        h4 { "Let's Connect" }
        @if !profile.contact.availability.is_empty() {
            p.caption { (profile.contact.availability) }
        }
        @if !profile.contact.email.is_empty() {
            p {
                "📬 "
                a href={ "mailto:" (profile.contact.email) } { (profile.contact.email) }
            }
        }
        @if !profile.contact.phone.is_empty() {
            p { "📱 " (profile.contact.phone) }
        }
    }
}

fn render_resume(profile: &Profile, href: Option<&str>) -> Markup {
    let resume = &profile.resume;
    if resume.file.trim().is_empty() {
        return html! {};
    }
    html! {
        @if let Some(href) = href {
            p { a.button href=(href) download { "📄 Download CV" } }
        } @else {
            div.resume-note { "Add your latest CV to `assets/` to enable downloads." }
        }
        @if !resume.note.is_empty() {
            p.caption { (resume.note) }
        }
    }
}

fn preview<T>(items: &[T], count: usize) -> &[T] {
    &items[..items.len().min(count)]
}

// ============================================================================
// About page
// ============================================================================

fn render_about_page(ctx: &SiteContext) -> Markup {
    let profile = &ctx.content.profile;
    let main = html! {
        main.about-page {
            (render_hero(ctx))
            (render_spotlight(preview(
                &ctx.content.achievements,
                ctx.config.previews.spotlight_achievements,
            )))
            (render_journey(profile))
            (render_leadership(profile))
            (render_skills(profile))
            @if !profile.education.is_empty() {
                section.education {
                    h3 { "Education" }
                    @for entry in &profile.education {
                        p {
                            strong { (entry.institution) } " · " (entry.duration)
                            br;
                            span.caption { (entry.program) }
                        }
                    }
                }
            }
            @if !profile.certifications.is_empty() {
                section.certifications {
                    h3 { "Certifications & Trainings" }
                    ul {
                        @for cert in &profile.certifications {
                            li { (cert) }
                        }
                    }
                }
            }
            @if !profile.call_to_action.is_empty() {
                div.notice.success { (markdown(&profile.call_to_action)) }
            }
        }
    };
    page_layout(ctx, Section::About, "About", main)
}

fn render_hero(ctx: &SiteContext) -> Markup {
    let profile = &ctx.content.profile;
    let stats = preview(&profile.quick_stats, ctx.config.previews.quick_stats);
    html! {
        header.hero {
            div {
                h3 { "Hi, I'm " (ctx.config.display_owner()) " 👋" }
                @if !profile.tagline.is_empty() {
                    h2 { (profile.tagline) }
                }
                @if !profile.summary_points.is_empty() {
                    ul {
                        @for point in &profile.summary_points {
                            li { (point) }
                        }
                    }
                }
                @if !profile.focus_areas.is_empty() {
                    div.focus-chip-row {
                        @for area in &profile.focus_areas {
                            span.focus-chip { (area) }
                        }
                    }
                }
            }
            @if !stats.is_empty() {
                div.snapshot {
                    h4 { "Snapshot" }
                    @for stat in stats {
                        div.metric {
                            span.caption { (stat.label) }
                            strong { (stat.value) }
                            @if !stat.hint.is_empty() {
                                small { (stat.hint) }
                            }
                        }
                    }
                }
            }
        }
        @if !profile.hero_quote.is_empty() {
            blockquote.hero-quote { (markdown(&profile.hero_quote)) }
        }
    }
}

fn render_spotlight(achievements: &[Achievement]) -> Markup {
    html! {
        @if !achievements.is_empty() {
            section.spotlight {
                h3 { "Spotlight Achievements" }
                div.spotlight-grid {
                    @for achievement in achievements {
                        div {
                            strong { (achievement.year) }
                            p.caption { (achievement.issuer) }
                            p { (achievement.title) }
                        }
                    }
                }
            }
        }
    }
}

fn render_journey(profile: &Profile) -> Markup {
    html! {
        section.journey {
            h3 { "Professional Journey" }
            @for exp in &profile.experience {
                div.journey-entry {
                    div {
                        p.caption { (exp.start) " – " (exp.end_label()) }
                        strong { (exp.company) }
                        (chips(exp.stack.iter().map(String::as_str)))
                    }
                    div {
                        h4 { (exp.title) }
                        p { (exp.summary) }
                        @if !exp.highlights.is_empty() {
                            ul {
                                @for highlight in &exp.highlights {
                                    li { (highlight) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_leadership(profile: &Profile) -> Markup {
    html! {
        section.leadership {
            h3 { "Leadership & Service" }
            @if profile.leadership.is_empty() {
                p.notice { "Leadership stories coming soon." }
            } @else {
                @for (i, category) in profile.leadership.iter().enumerate() {
                    details.leadership-category open[i == 0] {
                        summary { (category.name) }
                        @for role in &category.roles {
                            h4 { (role.role) }
                            p.caption { (role.organization) " · " (role.duration) }
                            @if !role.scope.is_empty() {
                                p { (role.scope) }
                            }
                            @if !role.highlights.is_empty() {
                                ul {
                                    @for item in &role.highlights {
                                        li { (item) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_skills(profile: &Profile) -> Markup {
    let skills = &profile.skills;
    html! {
        section.skills {
            h3 { "Skill Showcase" }
            div.skill-columns {
                div {
                    @for category in &skills.categories {
                        h4 { (category.name) }
                        (chips(category.items.iter().map(String::as_str)))
                    }
                }
                div {
                    @if skills.has_scores() {
                        @for entry in &skills.radar {
                            div.skill-meter {
                                span { (entry.label) }
                                div.bar {
                                    div.fill style={ "width: " (entry.score) "%;" } {}
                                }
                            }
                        }
                    } @else {
                        p.notice { "Update the radar scores in your profile data to unlock this chart." }
                    }
                    @if !skills.toolkit.is_empty() {
                        h4 { "Toolkit Sweet Spot" }
                        ul {
                            @for item in &skills.toolkit {
                                li { (item) }
                            }
                        }
                    }
                }
            }
            @if !skills.soft_skills.is_empty() {
                details {
                    summary { "Team & Personal Strengths" }
                    ul {
                        @for soft in &skills.soft_skills {
                            li { (soft) }
                        }
                    }
                }
            }
        }
    }
}

fn chips<'a>(items: impl Iterator<Item = &'a str>) -> Markup {
    let items: Vec<&str> = items.collect();
    html! {
        @if !items.is_empty() {
            div.stack-chip-row {
                @for item in items {
                    span.stack-chip { (item) }
                }
            }
        }
    }
}

// ============================================================================
// Portfolio pages
// ============================================================================

/// The single facet a facet page was generated for.
#[derive(Clone, Copy)]
enum FacetRef<'a> {
    Category(&'a str),
    Tag(&'a str),
}

fn render_portfolio_page(
    ctx: &SiteContext,
    selection: &FilterSelection,
    visible: &[&Project],
    facet: Option<FacetRef>,
) -> Markup {
    let projects = &ctx.content.projects;
    let heading = match facet {
        Some(FacetRef::Category(c)) => format!("Featured Projects: {c}"),
        Some(FacetRef::Tag(t)) => format!("Featured Projects built with {t}"),
        None => "Featured Projects".to_string(),
    };

    let main = html! {
        main.portfolio-page {
            h3 { (heading) }
            @if projects.is_empty() {
                p.notice { "Projects will appear here once you add them to `data/projects.yaml`." }
            } @else {
                (render_facets(ctx, selection))
                @if visible.is_empty() {
                    p.notice.warning { "No projects match the current filters. Try broadening your selection." }
                } @else {
                    div.search {
                        label for="project-search" { "Search" }
                        input #project-search type="search" placeholder="Try 'LangChain' or 'relief'";
                    }
                    p.notice.warning #search-empty hidden {
                        "No projects match the current filters. Try broadening your selection."
                    }
                    div.project-list {
                        @for project in visible {
                            (render_project_card(project))
                        }
                    }
                    script { (PreEscaped(GALLERY_JS)) }
                }
            }
        }
    };
    page_layout(ctx, Section::Portfolio, &heading, main)
}

fn render_facets(ctx: &SiteContext, selection: &FilterSelection) -> Markup {
    html! {
        nav.facets {
            div.facet-group {
                h4 { "Filter by focus area" }
                a class=[selection.is_empty().then_some("current")]
                    href={ "/" (ALL_PROJECTS_PAGE) } { "All" }
                @for (category, slug) in &ctx.category_slugs {
                    a class=[selection.categories.contains(category).then_some("current")]
                        href={ "/portfolio/category/" (slug) ".html" } { (category) }
                }
            }
            div.facet-group {
                h4 { "Filter by technology" }
                @for (tag, slug) in &ctx.tag_slugs {
                    a class=[selection.tags.contains(tag).then_some("current")]
                        href={ "/portfolio/tag/" (slug) ".html" } { (tag) }
                }
            }
        }
    }
}

/// Renders one project as a card
pub fn render_project_card(project: &Project) -> Markup {
    let progress = project.progress();
    html! {
        article.project-card data-search=(project.search_haystack().to_lowercase()) {
            div.project-main {
                h3 { (project.display_name()) }
                @if !project.role.is_empty() || !project.year.is_empty() {
                    p.caption { (project.role) " · " (project.year) }
                }
                p { (project.summary) }
                (chips(project.technologies.iter()))
                @if !project.highlights.is_empty() {
                    details {
                        summary { "What made this special" }
                        ul {
                            @for highlight in &project.highlights {
                                li { (highlight) }
                            }
                        }
                    }
                }
                @if !project.links.is_empty() {
                    p.project-links {
                        @for (i, (label, url)) in project.links.iter().enumerate() {
                            @if i > 0 { " • " }
                            a href=(url) target="_blank" rel="noopener" { (title_case(label)) }
                        }
                    }
                }
            }
            div.project-status {
                @if !project.status.is_empty() {
                    span.status-badge { (project.status) }
                }
                @if progress > 0 {
                    div.progress title={ (progress) "%" } {
                        div.fill style={ "width: " (progress) "%;" } {}
                    }
                }
                @if !project.impact.is_empty() {
                    p.caption { (project.impact) }
                }
            }
        }
    }
}

// ============================================================================
// Contact page
// ============================================================================

fn render_contact_page(ctx: &SiteContext) -> Markup {
    let main = html! {
        main.contact-page {
            h3 { "Get in touch" }
            form #contact-form .contact-form novalidate
                data-missing=(contact::MISSING_FIELDS_MESSAGE)
                data-invalid=(contact::INVALID_EMAIL_MESSAGE)
                data-confirmed=(contact::CONFIRMATION_MESSAGE)
                data-note=(contact::DELIVERY_NOTE) {
                label for="contact-name" { "Your name" }
                input #contact-name type="text" name="name";
                label for="contact-email" { "Your email" }
                input #contact-email type="email" name="email";
                label for="contact-message" { "Message" }
                textarea #contact-message name="message" rows="6" {}
                p { button.button type="submit" { "Send message" } }
            }
            div #contact-feedback aria-live="polite" {}
            script { (PreEscaped(CONTACT_JS)) }
        }
    };
    page_layout(ctx, Section::Contact, "Contact", main)
}

// ============================================================================
// Tests
// ============================================================================
