//! Typed content records.
//!
//! Each record is built from a loosely typed YAML value exactly once, at load
//! time, through the total accessors in [`fields`](crate::fields). After that
//! point every field is plain owned data with a neutral default, so renderers
//! and the gallery filter never check for presence.
//!
//! ## Content Shapes
//!
//! ```yaml
//! # profile.yaml (mapping)
//! tagline: Building useful AI tools
//! summary_points: [...]
//! focus_areas: [...]
//! quick_stats: [{label, value, hint, icon}]
//! experience: [{company, title, start, end, summary, stack, highlights}]
//! leadership: {categories: [{name, items: [{role, organization, duration, scope, highlights}]}]}
//! skills: {categories: [{name, items}], radar: [{label, score}], toolkit, soft_skills}
//! education: [{institution, duration, program}]
//! email: me@example.com
//! social_links: [{label, url, icon}]
//! resume: {file: cv.pdf, note: Updated 2025}
//!
//! # achievements.yaml (list)
//! - {year: 2024, issuer: Devpost, title: Winner}
//!
//! # projects.yaml (list)
//! - name: Relief Map
//!   category: Civic Tech
//!   technologies: [Python, LangChain]
//!   maturity: 80
//!   links: {repo: https://github.com/...}
//! ```

use crate::fields::{int_or_default, nested, opt_text, pairs, records, text, text_list};
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeSet;

/// Fallback display name for a project without a `name`.
pub const UNTITLED_PROJECT: &str = "Untitled Project";

// ============================================================================
// Profile
// ============================================================================

/// The portfolio owner's profile. A single record; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Profile {
    pub tagline: String,
    pub summary_points: Vec<String>,
    /// Duplicates collapsed, first occurrence order kept.
    pub focus_areas: Vec<String>,
    pub quick_stats: Vec<QuickStat>,
    pub hero_quote: String,
    pub sidebar_summary: String,
    pub experience: Vec<Experience>,
    pub leadership: Vec<LeadershipCategory>,
    pub skills: Skills,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
    pub contact: ContactInfo,
    pub social_links: Vec<SocialLink>,
    pub resume: ResumeInfo,
    pub call_to_action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuickStat {
    pub label: String,
    pub value: String,
    pub hint: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub start: String,
    /// Empty means the role is ongoing; see [`Experience::end_label`].
    pub end: String,
    pub summary: String,
    pub stack: Vec<String>,
    pub highlights: Vec<String>,
}

impl Experience {
    pub fn end_label(&self) -> &str {
        if self.end.is_empty() {
            "Present"
        } else {
            &self.end
        }
    }
}

/// A named group of leadership roles, e.g. "Community" or "Mentoring".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeadershipCategory {
    pub name: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Role {
    pub role: String,
    pub organization: String,
    pub duration: String,
    pub scope: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
    pub radar: Vec<RadarEntry>,
    pub toolkit: Vec<String>,
    pub soft_skills: Vec<String>,
}

impl Skills {
    /// Radar entries are only worth charting when at least one score is set.
    pub fn has_scores(&self) -> bool {
        self.radar.iter().any(|entry| entry.score > 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// A single proficiency score, clamped to `0..=100`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RadarEntry {
    pub label: String,
    pub score: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Education {
    pub institution: String,
    pub duration: String,
    pub program: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub availability: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeInfo {
    /// Path relative to the content `assets/` directory.
    pub file: String,
    pub note: String,
}

impl Profile {
    pub fn from_value(v: &Value) -> Self {
        let leadership = nested(v, "leadership");
        let skills = nested(v, "skills");
        let resume = nested(v, "resume");

        Self {
            tagline: text(v, "tagline"),
            summary_points: text_list(v, "summary_points"),
            focus_areas: dedup_ordered(text_list(v, "focus_areas")),
            quick_stats: records(v, "quick_stats")
                .iter()
                .map(|s| QuickStat {
                    label: text(s, "label"),
                    value: text(s, "value"),
                    hint: text(s, "hint"),
                    icon: text(s, "icon"),
                })
                .collect(),
            hero_quote: text(v, "hero_quote"),
            sidebar_summary: text(v, "sidebar_summary"),
            experience: records(v, "experience")
                .iter()
                .map(|e| Experience {
                    company: text(e, "company"),
                    title: text(e, "title"),
                    start: text(e, "start"),
                    end: text(e, "end"),
                    summary: text(e, "summary"),
                    stack: text_list(e, "stack"),
                    highlights: text_list(e, "highlights"),
                })
                .collect(),
            leadership: records(leadership, "categories")
                .iter()
                .map(|c| LeadershipCategory {
                    name: text(c, "name"),
                    roles: records(c, "items")
                        .iter()
                        .map(|r| Role {
                            role: text(r, "role"),
                            organization: text(r, "organization"),
                            duration: text(r, "duration"),
                            scope: text(r, "scope"),
                            highlights: text_list(r, "highlights"),
                        })
                        .collect(),
                })
                .collect(),
            skills: Skills {
                categories: records(skills, "categories")
                    .iter()
                    .map(|c| SkillCategory {
                        name: text(c, "name"),
                        items: text_list(c, "items"),
                    })
                    .collect(),
                radar: records(skills, "radar")
                    .iter()
                    .map(|r| RadarEntry {
                        label: text(r, "label"),
                        score: clamp_percent(int_or_default(r, "score", 0)),
                    })
                    .collect(),
                toolkit: text_list(skills, "toolkit"),
                soft_skills: text_list(skills, "soft_skills"),
            },
            education: records(v, "education")
                .iter()
                .map(|e| Education {
                    institution: text(e, "institution"),
                    duration: text(e, "duration"),
                    program: text(e, "program"),
                })
                .collect(),
            certifications: text_list(v, "certifications"),
            contact: ContactInfo {
                email: text(v, "email"),
                phone: text(v, "phone"),
                location: text(v, "location"),
                availability: text(v, "availability"),
            },
            social_links: records(v, "social_links")
                .iter()
                .map(|s| SocialLink {
                    label: opt_text(s, "label").unwrap_or_else(|| "Connect".to_string()),
                    url: opt_text(s, "url").unwrap_or_else(|| "#".to_string()),
                    icon: opt_text(s, "icon").unwrap_or_else(|| "🔗".to_string()),
                })
                .collect(),
            resume: ResumeInfo {
                file: text(resume, "file"),
                note: text(resume, "note"),
            },
            call_to_action: text(v, "call_to_action"),
        }
    }
}

// ============================================================================
// Achievements
// ============================================================================

/// An award, recognition, or milestone. Display order is source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Achievement {
    pub year: String,
    pub issuer: String,
    pub title: String,
}

impl Achievement {
    pub fn from_value(v: &Value) -> Self {
        Self {
            year: text(v, "year"),
            issuer: text(v, "issuer"),
            title: text(v, "title"),
        }
    }
}

// ============================================================================
// Projects
// ============================================================================

/// A project's technology tags.
///
/// Matching uses set semantics (duplicates collapse, order is irrelevant),
/// while display keeps the first-occurrence source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Technologies {
    ordered: Vec<String>,
    set: BTreeSet<String>,
}

impl Technologies {
    pub fn contains(&self, tag: &str) -> bool {
        self.set.contains(tag)
    }

    /// True when every tag in `tags` is carried by this project.
    pub fn is_superset_of(&self, tags: &BTreeSet<String>) -> bool {
        self.set.is_superset(tags)
    }

    /// Tags in source order, duplicates removed.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.set
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Technologies {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut techs = Technologies::default();
        for tag in iter {
            let tag = tag.into();
            if techs.set.insert(tag.clone()) {
                techs.ordered.push(tag);
            }
        }
        techs
    }
}

impl Serialize for Technologies {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ordered.serialize(serializer)
    }
}

/// A portfolio project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Project {
    pub name: String,
    pub role: String,
    pub year: String,
    pub summary: String,
    /// `None` when absent or blank. Uncategorized projects never match an
    /// active category filter.
    pub category: Option<String>,
    pub technologies: Technologies,
    pub status: String,
    /// Raw coerced maturity; see [`Project::progress`] for the display value.
    pub maturity: i64,
    pub impact: String,
    pub highlights: Vec<String>,
    /// `label → url`, source order preserved.
    pub links: Vec<(String, String)>,
}

impl Project {
    pub fn from_value(v: &Value) -> Self {
        Self {
            name: text(v, "name"),
            role: text(v, "role"),
            year: text(v, "year"),
            summary: text(v, "summary"),
            category: opt_text(v, "category"),
            technologies: text_list(v, "technologies").into_iter().collect(),
            status: text(v, "status"),
            maturity: int_or_default(v, "maturity", 0),
            impact: text(v, "impact"),
            highlights: text_list(v, "highlights"),
            links: pairs(v, "links"),
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNTITLED_PROJECT
        } else {
            &self.name
        }
    }

    /// Maturity as a progress percentage, clamped to `0..=100`.
    pub fn progress(&self) -> u8 {
        clamp_percent(self.maturity)
    }

    /// Text searched by the gallery's free-text filter: name, summary, and
    /// every highlight, space-separated.
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.name, self.summary, self.highlights.join(" "))
    }
}

/// Build one record per item of a sequence document. Items that are not
/// mappings still produce a fully defaulted record.
pub fn records_from_list<T>(value: &Value, build: impl Fn(&Value) -> T) -> Vec<T> {
    value
        .as_sequence()
        .map(|items| items.iter().map(build).collect())
        .unwrap_or_default()
}

fn clamp_percent(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

fn dedup_ordered(items: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn empty_profile_is_fully_defaulted() {
        let profile = Profile::from_value(&doc("{}"));
        assert_eq!(profile, Profile::default());
        assert_eq!(Profile::from_value(&Value::Null), Profile::default());
    }

    #[test]
    fn profile_reads_nested_sections() {
        let profile = Profile::from_value(&doc(
            r#"
tagline: Builder
focus_areas: [AI, Web, AI]
email: me@example.com
location: Manila
leadership:
  categories:
    - name: Community
      items:
        - role: Lead
          organization: GDG
skills:
  radar:
    - {label: Python, score: 90}
    - {label: Rust, score: "abc"}
    - {label: Go, score: 150}
resume: {file: cv.pdf}
"#,
        ));
        assert_eq!(profile.tagline, "Builder");
        assert_eq!(profile.focus_areas, vec!["AI", "Web"]);
        assert_eq!(profile.contact.email, "me@example.com");
        assert_eq!(profile.contact.location, "Manila");
        assert_eq!(profile.leadership[0].name, "Community");
        assert_eq!(profile.leadership[0].roles[0].organization, "GDG");
        let scores: Vec<u8> = profile.skills.radar.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![90, 0, 100]);
        assert!(profile.skills.has_scores());
        assert_eq!(profile.resume.file, "cv.pdf");
        assert_eq!(profile.resume.note, "");
    }

    #[test]
    fn social_links_fill_display_defaults() {
        let profile = Profile::from_value(&doc("social_links: [{url: https://x}]"));
        let link = &profile.social_links[0];
        assert_eq!(link.label, "Connect");
        assert_eq!(link.url, "https://x");
        assert_eq!(link.icon, "🔗");
    }

    #[test]
    fn experience_end_defaults_to_present() {
        let profile = Profile::from_value(&doc("experience: [{company: Acme}]"));
        assert_eq!(profile.experience[0].end_label(), "Present");
    }

    #[test]
    fn achievement_year_accepts_numbers() {
        let a = Achievement::from_value(&doc("{year: 2024, issuer: Devpost, title: Winner}"));
        assert_eq!(a.year, "2024");
        assert_eq!(a.title, "Winner");
    }

    #[test]
    fn project_technologies_collapse_duplicates() {
        let p = Project::from_value(&doc("technologies: [Python, Rust, Python]"));
        assert_eq!(p.technologies.len(), 2);
        assert_eq!(p.technologies.iter().collect::<Vec<_>>(), vec!["Python", "Rust"]);
        assert!(p.technologies.contains("Rust"));
    }

    #[test]
    fn project_maturity_coerces_and_clamps() {
        let bad = Project::from_value(&doc("maturity: abc"));
        assert_eq!(bad.maturity, 0);
        assert_eq!(bad.progress(), 0);

        let high = Project::from_value(&doc("maturity: 150"));
        assert_eq!(high.progress(), 100);

        let text = Project::from_value(&doc("maturity: '65'"));
        assert_eq!(text.progress(), 65);

        let negative = Project::from_value(&doc("maturity: -5"));
        assert_eq!(negative.progress(), 0);
    }

    #[test]
    fn project_blank_category_is_none() {
        assert_eq!(Project::from_value(&doc("category: ''")).category, None);
        assert_eq!(Project::from_value(&doc("{}")).category, None);
        assert_eq!(
            Project::from_value(&doc("category: ML")).category.as_deref(),
            Some("ML")
        );
    }

    #[test]
    fn project_ignores_unknown_fields() {
        let p = Project::from_value(&doc("name: A\nfuture_field: {nested: true}"));
        assert_eq!(p.name, "A");
    }

    #[test]
    fn untitled_project_display_name() {
        assert_eq!(Project::default().display_name(), UNTITLED_PROJECT);
    }

    #[test]
    fn search_haystack_joins_name_summary_highlights() {
        let p = Project::from_value(&doc(
            "name: Relief\nsummary: Maps aid\nhighlights: [Fast, Open]",
        ));
        assert_eq!(p.search_haystack(), "Relief Maps aid Fast Open");
    }

    #[test]
    fn records_from_list_on_non_sequence_is_empty() {
        let items = records_from_list(&doc("{a: 1}"), Achievement::from_value);
        assert!(items.is_empty());
    }
}
