//! Project gallery filtering.
//!
//! A stateless engine over the project list: facets (the filter choices) are
//! derived from the data itself, and the visible subset is a pure function of
//! the projects and a [`FilterSelection`].
//!
//! ## Matching Rules
//!
//! A project is visible iff every active predicate holds. A predicate whose
//! selection is empty is inactive and always holds.
//!
//! | Predicate | Active when | Holds when |
//! |-----------|-------------|------------|
//! | category | any category selected | project category is one of them (uncategorized never matches) |
//! | tags | any tag selected | project carries **every** selected tag |
//! | search | search term non-empty | term is a case-insensitive substring of name + summary + highlights |
//!
//! Tag matching is AND, not OR: selecting `Python` and `TypeScript` shows
//! only projects built with both. Filtering removes projects but never
//! reorders them, so the visible list is always a subsequence of the input.

use crate::config::InitialSelection;
use crate::model::Project;
use serde::Serialize;
use std::collections::BTreeSet;

/// Filter choices derived from the project list, sorted and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

/// Collect the distinct categories and technology tags across all projects.
///
/// Uncategorized projects contribute no category. An empty project list
/// yields empty facets.
pub fn derive_facets(projects: &[Project]) -> Facets {
    let mut facets = Facets::default();
    for project in projects {
        if let Some(category) = &project.category {
            facets.categories.insert(category.clone());
        }
        facets
            .tags
            .extend(project.technologies.iter().map(str::to_string));
    }
    facets
}

/// A user's filter choices for one render pass. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    /// Raw search text; compared case-insensitively.
    pub search_term: String,
}

impl FilterSelection {
    /// Selection shown when the portfolio page first opens.
    pub fn initial(facets: &Facets, policy: InitialSelection) -> Self {
        match policy {
            InitialSelection::All => Self::default(),
            InitialSelection::FirstCategory => {
                let mut selection = Self::default();
                if let Some(first) = facets.categories.first() {
                    selection.categories.insert(first.clone());
                }
                selection
            }
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// True when no predicate is active, i.e. the filter is the identity.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.tags.is_empty() && self.search_term.is_empty()
    }

    /// Whether a single project passes every active predicate.
    pub fn matches(&self, project: &Project) -> bool {
        self.matcher().matches(project)
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            selection: self,
            needle: self.search_term.to_lowercase(),
        }
    }
}

/// A selection with its search term lowered once for a whole filter pass.
struct Matcher<'a> {
    selection: &'a FilterSelection,
    needle: String,
}

impl Matcher<'_> {
    fn matches(&self, project: &Project) -> bool {
        let selection = self.selection;

        if !selection.categories.is_empty() {
            match &project.category {
                Some(category) if selection.categories.contains(category) => {}
                _ => return false,
            }
        }

        if !selection.tags.is_empty() && !project.technologies.is_superset_of(&selection.tags) {
            return false;
        }

        if !self.needle.is_empty()
            && !project
                .search_haystack()
                .to_lowercase()
                .contains(&self.needle)
        {
            return false;
        }

        true
    }
}

/// The projects visible under `selection`, in source order.
pub fn filter<'a>(projects: &'a [Project], selection: &FilterSelection) -> Vec<&'a Project> {
    if selection.is_empty() {
        return projects.iter().collect();
    }
    let matcher = selection.matcher();
    projects.iter().filter(|p| matcher.matches(p)).collect()
}
