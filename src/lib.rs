//! # Simple Folio
//!
//! A minimal static site generator for personal portfolios. A profile, a list
//! of achievements, and a list of projects live in plain YAML; the generator
//! turns them into an About page, a filterable project gallery, and a
//! local-only contact form.
//!
//! # Architecture: Load → Filter → Render
//!
//! ```text
//! 1. Load      content/data/*.yaml  →  Content        (normalized, typed records)
//! 2. Filter    Content + selection  →  visible projects + facets
//! 3. Render    Content + config     →  dist/           (static HTML)
//! ```
//!
//! Loading happens once per run. Filtering is a pure function with no hidden
//! state, so the same engine drives the generated facet pages and the
//! `filter` CLI command.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Content Loader: reads the three YAML sources through a write-once cache |
//! | [`fields`] | Total field accessors: every missing or mistyped field resolves to a default |
//! | [`model`] | Typed records (`Profile`, `Achievement`, `Project`) built from YAML once |
//! | [`gallery`] | Gallery Filter Engine: facet derivation and category/tag/search filtering |
//! | [`contact`] | Contact form validation, local confirmation only |
//! | [`generate`] | Renders the HTML site with Maud |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`naming`] | Slugs for facet pages and link label casing |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Normalize Once, Never Check Again
//!
//! Content is hand-edited YAML with no enforced schema. Instead of probing for
//! optional keys at every use site, each record is built once through the
//! total accessors in [`fields`], and everything downstream works with plain
//! owned data whose defaults are documented on the type.
//!
//! ## Set Semantics for Technologies
//!
//! A project's technologies are a set for matching (duplicates collapse,
//! order is irrelevant) but keep their source order for display. Tag filters
//! require a project to carry **every** selected tag.
//!
//! ## Facet Pages Instead of a Runtime
//!
//! The published site is plain HTML. Each category and technology gets its own
//! pre-filtered page, so filtering works with JavaScript disabled; a small
//! inline script adds free-text search on top.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a compile error and every interpolated content string is auto-escaped.

pub mod config;
pub mod contact;
pub mod content;
pub mod fields;
pub mod gallery;
pub mod generate;
pub mod model;
pub mod naming;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
