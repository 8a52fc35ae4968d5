//! `unextend_core` is the core library for `unextend`, a tool that flattens a
//! child template into the parent template it extends. Every
//! `{% block %}` the child overrides is inlined into the parent, giving one
//! standalone template with the same output. This helps when refactoring
//! templates that no longer usefully extend their parents.
//!
//! The transform works on Django and Jinja style templates. It is a
//! structural rewrite, not a renderer: variables, filters and tags are never
//! evaluated, and everything outside of the overridden blocks is reproduced
//! as written.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Template source
//!   → Lexer (splits source into text, variable, tag and comment tokens)
//!   → Parser (builds a node tree, giving structure only to {% block %} tags)
//!   → Substitution (moves child block bodies into matching parent blocks)
//!   → Render (writes the parent tree back out as template source)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `unextend.toml`, including the
//!   directories searched for parent templates.
//! - [`loader`]: Finding the parent named by a child's `{% extends %}` tag and
//!   reading both templates from disk.
//!
//! ## Key Types
//!
//! - [`NodeList`]: An ordered list of parsed [`Node`]s.
//! - [`Block`]: A named `{% block %}` region and its content.
//! - [`UnextendError`]: Every way flattening can fail.
//!
//! ## Limitations
//!
//! Children using `{{ block.super }}` or `{% load %}` are rejected. Only
//! top-level blocks are matched between parent and child, and only a single
//! level of inheritance is flattened per call.
//!
//! ## Quick Start
//!
//! ```rust
//! use unextend_core::unextend;
//!
//! let parent = "<title>{% block title %}Home{% endblock %}</title>";
//! let child = "{% extends \"base.html\" %}{% block title %}About{% endblock %}";
//!
//! let flattened = unextend(child, parent).unwrap();
//! assert_eq!(
//! 	flattened,
//! 	"<title>{% block title %}About{% endblock title %}</title>"
//! );
//! ```

pub use engine::*;
pub use error::*;
pub use node::*;
pub use parser::*;

pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
pub(crate) mod lexer;
pub mod loader;
mod node;
mod parser;
pub(crate) mod tokens;

#[cfg(test)]
mod __fixtures;
