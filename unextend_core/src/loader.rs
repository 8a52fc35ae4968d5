//! Locating and reading the templates of a parent/child pair.
//!
//! The core transform in [`unextend`](crate::unextend) only works on source
//! strings. This module connects it to the filesystem: it finds the parent a
//! child extends and reads both files.

use std::path::Path;
use std::path::PathBuf;

use snailquote::unescape;
use tracing::debug;

use crate::UnextendError;
use crate::UnextendResult;
use crate::lexer::tokenize;
use crate::tokens::TokenKind;
use crate::unextend;

/// The template name given to the first `{% extends %}` tag in `source`.
///
/// Returns `None` when there is no `extends` tag or its argument is not a
/// string literal (e.g. `{% extends parent_var %}`).
pub fn extends_target(source: &str) -> Option<String> {
	let token = tokenize(source)
		.into_iter()
		.find(|token| token.kind == TokenKind::Block && token.command() == Some("extends"))?;
	let argument = token.contents["extends".len()..].trim();

	let quote = argument.chars().next().filter(|ch| matches!(ch, '"' | '\''))?;
	if argument.len() < 2 || !argument.ends_with(quote) {
		return None;
	}

	let inner = &argument[1..argument.len() - 1];
	if inner.contains('\\') {
		unescape(inner).ok()
	} else {
		Some(inner.to_string())
	}
}

/// Find the file for the parent template `name`.
///
/// Each of `search_paths` is tried in order, followed by the directory of the
/// child template.
pub fn resolve_parent(
	child_path: &Path,
	name: &str,
	search_paths: &[PathBuf],
) -> UnextendResult<PathBuf> {
	let child_dir = child_path.parent().unwrap_or_else(|| Path::new("."));
	let candidates: Vec<PathBuf> = search_paths
		.iter()
		.map(PathBuf::as_path)
		.chain(std::iter::once(child_dir))
		.map(|dir| dir.join(name))
		.collect();

	if let Some(found) = candidates.iter().find(|path| path.is_file()) {
		debug!(parent = %found.display(), "resolved parent template");
		return Ok(found.clone());
	}

	Err(UnextendError::ParentNotFound {
		name: name.to_string(),
		searched: candidates
			.iter()
			.map(|path| path.display().to_string())
			.collect::<Vec<_>>()
			.join(", "),
	})
}

/// Find the parent of the child at `child_path` using its `{% extends %}`
/// tag.
pub fn locate_parent(
	child_path: &Path,
	child_source: &str,
	search_paths: &[PathBuf],
) -> UnextendResult<PathBuf> {
	let Some(name) = extends_target(child_source) else {
		return Err(UnextendError::MissingParent {
			child: child_path.display().to_string(),
		});
	};

	resolve_parent(child_path, &name, search_paths)
}

/// Read a template from disk. The error names the file that couldn't be read.
pub fn read_template(path: &Path) -> UnextendResult<String> {
	std::fs::read_to_string(path).map_err(|source| {
		UnextendError::ReadTemplate {
			path: path.display().to_string(),
			source,
		}
	})
}

/// Read a child and parent template from disk and flatten them.
pub fn unextend_files(child_path: &Path, parent_path: &Path) -> UnextendResult<String> {
	let child_source = read_template(child_path)?;
	let parent_source = read_template(parent_path)?;

	unextend(&child_source, &parent_source)
}
