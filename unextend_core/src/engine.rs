use std::collections::HashMap;

use tracing::debug;

use crate::Node;
use crate::NodeList;
use crate::UnextendError;
use crate::UnextendResult;
use crate::parse;

/// A child using `{{ block.super }}` depends on the parent's version of the
/// block, which is replaced during substitution.
pub const BLOCK_SUPER: &str = "{{ block.super";

/// Tag libraries loaded by the child are unknown to the parser.
pub const LOAD_TAG: &str = "{% load";

/// Return the parent template with every `{% block %}` overridden by the
/// child replaced by the child's content.
///
/// This flattens a child template that no longer usefully extends its parent
/// into a standalone template. Both sources are parsed independently; only
/// top-level blocks are matched, and the parent's structure, text and tags
/// outside of overridden blocks are reproduced as written.
pub fn unextend(child_source: &str, parent_source: &str) -> UnextendResult<String> {
	if child_source.contains(BLOCK_SUPER) {
		return Err(UnextendError::UnsupportedConstruct {
			construct: "{{ block.super }}".to_string(),
		});
	}

	if child_source.contains(LOAD_TAG) {
		return Err(UnextendError::UnsupportedConstruct {
			construct: "{% load %}".to_string(),
		});
	}

	let child = parse(child_source)?;
	let mut parent = parse(parent_source)?;
	let replaced = substitute(&mut parent, child);
	debug!(?replaced, "substituted child blocks into parent");

	Ok(render(&parent))
}

/// Move the body of each top-level child block into the top-level parent
/// block with the same name. Returns the names of the replaced blocks in
/// parent order.
///
/// Parent blocks without an override keep their content and child blocks
/// without a parent counterpart are dropped. Nested blocks are never
/// matched on their own; they travel with the body of their top-level block.
pub fn substitute(parent: &mut NodeList, child: NodeList) -> Vec<String> {
	let mut overrides: HashMap<String, NodeList> = child
		.into_iter()
		.filter_map(|node| {
			match node {
				Node::Block(block) => Some((block.name, block.nodes)),
				_ => None,
			}
		})
		.collect();
	let mut replaced = Vec::new();

	for node in parent.iter_mut() {
		let Node::Block(block) = node else {
			continue;
		};

		if let Some(nodes) = overrides.remove(&block.name) {
			block.nodes = nodes;
			replaced.push(block.name.clone());
		}
	}

	if !overrides.is_empty() {
		let mut unmatched: Vec<_> = overrides.into_keys().collect();
		unmatched.sort();
		debug!(?unmatched, "child blocks without a parent block");
	}

	replaced
}

/// Render a node tree back to template source.
pub fn render(nodes: &NodeList) -> String {
	nodes.render()
}
