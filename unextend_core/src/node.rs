use std::fmt::Display;

use derive_more::Deref;
use derive_more::DerefMut;

/// A node in a parsed template tree. Each variant renders back to the
/// template source it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// Raw text, rendered unchanged.
	Text(String),
	/// A variable expression, rendered as `{{ expression }}`. Filters are
	/// kept as written and never evaluated.
	Variable(String),
	/// A comment, rendered as `{# comment #}`.
	Comment(String),
	/// Any tag other than `block`, rendered as `{% contents %}`.
	Tag(String),
	/// A named, overridable `{% block %}` region.
	Block(Block),
}

impl Node {
	/// Returns the block if this node is one.
	pub fn as_block(&self) -> Option<&Block> {
		match self {
			Self::Block(block) => Some(block),
			_ => None,
		}
	}
}

impl Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Text(content) => write!(f, "{content}"),
			Self::Variable(expression) => write!(f, "{{{{ {expression} }}}}"),
			Self::Comment(content) => write!(f, "{{# {content} #}}"),
			Self::Tag(contents) => write!(f, "{{% {contents} %}}"),
			Self::Block(block) => write!(f, "{block}"),
		}
	}
}

/// A `{% block name %}...{% endblock %}` region.
///
/// The closing tag is always rendered in its qualified form,
/// `{% endblock name %}`, regardless of how it was written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
	/// The block name used to match overrides between parent and child.
	pub name: String,
	/// 1-indexed line of the opening tag.
	pub line: usize,
	/// The content between the opening and closing tags.
	pub nodes: NodeList,
}

impl Display for Block {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{{% block {name} %}}{nodes}{{% endblock {name} %}}",
			name = self.name,
			nodes = self.nodes
		)
	}
}

/// An ordered list of nodes. This is what parsing produces and what gets
/// swapped between parent and child blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct NodeList(
	#[deref]
	#[deref_mut]
	Vec<Node>,
);

impl NodeList {
	/// Render the nodes back to template source.
	pub fn render(&self) -> String {
		self.to_string()
	}

	/// The blocks that are direct children of this list.
	pub fn blocks(&self) -> impl Iterator<Item = &Block> {
		self.iter().filter_map(Node::as_block)
	}

	/// Every block in the tree paired with its nesting depth, in source
	/// order. Top-level blocks have depth `0`.
	pub fn walk_blocks(&self) -> Vec<(usize, &Block)> {
		let mut blocks = Vec::new();
		collect_blocks(self, 0, &mut blocks);
		blocks
	}
}

fn collect_blocks<'a>(nodes: &'a NodeList, depth: usize, blocks: &mut Vec<(usize, &'a Block)>) {
	for block in nodes.blocks() {
		blocks.push((depth, block));
		collect_blocks(&block.nodes, depth + 1, blocks);
	}
}

impl Display for NodeList {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for node in self.iter() {
			write!(f, "{node}")?;
		}

		Ok(())
	}
}

impl From<Vec<Node>> for NodeList {
	fn from(nodes: Vec<Node>) -> Self {
		Self(nodes)
	}
}

impl FromIterator<Node> for NodeList {
	fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for NodeList {
	type IntoIter = std::vec::IntoIter<Node>;
	type Item = Node;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
