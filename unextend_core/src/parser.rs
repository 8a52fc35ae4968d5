use std::collections::HashSet;

use tracing::debug;
use tracing::trace;

use super::UnextendError;
use super::UnextendResult;
use crate::Block;
use crate::Node;
use crate::NodeList;
use crate::lexer::tokenize;
use crate::tokens::Token;
use crate::tokens::TokenKind;
use crate::tokens::TokenStream;

/// Builds a node from the tag token that opened it. The handler may consume
/// further tokens from the parser, e.g. a block body and its end tag.
type TagHandler = fn(&mut Parser, Token) -> UnextendResult<Node>;

/// Tags with structure. Every other tag is kept as an opaque [`Node::Tag`].
const TAG_HANDLERS: &[(&str, TagHandler)] = &[("block", Parser::parse_block)];

fn tag_handler(command: &str) -> TagHandler {
	TAG_HANDLERS
		.iter()
		.find(|(name, _)| *name == command)
		.map_or(Parser::parse_opaque as TagHandler, |(_, handler)| *handler)
}

/// Parse template source into a node tree.
///
/// Only `{% block %}` tags are given structure. Text, variables, comments
/// and every other tag become leaves that render back to their source.
pub fn parse(source: impl AsRef<str>) -> UnextendResult<NodeList> {
	let tokens = tokenize(source.as_ref());
	let mut parser = Parser::new(tokens);
	let nodes = parser.parse(&[])?;
	debug!(blocks = parser.block_names().len(), "parsed template");

	Ok(nodes)
}

/// A recursive descent parser over a lexed token stream.
///
/// Block names are tracked for the lifetime of the parser, so a name may
/// appear at most once in the whole template regardless of nesting.
pub(crate) struct Parser {
	tokens: TokenStream,
	/// Open tags with the line they were opened on, kept for error messages.
	command_stack: Vec<(String, usize)>,
	/// Names of every block seen so far.
	loaded_blocks: HashSet<String>,
}

impl Parser {
	pub(crate) fn new(tokens: Vec<Token>) -> Self {
		Self {
			tokens: tokens.into(),
			command_stack: vec![],
			loaded_blocks: HashSet::new(),
		}
	}

	/// The block names recorded so far.
	pub(crate) fn block_names(&self) -> &HashSet<String> {
		&self.loaded_blocks
	}

	/// Consume tokens until the stream ends or a tag whose command is in
	/// `parse_until` is reached. That tag is pushed back onto the stream so
	/// the caller can inspect it.
	pub(crate) fn parse(&mut self, parse_until: &[&str]) -> UnextendResult<NodeList> {
		let mut nodes = NodeList::default();

		while let Some(token) = self.tokens.next_token() {
			match token.kind {
				TokenKind::Text => nodes.push(Node::Text(token.contents)),
				TokenKind::Variable => nodes.push(Node::Variable(token.contents)),
				TokenKind::Comment => nodes.push(Node::Comment(token.contents)),
				TokenKind::Block => {
					let Some(command) = token.command().map(ToString::to_string) else {
						return Err(UnextendError::EmptyTag { line: token.line });
					};

					if parse_until.contains(&command.as_str()) {
						self.tokens.prepend_token(token);
						return Ok(nodes);
					}

					trace!(command = %command, line = token.line, "parsing tag");
					let handler = tag_handler(&command);
					self.command_stack.push((command, token.line));
					nodes.push(handler(self, token)?);
					self.command_stack.pop();
				}
			}
		}

		if !parse_until.is_empty() {
			return Err(self.unclosed_block_tag(parse_until));
		}

		Ok(nodes)
	}

	fn unclosed_block_tag(&self, parse_until: &[&str]) -> UnextendError {
		let (command, line) = self.command_stack.last().cloned().unwrap_or_default();

		UnextendError::UnclosedBlock {
			command,
			line,
			expected: parse_until.join(", "),
		}
	}

	/// `{% block name %}...{% endblock %}`
	fn parse_block(&mut self, token: Token) -> UnextendResult<Node> {
		let bits: Vec<&str> = token.contents.split_whitespace().collect();
		let &[_, name] = bits.as_slice() else {
			return Err(UnextendError::TagSyntax {
				tag: bits.first().copied().unwrap_or("block").to_string(),
				line: token.line,
			});
		};

		if !self.loaded_blocks.insert(name.to_string()) {
			return Err(UnextendError::DuplicateBlockName {
				name: name.to_string(),
				line: token.line,
			});
		}

		let nodes = self.parse(&["endblock"])?;
		let Some(endblock) = self.tokens.next_token() else {
			return Err(self.unclosed_block_tag(&["endblock"]));
		};

		let qualified = format!("endblock {name}");
		if endblock.contents != "endblock" && endblock.contents != qualified {
			return Err(UnextendError::InvalidEndTag {
				found: endblock.contents,
				expected: format!("'endblock' or '{qualified}'"),
				line: endblock.line,
			});
		}

		Ok(Node::Block(Block {
			name: name.to_string(),
			line: token.line,
			nodes,
		}))
	}

	/// Any tag without structure is kept exactly as written.
	#[allow(clippy::unnecessary_wraps, clippy::unused_self)]
	fn parse_opaque(&mut self, token: Token) -> UnextendResult<Node> {
		Ok(Node::Tag(token.contents))
	}
}
