use std::collections::VecDeque;
use std::fmt::Display;

use derive_more::Deref;
use derive_more::DerefMut;

/// The kind of a lexed template token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	/// Raw text outside of any tag delimiter.
	Text,
	/// `{{ expression }}`
	Variable,
	/// `{% tag arguments %}`
	Block,
	/// `{# comment #}`
	Comment,
}

/// A single token produced by the lexer.
///
/// For tags, `contents` holds the text between the delimiters with the
/// surrounding whitespace removed. For text it holds the raw source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	pub contents: String,
	/// 1-indexed line on which the token starts.
	pub line: usize,
}

impl Token {
	pub fn new(kind: TokenKind, contents: impl Into<String>, line: usize) -> Self {
		Self {
			kind,
			contents: contents.into(),
			line,
		}
	}

	/// The leading word of a tag, e.g. `block` for `{% block content %}`.
	pub fn command(&self) -> Option<&str> {
		self.contents.split_whitespace().next()
	}
}

impl Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			TokenKind::Text => write!(f, "{}", self.contents),
			TokenKind::Variable => write!(f, "{{{{ {} }}}}", self.contents),
			TokenKind::Block => write!(f, "{{% {} %}}", self.contents),
			TokenKind::Comment => write!(f, "{{# {} #}}", self.contents),
		}
	}
}

/// Tokens waiting to be consumed by the parser, front first. A token taken
/// off the front can be pushed back so the caller can inspect it.
#[derive(Debug, Default, Deref, DerefMut)]
pub struct TokenStream(
	#[deref]
	#[deref_mut]
	VecDeque<Token>,
);

impl TokenStream {
	pub fn next_token(&mut self) -> Option<Token> {
		self.pop_front()
	}

	pub fn prepend_token(&mut self, token: Token) {
		self.push_front(token);
	}
}

impl From<Vec<Token>> for TokenStream {
	fn from(tokens: Vec<Token>) -> Self {
		Self(tokens.into())
	}
}
