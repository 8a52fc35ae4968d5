use logos::Logos;

use crate::tokens::Token;
use crate::tokens::TokenKind;

/// Raw tokens produced by logos. Only tag openers are significant; the
/// matching closer is searched for directly in the source so that closers
/// overlapping other delimiters (`{% a {%}`) are still found.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
	#[token("{%")]
	BlockOpen,
	#[token("{{")]
	VariableOpen,
	#[token("{#")]
	CommentOpen,
	#[token("{")]
	Brace,
	#[regex(r"[^{]+")]
	Text,
}

impl RawToken {
	fn tag_kind(self) -> Option<TokenKind> {
		match self {
			Self::BlockOpen => Some(TokenKind::Block),
			Self::VariableOpen => Some(TokenKind::Variable),
			Self::CommentOpen => Some(TokenKind::Comment),
			Self::Brace | Self::Text => None,
		}
	}
}

fn closing_delimiter(kind: TokenKind) -> &'static str {
	match kind {
		TokenKind::Block => "%}",
		TokenKind::Variable => "}}",
		TokenKind::Comment => "#}",
		TokenKind::Text => "",
	}
}

/// Walks the source, turning every tag into a token and everything between
/// tags into text tokens.
struct TokenWalker<'a> {
	source: &'a str,
	/// Byte offset where the pending text run starts.
	text_start: usize,
	/// Line number at `line_offset`.
	line: usize,
	/// Offset up to which newlines have been counted into `line`.
	line_offset: usize,
	/// The end marker of an open `{% verbatim %}` section, e.g.
	/// `endverbatim`.
	verbatim: Option<String>,
	tokens: Vec<Token>,
}

impl<'a> TokenWalker<'a> {
	fn new(source: &'a str) -> Self {
		Self {
			source,
			text_start: 0,
			line: 1,
			line_offset: 0,
			verbatim: None,
			tokens: vec![],
		}
	}

	/// The line number of `offset`. Offsets must be passed in increasing
	/// order.
	fn line_at(&mut self, offset: usize) -> usize {
		self.line += self.source[self.line_offset..offset].matches('\n').count();
		self.line_offset = offset;
		self.line
	}

	/// Flush the pending text run up to `end` as a single text token.
	fn push_text(&mut self, end: usize) {
		if self.text_start >= end {
			return;
		}

		let line = self.line_at(self.text_start);
		let text = &self.source[self.text_start..end];
		self.tokens.push(Token::new(TokenKind::Text, text, line));
		self.text_start = end;
	}

	/// Find the end of the tag opened at `start`. A tag must close on the
	/// same line it was opened on, so only the rest of that line is searched.
	fn find_tag_end(&self, start: usize, kind: TokenKind) -> Option<usize> {
		let inner_start = start + 2;
		let rest = &self.source[inner_start..];
		let line_end = rest.find('\n').unwrap_or(rest.len());
		let close = rest[..line_end].find(closing_delimiter(kind))?;

		Some(inner_start + close + 2)
	}

	fn push_tag(&mut self, kind: TokenKind, start: usize, end: usize) {
		let source = self.source;
		let contents = source[start + 2..end - 2].trim();

		if let Some(marker) = self.verbatim.as_deref() {
			// Everything inside a verbatim section is text until its end tag,
			// which must be a block tag.
			if kind != TokenKind::Block || marker != contents {
				return;
			}
			self.verbatim = None;
		} else if kind == TokenKind::Block
			&& (contents == "verbatim" || contents.starts_with("verbatim "))
		{
			self.verbatim = Some(format!("end{contents}"));
		}

		self.push_text(start);
		let line = self.line_at(start);
		self.tokens.push(Token::new(kind, contents, line));
		self.text_start = end;
	}

	fn process(&mut self) {
		let source = self.source;
		let mut offset = 0;

		'scan: while offset < source.len() {
			let mut lexer = RawToken::lexer(&source[offset..]);

			while let Some(result) = lexer.next() {
				let Some(kind) = result.ok().and_then(RawToken::tag_kind) else {
					continue;
				};

				let start = offset + lexer.span().start;
				let Some(end) = self.find_tag_end(start, kind) else {
					// Not a tag after all. Rescan from the character after the
					// opening brace, which may itself start a tag (`{{% x %}`).
					offset = start + 1;
					continue 'scan;
				};

				self.push_tag(kind, start, end);
				let consumed = offset + lexer.span().end;
				lexer.bump(end - consumed);
			}

			break;
		}

		self.push_text(source.len());
	}
}

/// Split template source into text, variable, block tag and comment tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
	let mut walker = TokenWalker::new(source);
	walker.process();
	walker.tokens
}
