use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum UnextendError {
	#[error(transparent)]
	#[diagnostic(code(unextend::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read `{path}`: {source}")]
	#[diagnostic(code(unextend::read_template))]
	ReadTemplate {
		path: String,
		source: std::io::Error,
	},

	#[error("cannot unextend a template that uses {construct}")]
	#[diagnostic(
		code(unextend::unsupported_construct),
		help("inline the parent content by hand or remove `{construct}` from the child template")
	)]
	UnsupportedConstruct { construct: String },

	#[error("empty block tag on line {line}")]
	#[diagnostic(code(unextend::empty_tag))]
	EmptyTag { line: usize },

	#[error("'{tag}' tag takes only one argument (line {line})")]
	#[diagnostic(
		code(unextend::tag_syntax),
		help("write the tag as `{{% {tag} name %}}`")
	)]
	TagSyntax { tag: String, line: usize },

	#[error("'block' tag with name '{name}' appears more than once (line {line})")]
	#[diagnostic(
		code(unextend::duplicate_block),
		help("each block name must be unique within a template, at any nesting depth")
	)]
	DuplicateBlockName { name: String, line: usize },

	#[error("unclosed tag on line {line}: '{command}'. Looking for one of: {expected}")]
	#[diagnostic(code(unextend::unclosed_block))]
	UnclosedBlock {
		command: String,
		line: usize,
		expected: String,
	},

	#[error("invalid end tag on line {line}: '{found}', expected {expected}")]
	#[diagnostic(
		code(unextend::invalid_end_tag),
		help("close the block with `{{% endblock %}}` or `{{% endblock <name> %}}`")
	)]
	InvalidEndTag {
		found: String,
		expected: String,
		line: usize,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(unextend::config_parse),
		help("check that unextend.toml is valid TOML with an optional [templates] section")
	)]
	ConfigParse(String),

	#[error("no parent template given for `{child}`")]
	#[diagnostic(
		code(unextend::missing_parent),
		help("pass `--parent <path>` or add `{{% extends \"parent.html\" %}}` to the child template")
	)]
	MissingParent { child: String },

	#[error("parent template `{name}` not found (searched: {searched})")]
	#[diagnostic(
		code(unextend::parent_not_found),
		help("add the directory containing the parent to `[templates] paths` in unextend.toml")
	)]
	ParentNotFound { name: String, searched: String },
}

pub type UnextendResult<T> = Result<T, UnextendError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
