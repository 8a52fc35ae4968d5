use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Flatten a child template into the parent template it extends.",
	long_about = "unextend rewrites a Django or Jinja style template that uses `{% extends %}` \
	              into a standalone template.\n\nThe parent template is reproduced as written, \
	              with every `{% block %}` the child overrides replaced by the child's content. \
	              Variables, filters and other tags are kept verbatim, never evaluated.\n\nQuick \
	              start:\n  unextend flatten page.html            Print the flattened template\n  \
	              unextend flatten page.html --in-place Rewrite the child in place\n  unextend \
	              blocks base.html               List the blocks a template defines"
)]
pub struct UnextendCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory, used to find `unextend.toml`.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Inline a child template's block overrides into its parent.
	///
	/// The parent is taken from `--parent` or, when omitted, from the child's
	/// `{% extends "..." %}` tag. The named template is searched for in the
	/// `[templates] paths` directories from `unextend.toml` and then next to
	/// the child.
	///
	/// Children using `{{ block.super }}` or `{% load %}` are rejected.
	Flatten {
		/// The child template to flatten.
		child: PathBuf,

		/// The parent template. Defaults to the template named by the child's
		/// `{% extends %}` tag.
		#[arg(long)]
		parent: Option<PathBuf>,

		/// Write the flattened template to this file instead of stdout.
		#[arg(long, short, conflicts_with = "in_place")]
		output: Option<PathBuf>,

		/// Overwrite the child template with the flattened result.
		#[arg(long, default_value_t = false)]
		in_place: bool,

		/// Show a diff between the child and the flattened template instead of
		/// writing anything.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// List the blocks defined by a template.
	///
	/// Prints every `{% block %}` with its line number, indented by nesting
	/// depth. Only top-level blocks can be overridden when flattening.
	Blocks {
		/// The template to inspect.
		file: PathBuf,

		/// Output format. Use `text` for human-readable output or `json` for
		/// programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
