use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unextend_cli::Commands;
use unextend_cli::OutputFormat;
use unextend_cli::UnextendCli;
use unextend_core::AnyEmptyResult;
use unextend_core::config::UnextendConfig;
use unextend_core::loader::locate_parent;
use unextend_core::loader::read_template;
use unextend_core::parse;
use unextend_core::unextend;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = UnextendCli::parse();

	// Respect NO_COLOR env var, the --no-color flag and non-terminal output.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stderr).is_some();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Flatten {
			child,
			parent,
			output,
			in_place,
			diff,
		}) => run_flatten(&args, child, parent.as_deref(), output.as_deref(), *in_place, *diff),
		Some(Commands::Blocks { file, format }) => run_blocks(file, *format),
		None => {
			eprintln!("No subcommand specified. Run `unextend --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<unextend_core::UnextendError>() {
			Ok(error) => {
				let report: miette::Report = (*error).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init()
		.ok();
}

fn resolve_root(args: &UnextendCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run_flatten(
	args: &UnextendCli,
	child: &Path,
	parent: Option<&Path>,
	output: Option<&Path>,
	in_place: bool,
	diff: bool,
) -> AnyEmptyResult {
	let child_source = read_template(child)?;

	let parent_path = if let Some(parent) = parent {
		parent.to_path_buf()
	} else {
		let root = resolve_root(args);
		let config = UnextendConfig::load(&root)?.unwrap_or_default();
		locate_parent(child, &child_source, &config.template_dirs(&root))?
	};
	debug!(child = %child.display(), parent = %parent_path.display(), "flattening");

	let parent_source = read_template(&parent_path)?;
	let flattened = unextend(&child_source, &parent_source)?;

	if diff {
		print_diff(&child_source, &flattened);
		return Ok(());
	}

	if in_place {
		std::fs::write(child, &flattened)?;
		if args.verbose {
			eprintln!("Rewrote {}", child.display());
		}
	} else if let Some(output) = output {
		std::fs::write(output, &flattened)?;
		if args.verbose {
			eprintln!("Wrote {}", output.display());
		}
	} else {
		print!("{flattened}");
	}

	Ok(())
}

fn run_blocks(file: &Path, format: OutputFormat) -> AnyEmptyResult {
	let source = read_template(file)?;
	let nodes = parse(&source)?;
	let blocks = nodes.walk_blocks();

	match format {
		OutputFormat::Json => {
			let entries: Vec<serde_json::Value> = blocks
				.iter()
				.map(|(depth, block)| {
					serde_json::json!({
						"name": block.name,
						"line": block.line,
						"depth": depth,
					})
				})
				.collect();
			let output = serde_json::json!({
				"file": file.display().to_string(),
				"blocks": entries,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			if blocks.is_empty() {
				println!("No blocks found.");
				return Ok(());
			}

			println!("{}", colored!("Blocks:", bold));
			for (depth, block) in &blocks {
				let indent = "  ".repeat(depth + 1);
				println!("{indent}{} (line {})", block.name, block.line);
			}

			let top_level = blocks.iter().filter(|(depth, _)| *depth == 0).count();
			println!(
				"\n{} block(s), {top_level} overridable at the top level",
				blocks.len()
			);
		}
	}

	Ok(())
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				print!("{}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				print!("{}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				print!(" {change}");
			}
		}
	}
}
