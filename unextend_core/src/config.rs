use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::UnextendError;
use crate::UnextendResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["unextend.toml", ".unextend.toml", ".config/unextend.toml"];

/// Configuration loaded from an `unextend.toml` file.
///
/// ```toml
/// [templates]
/// paths = ["templates", "shared/templates"]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct UnextendConfig {
	/// Where to look for parent templates named by `{% extends %}`.
	#[serde(default)]
	pub templates: TemplatesConfig,
}

/// Configuration for parent template search paths.
#[derive(Debug, Default, Deserialize)]
pub struct TemplatesConfig {
	/// Directories searched in order for the template named by a child's
	/// `{% extends %}` tag. These are relative to the project root.
	#[serde(default)]
	pub paths: Vec<PathBuf>,
}

impl UnextendConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if the file does not exist.
	pub fn load(root: &Path) -> UnextendResult<Option<UnextendConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: UnextendConfig =
			toml::from_str(&content).map_err(|e| UnextendError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// The template search paths resolved against `root`.
	pub fn template_dirs(&self, root: &Path) -> Vec<PathBuf> {
		self.templates
			.paths
			.iter()
			.map(|path| root.join(path))
			.collect()
	}
}
