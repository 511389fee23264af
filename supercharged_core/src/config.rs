use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::SuperchargedError;
use crate::SuperchargedResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"supercharged.toml",
	".supercharged.toml",
	".config/supercharged.toml",
];

/// The mount name which is discovered without a name prefix or disk
/// qualifier.
pub const DEFAULT_MOUNT: &str = "default";

/// Default file extension of component templates (without the leading dot).
pub const DEFAULT_EXTENSION: &str = "edge";

/// Default directory, relative to every mount, that holds component
/// templates.
pub const DEFAULT_COMPONENTS_DIRECTORY: &str = "components";

/// Default name of the generic tag that claimed component tags are compiled
/// as.
pub const DEFAULT_COMPONENT_TAG: &str = "component";

/// Configuration loaded from a `supercharged.toml` file.
///
/// ```toml
/// [mounts]
/// default = "views"
/// ui = "vendor/ui/views"
///
/// [components]
/// extension = "edge"
/// directory = "components"
/// tag = "component"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SuperchargedConfig {
	/// Map of mount name to a directory relative to the project root. The
	/// `default` mount is discovered without a prefix.
	#[serde(default)]
	pub mounts: BTreeMap<String, PathBuf>,
	/// Settings controlling how component files are found and compiled.
	#[serde(default)]
	pub components: ComponentSettings,
}

/// Controls which files count as components and which tag they compile to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentSettings {
	/// Template file extension without the leading dot.
	#[serde(default = "default_extension")]
	pub extension: String,
	/// Directory under every mount that is walked for components.
	#[serde(default = "default_directory")]
	pub directory: String,
	/// Generic tag that receives the component path as its first argument.
	#[serde(default = "default_tag")]
	pub tag: String,
}

impl Default for ComponentSettings {
	fn default() -> Self {
		Self {
			extension: default_extension(),
			directory: default_directory(),
			tag: default_tag(),
		}
	}
}

impl ComponentSettings {
	/// Construct [`ComponentSettings`] from an optional
	/// [`SuperchargedConfig`], falling back to the defaults.
	pub fn from_config(config: Option<&SuperchargedConfig>) -> Self {
		config.map(|c| c.components.clone()).unwrap_or_default()
	}
}

fn default_extension() -> String {
	DEFAULT_EXTENSION.to_string()
}

fn default_directory() -> String {
	DEFAULT_COMPONENTS_DIRECTORY.to_string()
}

fn default_tag() -> String {
	DEFAULT_COMPONENT_TAG.to_string()
}

impl SuperchargedConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> SuperchargedResult<Option<SuperchargedConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %config_path.display(), mounts = config.mounts.len(), "loaded config");

		Ok(Some(config))
	}

	/// Parse config from a TOML string.
	pub fn parse(content: &str) -> SuperchargedResult<SuperchargedConfig> {
		toml::from_str(content).map_err(|e| SuperchargedError::ConfigParse(e.to_string()))
	}

	/// Mount table with every configured directory resolved against `root`.
	///
	/// When nothing is configured the project root itself becomes the
	/// `default` mount.
	pub fn resolve_mounts(&self, root: &Path) -> BTreeMap<String, PathBuf> {
		if self.mounts.is_empty() {
			return default_mounts(root);
		}

		self.mounts
			.iter()
			.map(|(name, dir)| (name.clone(), root.join(dir)))
			.collect()
	}
}

/// A mount table containing only `root` registered as the `default` mount.
pub fn default_mounts(root: &Path) -> BTreeMap<String, PathBuf> {
	BTreeMap::from([(DEFAULT_MOUNT.to_string(), root.to_path_buf())])
}

/// Parse a `NAME=DIR` mount argument.
pub fn parse_mount(value: &str) -> SuperchargedResult<(String, PathBuf)> {
	let Some((name, dir)) = value.split_once('=') else {
		return Err(SuperchargedError::InvalidMount(value.to_string()));
	};

	let name = name.trim();
	let dir = dir.trim();
	if name.is_empty() || dir.is_empty() || name.contains("::") {
		return Err(SuperchargedError::InvalidMount(value.to_string()));
	}

	Ok((name.to_string(), PathBuf::from(dir)))
}
