use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use crate::ComponentRegistry;
use crate::SuperchargedError;
use crate::SuperchargedResult;
use crate::config::ComponentSettings;
use crate::config::DEFAULT_MOUNT;
use crate::naming::component_name;
use crate::naming::index_alias;
use crate::naming::prefixed;

/// Options for a single discovery pass over one base directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverOptions {
	/// Qualifies every discovered name as `<prefix>.<name>`.
	pub prefix: Option<String>,
	/// Qualifies every discovered path as `<disk_name>::<path>`. Also used as
	/// the name prefix when `prefix` is not set.
	pub disk_name: Option<String>,
}

impl DiscoverOptions {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	#[must_use]
	pub fn with_disk_name(mut self, disk_name: impl Into<String>) -> Self {
		self.disk_name = Some(disk_name.into());
		self
	}

	/// Options for a named mount. The `default` mount is unqualified while
	/// every other mount uses its name as both prefix and disk name.
	pub fn for_mount(name: &str) -> Self {
		if name == DEFAULT_MOUNT {
			return Self::default();
		}

		Self::new().with_prefix(name).with_disk_name(name)
	}

	fn name_prefix(&self) -> Option<&str> {
		self.prefix.as_deref().or(self.disk_name.as_deref())
	}
}

/// Walks the components directory of a base path and registers every
/// template it finds.
#[derive(Debug, Clone)]
pub struct Discoverer {
	extension: String,
	directory: String,
}

impl Default for Discoverer {
	fn default() -> Self {
		Self::new(&ComponentSettings::default())
	}
}

impl Discoverer {
	pub fn new(settings: &ComponentSettings) -> Self {
		Self {
			extension: settings.extension.trim_start_matches('.').to_string(),
			directory: settings.directory.trim_matches('/').to_string(),
		}
	}

	/// The components directory below `base_path`.
	pub fn components_root(&self, base_path: &Path) -> PathBuf {
		base_path.join(&self.directory)
	}

	/// Collect the paths of all component templates below
	/// `<base_path>/<directory>`, relative to that directory, using `/`
	/// separators and sorted lexicographically.
	///
	/// A missing components directory yields an empty list.
	pub fn collect(&self, base_path: &Path) -> SuperchargedResult<Vec<String>> {
		let root = self.components_root(base_path);
		let mut files = Vec::new();
		let mut ancestors = HashSet::new();
		let suffix = format!(".{}", self.extension);

		walk_dir(&root, &suffix, &mut files, &mut ancestors)?;

		let mut relative: Vec<String> = files
			.iter()
			.filter_map(|file| file.strip_prefix(&root).ok())
			.map(|file| file.to_string_lossy().replace('\\', "/"))
			.collect();
		relative.sort();

		Ok(relative)
	}

	/// Discover the components below `base_path` and register them in
	/// `registry`. Returns the number of component files registered.
	pub fn discover(
		&self,
		registry: &mut ComponentRegistry,
		base_path: &Path,
		options: &DiscoverOptions,
	) -> SuperchargedResult<usize> {
		let files = self.collect(base_path)?;
		let qualifier = options
			.disk_name
			.as_deref()
			.map(|disk| format!("{disk}::"))
			.unwrap_or_default();

		let mut count = 0;
		for file in &files {
			let name = component_name(file, &self.extension);
			if name.is_empty() {
				tracing::trace!(file = %file, "skipping component without a name");
				continue;
			}

			// Templates are always referenced with forward slashes.
			let path = format!("{qualifier}{}/{file}", self.directory);
			let prefix = options.name_prefix();

			registry.register(prefixed(prefix, &name), path.clone());
			if let Some(alias) = index_alias(&name) {
				registry.register(prefixed(prefix, alias), path);
			}
			count += 1;
		}

		tracing::debug!(
			base = %base_path.display(),
			prefix = options.name_prefix().unwrap_or_default(),
			count,
			"discovered components"
		);

		Ok(count)
	}
}

/// Discover components below `base_path` with the default settings
/// (`components/**/*.edge`).
pub fn discover_components(
	registry: &mut ComponentRegistry,
	base_path: &Path,
	options: &DiscoverOptions,
) -> SuperchargedResult<usize> {
	Discoverer::default().discover(registry, base_path, options)
}

fn walk_dir(
	dir: &Path,
	suffix: &str,
	files: &mut Vec<PathBuf>,
	ancestors: &mut HashSet<PathBuf>,
) -> SuperchargedResult<()> {
	if !dir.is_dir() {
		return Ok(());
	}

	// A cycle is a directory that is its own ancestor. The same directory
	// reached through two different links is walked twice.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !ancestors.insert(canonical.clone()) {
		return Err(SuperchargedError::SymlinkCycle {
			path: dir.display().to_string(),
		});
	}

	for entry in std::fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_dir() {
			walk_dir(&path, suffix, files, ancestors)?;
		} else if is_component_file(&path, suffix) {
			files.push(path);
		}
	}

	ancestors.remove(&canonical);

	Ok(())
}

fn is_component_file(path: &Path, suffix: &str) -> bool {
	path.file_name()
		.and_then(|name| name.to_str())
		.is_some_and(|name| name.ends_with(suffix))
}
