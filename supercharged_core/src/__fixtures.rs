use std::path::Path;

use tempfile::TempDir;

use crate::ComponentRegistry;

/// Create a temporary directory containing the given files (paths relative
/// to the directory root), each with empty content.
pub fn project_with_files(files: &[&str]) -> TempDir {
	let tmp = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
	for file in files {
		add_file(tmp.path(), file);
	}
	tmp
}

pub fn add_file(root: &Path, file: &str) {
	let path = root.join(file);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("create_dir_all: {e}"));
	}
	std::fs::write(&path, "").unwrap_or_else(|e| panic!("write {file}: {e}"));
}

pub fn remove_file(root: &Path, file: &str) {
	std::fs::remove_file(root.join(file)).unwrap_or_else(|e| panic!("remove {file}: {e}"));
}

/// Build a registry from `(name, path)` pairs.
pub fn registry_of(entries: &[(&str, &str)]) -> ComponentRegistry {
	let mut registry = ComponentRegistry::new();
	for (name, path) in entries {
		registry.register(*name, *path);
	}
	registry
}

pub fn form_components() -> [&'static str; 4] {
	[
		"components/form/input.edge",
		"components/form/label.edge",
		"components/form/button.edge",
		"components/modal.edge",
	]
}

pub fn dashed_components() -> [&'static str; 4] {
	[
		"components/form-input.edge",
		"components/form-label.edge",
		"components/form-button.edge",
		"components/modal.edge",
	]
}
