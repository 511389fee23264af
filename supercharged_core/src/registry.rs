use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// A discovered or manually registered component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
	/// Template reference passed to the generic component tag, e.g.
	/// `components/form/button.edge` or `ui::components/modal.edge`.
	pub path: String,
}

impl ComponentEntry {
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into() }
	}
}

/// Components keyed by canonical name.
///
/// Registering a name that already exists replaces the previous entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRegistry {
	components: BTreeMap<String, ComponentEntry>,
}

impl ComponentRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a component, overwriting any entry with the same name.
	pub fn register(&mut self, name: impl Into<String>, path: impl Into<String>) -> &mut Self {
		let name = name.into();
		let entry = ComponentEntry::new(path);
		tracing::trace!(name = %name, path = %entry.path, "register component");
		self.components.insert(name, entry);
		self
	}

	pub fn get(&self, name: &str) -> Option<&ComponentEntry> {
		self.components.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.components.contains_key(name)
	}

	/// Remove every registered component.
	pub fn clear(&mut self) {
		self.components.clear();
	}

	pub fn len(&self) -> usize {
		self.components.len()
	}

	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}

	/// Iterate over the components sorted by name.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentEntry)> {
		self.components
			.iter()
			.map(|(name, entry)| (name.as_str(), entry))
	}

	/// Component names sorted alphabetically.
	pub fn names(&self) -> Vec<&str> {
		self.components.keys().map(String::as_str).collect()
	}
}

impl<'a> IntoIterator for &'a ComponentRegistry {
	type IntoIter = std::collections::btree_map::Iter<'a, String, ComponentEntry>;
	type Item = (&'a String, &'a ComponentEntry);

	fn into_iter(self) -> Self::IntoIter {
		self.components.iter()
	}
}
