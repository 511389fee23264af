use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use crate::ComponentEntry;
use crate::ComponentRegistry;
use crate::SuperchargedResult;
use crate::config::ComponentSettings;
use crate::discover::DiscoverOptions;
use crate::discover::Discoverer;
use crate::host::ClaimTagFn;
use crate::host::ProcessTagFn;
use crate::host::TagClaim;
use crate::host::TagProperties;
use crate::host::TemplateHost;
use crate::host::claim_component;
use crate::host::rewrite_component;

/// Registers component templates under short dotted names and teaches the
/// host to compile `@form.button(...)` as `@component('components/form/button.edge', ...)`.
///
/// Clones share the same registry, as do the hooks installed by
/// [`Supercharged::wire`].
#[derive(Debug, Clone)]
pub struct Supercharged {
	registry: Arc<RwLock<ComponentRegistry>>,
	discoverer: Discoverer,
	component_tag: String,
}

impl Default for Supercharged {
	fn default() -> Self {
		Self::new()
	}
}

impl Supercharged {
	pub fn new() -> Self {
		Self::with_settings(&ComponentSettings::default())
	}

	pub fn with_settings(settings: &ComponentSettings) -> Self {
		Self {
			registry: Arc::default(),
			discoverer: Discoverer::new(settings),
			component_tag: settings.tag.clone(),
		}
	}

	/// The generic tag that claimed components are compiled as.
	pub fn component_tag(&self) -> &str {
		&self.component_tag
	}

	/// A snapshot of the registered components.
	pub fn components(&self) -> ComponentRegistry {
		self.read().clone()
	}

	pub fn component(&self, name: &str) -> Option<ComponentEntry> {
		self.read().get(name).cloned()
	}

	/// Register a single component.
	pub fn register_component(&self, name: impl Into<String>, path: impl Into<String>) -> &Self {
		self.write().register(name, path);
		self
	}

	/// Discover components below `base_path` and add them to the registry.
	pub fn discover_components(
		&self,
		base_path: &Path,
		options: &DiscoverOptions,
	) -> SuperchargedResult<usize> {
		let mut registry = self.write();
		self.discoverer.discover(&mut registry, base_path, options)
	}

	/// The capabilities for `name` if it is a registered component.
	pub fn claim(&self, name: &str) -> Option<TagClaim> {
		claim_component(&self.read(), name)
	}

	/// Rewrite `tag` into a generic component tag when its name is
	/// registered.
	pub fn rewrite(&self, tag: &mut TagProperties) -> bool {
		rewrite_component(&self.read(), &self.component_tag, tag)
	}

	/// Install the extension on `host`.
	///
	/// Every run rediscovers the components of all mounted directories. The
	/// claim predicate and the processing step are only installed when
	/// `first_run` is true since hosts accumulate them. Returns the number of
	/// component files registered.
	pub fn wire<H: TemplateHost + ?Sized>(
		&self,
		host: &mut H,
		first_run: bool,
	) -> SuperchargedResult<usize> {
		let count = self.refresh(&host.mounted())?;

		if first_run {
			host.claim_tag(self.claim_hook());
			host.process_tag(self.process_hook());
		}

		Ok(count)
	}

	/// Install the extension with the host's hook registration functions
	/// passed in directly.
	pub fn wire_with(
		&self,
		mounts: &BTreeMap<String, PathBuf>,
		first_run: bool,
		register_claim: impl FnOnce(ClaimTagFn),
		register_process: impl FnOnce(ProcessTagFn),
	) -> SuperchargedResult<usize> {
		let count = self.refresh(mounts)?;

		if first_run {
			register_claim(self.claim_hook());
			register_process(self.process_hook());
		}

		Ok(count)
	}

	/// Replace the registry with the components discovered in `mounts`.
	///
	/// The registry is cleared before the walk. It stays empty when
	/// discovery fails and is published in one step when it succeeds.
	pub fn refresh(&self, mounts: &BTreeMap<String, PathBuf>) -> SuperchargedResult<usize> {
		self.write().clear();

		let mut registry = ComponentRegistry::new();
		let mut count = 0;
		for (name, base_path) in mounts {
			let options = DiscoverOptions::for_mount(name);
			count += self.discoverer.discover(&mut registry, base_path, &options)?;
		}

		tracing::debug!(
			mounts = mounts.len(),
			files = count,
			components = registry.len(),
			"refreshed component registry"
		);
		*self.write() = registry;

		Ok(count)
	}

	fn claim_hook(&self) -> ClaimTagFn {
		let registry = Arc::clone(&self.registry);
		Box::new(move |name: &str| claim_component(&read_registry(&registry), name))
	}

	fn process_hook(&self) -> ProcessTagFn {
		let registry = Arc::clone(&self.registry);
		let component_tag = self.component_tag.clone();
		Box::new(move |tag: &mut TagProperties| {
			let components = read_registry(&registry);
			if components.contains(&tag.name) {
				tracing::trace!(name = %tag.name, "rewriting component tag");
			}
			rewrite_component(&components, &component_tag, tag);
		})
	}

	fn read(&self) -> RwLockReadGuard<'_, ComponentRegistry> {
		read_registry(&self.registry)
	}

	fn write(&self) -> RwLockWriteGuard<'_, ComponentRegistry> {
		self.registry
			.write()
			.unwrap_or_else(PoisonError::into_inner)
	}
}

// Writers only ever store complete registries, so a poisoned lock still
// holds usable data.
fn read_registry(registry: &RwLock<ComponentRegistry>) -> RwLockReadGuard<'_, ComponentRegistry> {
	registry.read().unwrap_or_else(PoisonError::into_inner)
}
