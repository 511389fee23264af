use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use crate::config::DEFAULT_MOUNT;
use crate::host::ClaimTagFn;
use crate::host::ProcessTagFn;
use crate::host::TagClaim;
use crate::host::TagProperties;
use crate::host::TemplateHost;

/// An in-process [`TemplateHost`] holding a mount table and the hooks
/// installed on it.
///
/// Claims are consulted in registration order and the first one to
/// recognize a tag wins. Processing steps all run, in registration order.
#[derive(Default)]
pub struct TagPipeline {
	mounts: BTreeMap<String, PathBuf>,
	claims: Vec<ClaimTagFn>,
	processors: Vec<ProcessTagFn>,
}

impl fmt::Debug for TagPipeline {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TagPipeline")
			.field("mounts", &self.mounts)
			.field("claims", &self.claims.len())
			.field("processors", &self.processors.len())
			.finish()
	}
}

impl TagPipeline {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a pipeline from an existing mount table.
	pub fn with_mounts(mounts: BTreeMap<String, PathBuf>) -> Self {
		Self {
			mounts,
			..Self::default()
		}
	}

	/// Mount `path` under `name`, replacing an existing mount of that name.
	pub fn mount(&mut self, name: impl Into<String>, path: impl AsRef<Path>) -> &mut Self {
		self.mounts
			.insert(name.into(), path.as_ref().to_path_buf());
		self
	}

	/// Mount `path` as the `default` directory.
	pub fn mount_default(&mut self, path: impl AsRef<Path>) -> &mut Self {
		self.mount(DEFAULT_MOUNT, path)
	}

	/// Remove the mount named `name`.
	pub fn unmount(&mut self, name: &str) -> Option<PathBuf> {
		self.mounts.remove(name)
	}

	pub fn mounts(&self) -> &BTreeMap<String, PathBuf> {
		&self.mounts
	}

	/// Ask the installed claim predicates about `name`.
	pub fn claim(&self, name: &str) -> Option<TagClaim> {
		self.claims.iter().find_map(|claim| claim(name))
	}

	/// Run every installed processing step over `tag`.
	pub fn process(&self, tag: &mut TagProperties) {
		for process in &self.processors {
			process(tag);
		}
	}

	/// Claim and process a tag the way the compiler would for a tag name it
	/// does not know. Returns `None` when no predicate claims the name.
	pub fn resolve(&self, name: &str, arguments: &str) -> Option<(TagClaim, TagProperties)> {
		let claim = self.claim(name)?;
		let mut tag = TagProperties::new(name, arguments);
		self.process(&mut tag);

		Some((claim, tag))
	}

	pub fn claim_count(&self) -> usize {
		self.claims.len()
	}

	pub fn processor_count(&self) -> usize {
		self.processors.len()
	}
}

impl TemplateHost for TagPipeline {
	fn mounted(&self) -> BTreeMap<String, PathBuf> {
		self.mounts.clone()
	}

	fn claim_tag(&mut self, claim: ClaimTagFn) {
		self.claims.push(claim);
	}

	fn process_tag(&mut self, process: ProcessTagFn) {
		self.processors.push(process);
	}
}
