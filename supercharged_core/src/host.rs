//! The contract between the component extension and the template engine
//! that hosts it.
//!
//! The host owns a mount table, a tag compiler that asks registered claim
//! predicates whether an unknown tag name is valid, and a tag processing
//! pipeline that lets extensions rewrite parsed tags before they are
//! compiled.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::ComponentRegistry;

/// Capabilities the host compiler assigns to a claimed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagClaim {
	/// The tag accepts arguments (`@tag(...)`).
	pub seekable: bool,
	/// The tag has a body and a matching `@end`.
	pub block: bool,
}

impl TagClaim {
	/// The capabilities of a component tag.
	pub const COMPONENT: Self = Self {
		seekable: true,
		block: true,
	};
}

/// The mutable view of a parsed tag handed to processing steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagProperties {
	/// The tag name as written in the template, e.g. `form.button`.
	pub name: String,
	/// Raw argument source between the tag's parentheses.
	pub arguments: String,
}

impl TagProperties {
	pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			arguments: arguments.into(),
		}
	}
}

/// Predicate installed on the host compiler. Returns the capabilities for
/// tag names it recognizes, `None` to let the host resolve the tag itself.
pub type ClaimTagFn = Box<dyn Fn(&str) -> Option<TagClaim> + Send + Sync>;

/// Step installed on the host's tag processing pipeline.
pub type ProcessTagFn = Box<dyn Fn(&mut TagProperties) + Send + Sync>;

/// A template engine that the component extension can be installed on.
pub trait TemplateHost {
	/// Base directories known to the engine, keyed by mount name.
	fn mounted(&self) -> BTreeMap<String, PathBuf>;

	/// Register a tag claim predicate. Claims accumulate on the host.
	fn claim_tag(&mut self, claim: ClaimTagFn);

	/// Register a tag processing step. Steps accumulate on the host.
	fn process_tag(&mut self, process: ProcessTagFn);
}

/// Claim `name` when it is a registered component.
pub fn claim_component(registry: &ComponentRegistry, name: &str) -> Option<TagClaim> {
	registry.contains(name).then_some(TagClaim::COMPONENT)
}

/// Rewrite a registered component tag into an invocation of `component_tag`
/// with the component path as the first argument.
///
/// Returns `false` and leaves the tag untouched when its name is not
/// registered. The existing argument source is kept verbatim after the
/// quoted path.
pub fn rewrite_component(
	registry: &ComponentRegistry,
	component_tag: &str,
	tag: &mut TagProperties,
) -> bool {
	let Some(component) = registry.get(&tag.name) else {
		return false;
	};

	tag.arguments = if tag.arguments.trim().is_empty() {
		format!("'{}'", component.path)
	} else {
		format!("'{}',{}", component.path, tag.arguments)
	};
	tag.name = component_tag.to_string();

	true
}
