//! `supercharged_core` turns component template files into first-class tags.
//!
//! Every file below the `components` directory of a mounted template
//! directory is registered under a dotted camelCase name derived from its
//! path. Once the extension is wired into a template host, writing
//! `@form.button({ type: 'submit' })` compiles exactly like
//! `@component('components/form/button.edge', { type: 'submit' })`.
//!
//! ## Naming
//!
//! ```text
//! components/modal.edge             → modal
//! components/form-input.edge        → formInput
//! components/form/button.edge       → form.button
//! components/form.button.edge       → form.button
//! components/form/index.edge        → form.index and form
//! ui::components/modal.edge         → ui.modal
//! ```
//!
//! ## Modules
//!
//! - [`naming`] — camelCase conversion and canonical name derivation.
//! - [`discover`] — Walking a components directory and registering what it holds.
//! - [`host`] — The hooks a template host exposes and the claim/rewrite operations installed on them.
//! - [`config`] — Configuration loading from `supercharged.toml`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use supercharged_core::Supercharged;
//! use supercharged_core::TagPipeline;
//! use supercharged_core::TagProperties;
//!
//! let mut pipeline = TagPipeline::new();
//! pipeline.mount_default("views");
//!
//! let supercharged = Supercharged::new();
//! supercharged.wire(&mut pipeline, true).unwrap();
//!
//! let mut tag = TagProperties::new("form.button", "{ type: 'submit' }");
//! pipeline.process(&mut tag);
//! assert_eq!(tag.name, "component");
//! ```

pub use discover::*;
pub use error::*;
pub use host::*;
pub use pipeline::*;
pub use registry::*;
pub use supercharged::*;

pub mod config;
pub mod discover;
#[allow(unused_assignments)]
mod error;
pub mod host;
pub mod naming;
mod pipeline;
mod registry;
mod supercharged;

#[cfg(test)]
mod __fixtures;
