use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SuperchargedError {
	#[error(transparent)]
	#[diagnostic(code(supercharged::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(supercharged::config_parse),
		help("check that supercharged.toml is valid TOML with [mounts] and/or [components] sections")
	)]
	ConfigParse(String),

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(supercharged::symlink_cycle),
		help("remove the circular symlink from the components directory")
	)]
	SymlinkCycle { path: String },

	#[error("invalid mount: `{0}`")]
	#[diagnostic(
		code(supercharged::invalid_mount),
		help("mounts are written as `NAME=DIR`, e.g. `--mount ui=vendor/ui/views`")
	)]
	InvalidMount(String),
}

pub type SuperchargedResult<T> = Result<T, SuperchargedError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
