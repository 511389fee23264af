use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Use component templates as first-class tags.",
	long_about = "supercharged discovers component templates below the `components` directory of \
	              every mounted template directory and registers them under dotted camelCase \
	              names, so `components/form/button.edge` can be used as `@form.button()`.\n\nQuick \
	              start:\n  supercharged list                 List discovered components\n  \
	              supercharged resolve form.button  Show how a tag is compiled"
)]
pub struct SuperchargedCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Mount a template directory as `NAME=DIR`. The `default` mount is
	/// discovered without a name prefix. Overrides mounts from
	/// `supercharged.toml`.
	#[arg(long, short, global = true, value_name = "NAME=DIR")]
	pub mount: Vec<String>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// List every discovered component.
	///
	/// Walks the `components` directory of each mount and prints the
	/// canonical name of every component together with the template path
	/// passed to the generic component tag.
	List {
		/// Output format. Use `text` for human-readable output or `json` for
		/// a map of component name to `{ "path": ... }`.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Show how a tag is compiled once components are wired in.
	///
	/// Exits with a non-zero status code when the tag name is not a
	/// registered component.
	Resolve {
		/// Tag name as written in a template, e.g. `form.button`.
		tag: String,

		/// Raw argument source of the tag, e.g. `{ type: 'submit' }`.
		#[arg(default_value = "")]
		arguments: String,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
