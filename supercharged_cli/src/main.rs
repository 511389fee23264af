use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use supercharged_cli::Commands;
use supercharged_cli::OutputFormat;
use supercharged_cli::SuperchargedCli;
use supercharged_core::AnyEmptyResult;
use supercharged_core::AnyResult;
use supercharged_core::Supercharged;
use supercharged_core::TagPipeline;
use supercharged_core::config::ComponentSettings;
use supercharged_core::config::SuperchargedConfig;
use supercharged_core::config::default_mounts;
use supercharged_core::config::parse_mount;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = SuperchargedCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::List { format }) => run_list(&args, *format),
		Some(Commands::Resolve { tag, arguments }) => run_resolve(&args, tag, arguments),
		None => {
			eprintln!("No subcommand specified. Run `supercharged --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<supercharged_core::SuperchargedError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &SuperchargedCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Load config, build the mount table and wire the extension into a fresh
/// pipeline.
fn wire(args: &SuperchargedCli) -> AnyResult<(Supercharged, TagPipeline)> {
	let root = resolve_root(args);
	let config = SuperchargedConfig::load(&root)?;
	let settings = ComponentSettings::from_config(config.as_ref());

	let mut mounts: BTreeMap<String, PathBuf> = config
		.as_ref()
		.map_or_else(|| default_mounts(&root), |c| c.resolve_mounts(&root));
	for value in &args.mount {
		let (name, dir) = parse_mount(value)?;
		mounts.insert(name, root.join(dir));
	}

	let supercharged = Supercharged::with_settings(&settings);
	let mut pipeline = TagPipeline::with_mounts(mounts);
	let count = supercharged.wire(&mut pipeline, true)?;
	tracing::debug!(root = %root.display(), files = count, "wired components");

	Ok((supercharged, pipeline))
}

fn run_list(args: &SuperchargedCli, format: OutputFormat) -> AnyEmptyResult {
	let (supercharged, pipeline) = wire(args)?;
	let components = supercharged.components();

	if matches!(format, OutputFormat::Json) {
		println!("{}", serde_json::to_string_pretty(&components)?);
		return Ok(());
	}

	if components.is_empty() {
		println!("No components found.");
		return Ok(());
	}

	println!("{}", colored!("Components:", bold));
	let width = components.names().iter().map(|name| name.len()).max().unwrap_or(0);
	for (name, entry) in &components {
		println!("  @{name:<width$} {}", entry.path);
	}

	println!(
		"\n{} component(s) from {} mount(s)",
		components.len(),
		pipeline.mounts().len()
	);

	Ok(())
}

fn run_resolve(
	args: &SuperchargedCli,
	tag: &str,
	arguments: &str,
) -> AnyEmptyResult {
	let (_, pipeline) = wire(args)?;

	let Some((claim, resolved)) = pipeline.resolve(tag, arguments) else {
		eprintln!(
			"{} `{tag}` is not a registered component",
			colored!("error:", red)
		);
		process::exit(1);
	};

	println!("@{}({})", resolved.name, resolved.arguments);
	if args.verbose {
		println!("seekable: {}, block: {}", claim.seekable, claim.block);
	}

	Ok(())
}
