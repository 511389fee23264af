use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn supercharged_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("supercharged"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

pub fn add_file(root: &Path, file: &str, content: &str) -> std::io::Result<()> {
	let path = root.join(file);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)
}
