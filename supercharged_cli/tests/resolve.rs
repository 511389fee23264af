mod common;

use supercharged_core::AnyEmptyResult;

#[test]
fn resolve_prepends_component_path() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::add_file(tmp.path(), "components/form/button.edge", "")?;

	let mut cmd = common::supercharged_cmd();
	cmd.arg("resolve")
		.arg("form.button")
		.arg("{ type: 'submit' }")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("@component('components/form/button.edge',{ type: 'submit' })\n");

	Ok(())
}

#[test]
fn resolve_without_arguments() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::add_file(tmp.path(), "components/modal.edge", "")?;

	let mut cmd = common::supercharged_cmd();
	cmd.arg("resolve")
		.arg("modal")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("@component('components/modal.edge')\n");

	Ok(())
}

#[test]
fn resolve_verbose_prints_claim() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::add_file(tmp.path(), "components/modal.edge", "")?;

	let mut cmd = common::supercharged_cmd();
	cmd.arg("resolve")
		.arg("modal")
		.arg("--verbose")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("seekable: true, block: true"));

	Ok(())
}

#[test]
fn resolve_unknown_tag_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::add_file(tmp.path(), "components/modal.edge", "")?;

	let mut cmd = common::supercharged_cmd();
	cmd.arg("resolve")
		.arg("form.button")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains(
			"`form.button` is not a registered component",
		));

	Ok(())
}

#[test]
fn resolve_uses_configured_component_tag() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::add_file(
		tmp.path(),
		"supercharged.toml",
		"[components]\nextension = \"njk\"\ndirectory = \"partials\"\ntag = \"include\"\n",
	)?;
	common::add_file(tmp.path(), "partials/card/index.njk", "")?;

	let mut cmd = common::supercharged_cmd();
	cmd.arg("resolve")
		.arg("card")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("@include('partials/card/index.njk')\n");

	Ok(())
}
