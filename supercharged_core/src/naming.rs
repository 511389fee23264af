//! Canonical component names.
//!
//! A component file `components/form/text-input.edge` is known to templates
//! as `form.textInput`. Directory separators and dots inside the file stem
//! both become `.` in the name, and every piece between them is converted
//! to camelCase independently.

/// The file stem that additionally registers its parent name as an alias.
pub const INDEX_SEGMENT: &str = "index";

/// Convert a single name piece to camelCase.
///
/// Words are separated by any non-alphanumeric character and by case
/// boundaries (`fooBar` splits into `foo` and `Bar`, `XMLHttp` into `XML`
/// and `Http`). The first word is lowercased and every following word is
/// capitalized.
///
/// ```rust
/// use supercharged_core::naming::camel_case;
///
/// assert_eq!(camel_case("form-input"), "formInput");
/// assert_eq!(camel_case("XMLHttpRequest"), "xmlHttpRequest");
/// ```
pub fn camel_case(input: &str) -> String {
	let mut output = String::with_capacity(input.len());

	for (index, word) in split_words(input).into_iter().enumerate() {
		if index == 0 {
			output.push_str(&word.to_lowercase());
			continue;
		}

		let mut chars = word.chars();
		if let Some(first) = chars.next() {
			output.extend(first.to_uppercase());
			output.push_str(&chars.as_str().to_lowercase());
		}
	}

	output
}

fn split_words(input: &str) -> Vec<String> {
	let chars: Vec<char> = input.chars().collect();
	let mut words = Vec::new();
	let mut current = String::new();

	for (index, &ch) in chars.iter().enumerate() {
		if !ch.is_alphanumeric() {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
			continue;
		}

		if let Some(prev) = current.chars().next_back() {
			let next = chars.get(index + 1).copied();
			let lower_to_upper = (prev.is_lowercase() || prev.is_numeric()) && ch.is_uppercase();
			let acronym_end =
				prev.is_uppercase() && ch.is_uppercase() && next.is_some_and(char::is_lowercase);

			if lower_to_upper || acronym_end {
				words.push(std::mem::take(&mut current));
			}
		}

		current.push(ch);
	}

	if !current.is_empty() {
		words.push(current);
	}

	words
}

/// Derive the canonical name of a component from its path relative to the
/// components directory.
///
/// `relative_path` must use `/` separators. The trailing `.<extension>` is
/// removed when present.
///
/// ```rust
/// use supercharged_core::naming::component_name;
///
/// assert_eq!(component_name("form/text-input.edge", "edge"), "form.textInput");
/// assert_eq!(component_name("form.button.edge", "edge"), "form.button");
/// ```
pub fn component_name(relative_path: &str, extension: &str) -> String {
	let stem = relative_path
		.strip_suffix(extension)
		.and_then(|rest| rest.strip_suffix('.'))
		.unwrap_or(relative_path);

	stem.split(['/', '.'])
		.map(camel_case)
		.filter(|segment| !segment.is_empty())
		.collect::<Vec<_>>()
		.join(".")
}

/// The alias registered for names ending in an `index` segment.
///
/// `form.index` is also reachable as `form`. A bare `index` has no parent
/// segment and therefore no alias.
pub fn index_alias(name: &str) -> Option<&str> {
	let (parent, last) = name.rsplit_once('.')?;
	(last == INDEX_SEGMENT && !parent.is_empty()).then_some(parent)
}

/// Qualify `name` with `prefix` as `<prefix>.<name>`.
pub fn prefixed(prefix: Option<&str>, name: &str) -> String {
	match prefix {
		Some(prefix) if !prefix.is_empty() => format!("{prefix}.{name}"),
		_ => name.to_string(),
	}
}
