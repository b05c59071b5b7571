/// Trim entries, drop blanks, and remove case-insensitive duplicates while
/// keeping the first spelling.
pub(super) fn sanitize_names(values: Vec<String>) -> Vec<String> {
	let mut cleaned: Vec<String> = Vec::new();
	for value in values {
		let trimmed = value.trim();
		if trimmed.is_empty()
			|| cleaned
				.iter()
				.any(|existing| existing.eq_ignore_ascii_case(trimmed))
		{
			continue;
		}
		cleaned.push(trimmed.to_string());
	}
	cleaned
}

/// Treat blank strings from config files or the environment as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
