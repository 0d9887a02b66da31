/* src/processor/detect.rs */

use std::sync::LazyLock;

use fancy_regex::Regex;

use super::ProcessError;

/// `SameSite` token after a space or semicolon, any case, followed by `=`.
static SAME_SITE_ATTRIBUTE: LazyLock<Result<Regex, String>> =
	LazyLock::new(|| Regex::new(r"(?i)[ ;]SameSite\w*=").map_err(|e| e.to_string()));

/// Returns true if the serialized header already carries a `SameSite` attribute.
///
/// Extended spellings such as `SameSiteMode=` also count, so they are never
/// followed by a second attribute.
pub fn has_same_site(header: &str) -> Result<bool, ProcessError> {
	match &*SAME_SITE_ATTRIBUTE {
		Ok(re) => Ok(re.is_match(header)?),
		Err(e) => Err(ProcessError::Pattern(e.clone())),
	}
}
