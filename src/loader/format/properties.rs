/* src/loader/format/properties.rs */

//!
//! Parser for the `.properties` key-value syntax.
//!
//! Supported: `key=value`, `key: value` and `key value` separators, `#` and
//! `!` comment lines, backslash line continuation, and the `\t \n \r \f
//! \uXXXX` escapes. Input that is not valid UTF-8 is read as ISO-8859-1.

use std::borrow::Cow;
use std::char::REPLACEMENT_CHARACTER;

use super::super::{Format, LoadError};
use crate::config::Properties;

/// `.properties` format parser.
pub struct PropertiesFormat;

impl Format for PropertiesFormat {
	fn extensions(&self) -> &'static [&'static str] {
		&["properties"]
	}

	fn parse(&self, input: &[u8]) -> Result<Properties, LoadError> {
		let text = match std::str::from_utf8(input) {
			Ok(s) => Cow::Borrowed(s),
			Err(_) => Cow::Owned(input.iter().map(|&b| char::from(b)).collect()),
		};
		parse_properties(&text)
	}
}

/// Parses `.properties` text. Later duplicates replace earlier keys.
pub fn parse_properties(text: &str) -> Result<Properties, LoadError> {
	let mut pairs = Vec::new();
	for (line, logical) in logical_lines(text) {
		let (raw_key, raw_value) = split_key_value(&logical);
		pairs.push((unescape(raw_key, line)?, unescape(raw_value, line)?));
	}
	Ok(pairs.into_iter().collect())
}

fn is_blank(c: char) -> bool {
	matches!(c, ' ' | '\t' | '\x0c')
}

/// Joins continuation lines and drops comments and blank lines.
///
/// Each logical line is paired with the 1-based number of its first line.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
	let normalized = text.replace("\r\n", "\n");
	let mut out = Vec::new();
	let mut pending: Option<(usize, String)> = None;

	for (idx, natural) in normalized.split(['\n', '\r']).enumerate() {
		let trimmed = natural.trim_start_matches(is_blank);

		let (start, mut buf) = match pending.take() {
			Some(p) => p,
			None => {
				if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
					continue;
				}
				(idx + 1, String::new())
			}
		};

		let trailing = trimmed.chars().rev().take_while(|&c| c == '\\').count();
		if trailing % 2 == 1 {
			buf.push_str(&trimmed[..trimmed.len() - 1]);
			pending = Some((start, buf));
		} else {
			buf.push_str(trimmed);
			out.push((start, buf));
		}
	}

	if let Some(p) = pending {
		out.push(p);
	}
	out
}

/// Splits a logical line at the first unescaped separator.
fn split_key_value(line: &str) -> (&str, &str) {
	let mut escaped = false;
	let mut key_end = line.len();
	for (idx, c) in line.char_indices() {
		if escaped {
			escaped = false;
			continue;
		}
		if c == '\\' {
			escaped = true;
		} else if c == '=' || c == ':' || is_blank(c) {
			key_end = idx;
			break;
		}
	}

	let key = &line[..key_end];
	let mut rest = line[key_end..].trim_start_matches(is_blank);
	if let Some(after) = rest.strip_prefix(['=', ':']) {
		rest = after.trim_start_matches(is_blank);
	}
	(key, rest)
}

fn unescape(raw: &str, line: usize) -> Result<String, LoadError> {
	let mut out = String::with_capacity(raw.len());
	let mut units: Vec<u16> = Vec::new();
	let mut chars = raw.chars();

	while let Some(c) = chars.next() {
		if c == '\\' && chars.as_str().starts_with('u') {
			chars.next();
			let hex: String = chars.by_ref().take(4).collect();
			let unit = (hex.len() == 4)
				.then(|| u16::from_str_radix(&hex, 16).ok())
				.flatten()
				.ok_or_else(|| LoadError::Parse {
					line,
					message: format!("malformed \\uxxxx encoding: \\u{}", hex),
				})?;
			units.push(unit);
			continue;
		}

		flush_units(&mut units, &mut out);
		if c != '\\' {
			out.push(c);
			continue;
		}
		match chars.next() {
			Some('t') => out.push('\t'),
			Some('n') => out.push('\n'),
			Some('r') => out.push('\r'),
			Some('f') => out.push('\x0c'),
			Some(other) => out.push(other),
			// A lone trailing backslash is dropped.
			None => {}
		}
	}

	flush_units(&mut units, &mut out);
	Ok(out)
}

/// Decodes buffered `\uXXXX` units, pairing surrogates where possible.
fn flush_units(units: &mut Vec<u16>, out: &mut String) {
	if units.is_empty() {
		return;
	}
	out.extend(char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(REPLACEMENT_CHARACTER)));
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(text: &str) -> Properties {
		parse_properties(text).unwrap()
	}

	#[test]
	fn test_separators() {
		let props = parse("a=1\nb: 2\nc 3\nd   =   4\ne\n");
		assert_eq!(props.get("a"), Some("1"));
		assert_eq!(props.get("b"), Some("2"));
		assert_eq!(props.get("c"), Some("3"));
		assert_eq!(props.get("d"), Some("4"));
		assert_eq!(props.get("e"), Some(""));
	}

	#[test]
	fn test_comments_and_blank_lines() {
		let props = parse("# comment\n  ! other comment\n\n   \ncookies.SameSite=Lax\n");
		assert_eq!(props.len(), 1);
		assert_eq!(props.get("cookies.SameSite"), Some("Lax"));
	}

	#[test]
	fn test_value_keeps_trailing_whitespace_and_second_separator() {
		let props = parse("a = = b \n");
		assert_eq!(props.get("a"), Some("= b "));
	}

	#[test]
	fn test_line_continuation() {
		let props = parse("key = first \\\n      second \\\n third\nnext=1");
		assert_eq!(props.get("key"), Some("first second third"));
		assert_eq!(props.get("next"), Some("1"));
	}

	#[test]
	fn test_even_backslashes_do_not_continue() {
		let props = parse("path=C:\\\\\nother=x");
		assert_eq!(props.get("path"), Some("C:\\"));
		assert_eq!(props.get("other"), Some("x"));
	}

	#[test]
	fn test_escaped_separator_in_key() {
		let props = parse("cookies.a\\=b.SameSite=Strict\nwith\\ space=1");
		assert_eq!(props.get("cookies.a=b.SameSite"), Some("Strict"));
		assert_eq!(props.get("with space"), Some("1"));
	}

	#[test]
	fn test_escapes() {
		let props = parse("a=tab\\there\nb=\\u0041\\u00e9\nc=\\ud83d\\ude00\nd=\\q");
		assert_eq!(props.get("a"), Some("tab\there"));
		assert_eq!(props.get("b"), Some("Aé"));
		assert_eq!(props.get("c"), Some("\u{1F600}"));
		assert_eq!(props.get("d"), Some("q"));
	}

	#[test]
	fn test_malformed_unicode_escape() {
		let err = parse_properties("ok=1\nbad=\\u12G4").unwrap_err();
		match err {
			LoadError::Parse { line, .. } => assert_eq!(line, 2),
			other => panic!("Expected Parse error, got {:?}", other),
		}
	}

	#[test]
	fn test_crlf_and_duplicates() {
		let props = parse("a=1\r\na=2\rb=3");
		assert_eq!(props.get("a"), Some("2"));
		assert_eq!(props.get("b"), Some("3"));
	}

	#[test]
	fn test_latin1_fallback() {
		let bytes = b"name=caf\xe9\n";
		let props = PropertiesFormat.parse(bytes).unwrap();
		assert_eq!(props.get("name"), Some("café"));
	}
}
