use std::fmt;

use thiserror::Error;

/// MIME key under which accepted extensions are handed to the picker.
///
/// The File System Access API keys the `accept` object by MIME type, but the
/// key does not influence which files become selectable; only the extension
/// lists do. `application/octet-stream` is used as a placeholder.
pub const PLACEHOLDER_MIME: &str = "application/octet-stream";

/// Reasons a filter spec (or a token inside one) cannot be mapped to the
/// web picker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FilterParseError {
    /// Token matches every file name (`*`, `**`, `*.*`, ...). The web picker
    /// has no wildcard concept, so such tokens cannot be represented and
    /// must not be mistranslated.
    #[error("wildcard token matches every file name")]
    AcceptAll,
    /// Token is not a plain `*.ext` / `.ext` extension pattern.
    #[error("token `{0}` does not describe a file name extension")]
    NotAnExtension(String),
    /// Filter spec is empty or its parentheses are malformed.
    #[error("filter spec `{0}` has no usable shape")]
    MalformedSpec(String),
}

/// A file name extension accepted by the picker, including the leading dot.
///
/// Never empty and never contains `*`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Extension(String);

impl Extension {
    /// Parses a single glob-style token such as `*.png` or `.png`.
    ///
    /// The token must consist, as a whole, of an optional single leading
    /// `*`, a literal `.`, and one or more non-`*` characters; the extension
    /// starts at the dot. Anything else (a bare file name, an internal `*`)
    /// fails, as does a pure-wildcard token.
    pub fn parse(token: &str) -> Result<Self, FilterParseError> {
        if is_accept_all_token(token) {
            return Err(FilterParseError::AcceptAll);
        }
        let rest = token.strip_prefix('*').unwrap_or(token);
        if let Some(tail) = rest.strip_prefix('.') {
            if !tail.is_empty() && !tail.contains('*') {
                return Ok(Extension(rest.to_owned()));
            }
        }
        Err(FilterParseError::NotAnExtension(token.to_owned()))
    }

    /// Extension text including the leading dot.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Extension {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn all_asterisks(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'*')
}

/// Whole-token wildcard check: a run of asterisks, optionally two runs with
/// a single `.` between them.
fn is_accept_all_token(token: &str) -> bool {
    match token.split_once('.') {
        None => all_asterisks(token),
        Some((stem, tail)) => all_asterisks(stem) && all_asterisks(tail),
    }
}

/// Picker-facing accept rule: the ordered extension list reported under
/// [`PLACEHOLDER_MIME`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceptRule {
    extensions: Vec<Extension>,
}

impl AcceptRule {
    /// Parses a whitespace-separated extension token list.
    ///
    /// All-or-nothing: one malformed token invalidates the whole rule. This
    /// is deliberately stricter than the drop-and-continue policy applied
    /// one level up, at the filter-spec list.
    pub fn parse(text: &str) -> Result<Self, FilterParseError> {
        let extensions = text
            .split_whitespace()
            .map(Extension::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { extensions })
    }

    /// Accepted extensions, in filter order.
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AcceptRule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(PLACEHOLDER_MIME, &self.extensions)?;
        map.end()
    }
}

/// One entry of the picker's `types` list: an optional description plus the
/// extensions it accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileType {
    /// Human-readable label, trimmed; `None` when the filter had none.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    /// Extensions the picker should offer for this entry.
    pub accept: AcceptRule,
}

impl FileType {
    /// Parses one filter spec such as `"Images (*.png *.jpg)"` or `"*.txt"`.
    ///
    /// Two shapes are accepted, first match wins:
    /// - `DESCRIPTION (TOKENS)`: a leading run without `(`, then a
    ///   parenthesized token list without nested parentheses, then anything;
    /// - `TOKENS`: the whole input is the token list, parentheses not
    ///   permitted.
    pub fn parse(filter_spec: &str) -> Result<Self, FilterParseError> {
        let (description, tokens) = split_filter_spec(filter_spec)
            .ok_or_else(|| FilterParseError::MalformedSpec(filter_spec.to_owned()))?;
        let accept = AcceptRule::parse(tokens)?;
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_owned);
        Ok(Self {
            description,
            accept,
        })
    }
}

/// Splits a filter spec into its optional description part and the raw
/// extension-token text.
fn split_filter_spec(filter_spec: &str) -> Option<(Option<&str>, &str)> {
    match filter_spec.find('(') {
        Some(open) => {
            let close = open + 1 + filter_spec[open + 1..].find(')')?;
            let tokens = &filter_spec[open + 1..close];
            if tokens.is_empty() || tokens.contains('(') {
                return None;
            }
            Some((Some(&filter_spec[..open]), tokens))
        }
        None => {
            if filter_spec.is_empty() || filter_spec.contains(')') {
                return None;
            }
            Some((None, filter_spec))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_keeps_leading_dot() {
        assert_eq!(Extension::parse(".png").unwrap().as_str(), ".png");
    }

    #[test]
    fn extension_strips_wildcard_prefix() {
        assert_eq!(Extension::parse("*.png").unwrap().as_str(), ".png");
    }

    #[test]
    fn extension_rejects_accept_all_tokens() {
        for token in ["*", "**", "***", "*.*", "**.**"] {
            assert_eq!(
                Extension::parse(token).unwrap_err(),
                FilterParseError::AcceptAll,
                "token {token:?}"
            );
        }
    }

    #[test]
    fn extension_rejects_non_extension_shapes() {
        for token in ["readme", "a.png", "**.png", "*.t*t", ".", "*.", ""] {
            assert!(
                matches!(
                    Extension::parse(token),
                    Err(FilterParseError::NotAnExtension(_))
                ),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn extension_allows_inner_dots() {
        // The picker only forbids asterisks past the dot.
        assert_eq!(Extension::parse("*.tar.gz").unwrap().as_str(), ".tar.gz");
    }

    #[test]
    fn accept_rule_preserves_token_order() {
        let rule = AcceptRule::parse("*.png *.jpg").unwrap();
        let exts: Vec<&str> = rule.extensions().iter().map(Extension::as_str).collect();
        assert_eq!(exts, [".png", ".jpg"]);
    }

    #[test]
    fn accept_rule_is_all_or_nothing() {
        assert!(AcceptRule::parse("*.png bad*name").is_err());
        assert!(AcceptRule::parse("*.png *").is_err());
    }

    #[test]
    fn accept_rule_handles_surrounding_whitespace() {
        let rule = AcceptRule::parse("  *.png\t*.jpg  ").unwrap();
        assert_eq!(rule.extensions().len(), 2);
    }

    #[test]
    fn accept_rule_with_no_tokens_is_empty() {
        assert!(AcceptRule::parse(" ").unwrap().extensions().is_empty());
    }

    #[test]
    fn file_type_with_description() {
        let ty = FileType::parse("Images (*.png *.jpg)").unwrap();
        assert_eq!(ty.description.as_deref(), Some("Images"));
        let exts: Vec<&str> = ty.accept.extensions().iter().map(Extension::as_str).collect();
        assert_eq!(exts, [".png", ".jpg"]);
    }

    #[test]
    fn file_type_bare_token_list() {
        let ty = FileType::parse("*.txt").unwrap();
        assert_eq!(ty.description, None);
        assert_eq!(ty.accept.extensions()[0].as_str(), ".txt");
    }

    #[test]
    fn file_type_trims_description() {
        let ty = FileType::parse("  Portable docs   (*.pdf)").unwrap();
        assert_eq!(ty.description.as_deref(), Some("Portable docs"));
    }

    #[test]
    fn file_type_ignores_trailing_text_after_group() {
        let ty = FileType::parse("Images (*.png) extra ) noise").unwrap();
        assert_eq!(ty.description.as_deref(), Some("Images"));
        assert_eq!(ty.accept.extensions()[0].as_str(), ".png");
    }

    #[test]
    fn file_type_rejects_malformed_parentheses() {
        for bad in ["a((b)", "a()b (x)", ")x", "(", "x)", ""] {
            assert!(
                matches!(
                    FileType::parse(bad),
                    Err(FilterParseError::MalformedSpec(_))
                ),
                "filter {bad:?}"
            );
        }
    }

    #[test]
    fn file_type_propagates_bad_tokens() {
        assert!(matches!(
            FileType::parse("Everything (*)"),
            Err(FilterParseError::AcceptAll)
        ));
        assert!(matches!(
            FileType::parse("Mixed (*.png nope)"),
            Err(FilterParseError::NotAnExtension(_))
        ));
    }
}
