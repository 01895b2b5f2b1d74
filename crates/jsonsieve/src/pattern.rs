//! Restricted JSONPath patterns.
//!
//! A pattern selects value positions by their rendered path (`$`, `$.key`,
//! `$[3]`, ...). Three shapes exist: an exact path, an array wildcard
//! (`prefix[*]`, one index level), and an object wildcard (`prefix.*`, one
//! key level). Recursive descent is rejected; any other well-formed string
//! is accepted as an exact pattern even if it can never match a produced
//! path.

use crate::error::SieveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternKind {
    Exact,
    ArrayWildcard,
    ObjectWildcard,
}

/// A compiled pattern.
///
/// # Examples
///
/// ```
/// use jsonsieve::PathPattern;
///
/// let users = PathPattern::parse("$.users[*]").unwrap();
/// assert!(users.matches("$.users[12]"));
/// assert!(!users.matches("$.users[12].id"));
/// assert!(users.is_ancestor_or_match("$.users"));
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    /// Path prefix before any wildcard; equal to `raw` for exact patterns.
    base: String,
    kind: PatternKind,
}

impl PathPattern {
    /// Parses and classifies one pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::Config`] for an empty pattern or one containing
    /// recursive descent (`**`).
    pub fn parse(text: &str) -> Result<Self, SieveError> {
        if text.is_empty() {
            return Err(SieveError::Config("empty pattern".to_string()));
        }
        if text.contains("**") {
            return Err(SieveError::Config(format!(
                "recursive descent is not supported: {text:?}"
            )));
        }
        let (kind, base) = if let Some(prefix) = text.strip_suffix("[*]") {
            (PatternKind::ArrayWildcard, prefix.to_string())
        } else if let Some(prefix) = text.strip_suffix(".*") {
            (PatternKind::ObjectWildcard, prefix.to_string())
        } else {
            (PatternKind::Exact, text.to_string())
        };
        Ok(Self {
            raw: text.to_string(),
            base,
            kind,
        })
    }

    /// The pattern string as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` iff `path` is in the set this pattern selects.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let Some(rest) = path.strip_prefix(self.base.as_str()) else {
            return false;
        };
        match self.kind {
            PatternKind::Exact => rest.is_empty(),
            PatternKind::ArrayWildcard => rest
                .strip_prefix('[')
                .and_then(|r| r.strip_suffix(']'))
                .is_some_and(|digits| {
                    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
                }),
            PatternKind::ObjectWildcard => rest
                .strip_prefix('.')
                .is_some_and(|segment| !segment.contains('.') && !segment.contains('[')),
        }
    }

    /// Returns `true` iff `path` matches, or is a (non-strict) ancestor of
    /// some path this pattern could match.
    ///
    /// Ancestry is a pure prefix test on the base path: the remainder after
    /// `path` must be empty or begin a new segment (`.` or `[`).
    #[must_use]
    pub fn is_ancestor_or_match(&self, path: &str) -> bool {
        if self.matches(path) {
            return true;
        }
        match self.base.strip_prefix(path) {
            Some(rest) => rest.is_empty() || rest.starts_with('.') || rest.starts_with('['),
            None => false,
        }
    }

    /// Returns `true` iff some path strictly below `path` could match.
    #[must_use]
    pub fn has_matching_descendants(&self, path: &str) -> bool {
        self.is_ancestor_or_match(path) && !self.matches(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_recursive_descent() {
        assert!(matches!(
            PathPattern::parse(""),
            Err(SieveError::Config(_))
        ));
        assert!(matches!(
            PathPattern::parse("$.a.**.b"),
            Err(SieveError::Config(_))
        ));
    }

    #[test]
    fn accepts_unmatchable_patterns_silently() {
        // Bracketed indices are not part of the supported grammar, so this
        // compiles to an exact pattern that only matches the literal path.
        let p = PathPattern::parse("$.users[0]").unwrap();
        assert!(p.matches("$.users[0]"));
        assert!(!p.matches("$.users[1]"));
    }

    #[test]
    fn exact_match() {
        let p = PathPattern::parse("$.name").unwrap();
        assert!(p.matches("$.name"));
        assert!(!p.matches("$.name.x"));
        assert!(!p.matches("$.names"));
    }

    #[test]
    fn array_wildcard_matches_single_index_level() {
        let p = PathPattern::parse("$[*]").unwrap();
        assert!(p.matches("$[0]"));
        assert!(p.matches("$[42]"));
        assert!(!p.matches("$"));
        assert!(!p.matches("$[0][1]"));
        assert!(!p.matches("$[x]"));
        assert!(!p.matches("$.a"));
    }

    #[test]
    fn object_wildcard_matches_one_level() {
        let p = PathPattern::parse("$.a.*").unwrap();
        assert!(p.matches("$.a.b"));
        assert!(p.matches("$.a.long_key"));
        assert!(!p.matches("$.a.b.c"));
        assert!(!p.matches("$.a.b[0]"));
        assert!(!p.matches("$.a"));
    }

    #[test]
    fn object_wildcard_allows_empty_segment() {
        let p = PathPattern::parse("$.a.*").unwrap();
        assert!(p.matches("$.a."));
    }

    #[test]
    fn ancestry_is_prefix_plus_segment_boundary() {
        let p = PathPattern::parse("$.users[*]").unwrap();
        assert!(p.is_ancestor_or_match("$"));
        assert!(p.is_ancestor_or_match("$.users"));
        assert!(p.is_ancestor_or_match("$.users[3]"));
        assert!(!p.is_ancestor_or_match("$.user"));
        assert!(!p.is_ancestor_or_match("$.users[3].id"));
    }

    #[test]
    fn descendant_query_excludes_self_matches() {
        let p = PathPattern::parse("$.users[*]").unwrap();
        assert!(p.has_matching_descendants("$"));
        assert!(p.has_matching_descendants("$.users"));
        assert!(!p.has_matching_descendants("$.users[3]"));

        let exact = PathPattern::parse("$.a.b").unwrap();
        assert!(exact.has_matching_descendants("$.a"));
        assert!(!exact.has_matching_descendants("$.a.b"));
        assert!(!exact.has_matching_descendants("$.a.c"));
    }
}
