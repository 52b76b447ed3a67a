//! Translation between UserQL and CQL wildcard syntax.
//!
//! The application's search boxes use `*` (any run) and `?` (any single
//! character); CQL's LIKE/ILIKE use `%` and `_`. Translating a value means
//! swapping the wildcard alphabet while escaping characters that are
//! literal in the source syntax, so `50%` becomes `50\%` and a literal
//! asterisk typed as `\*` survives both directions untouched.

use once_cell::sync::Lazy;
use regex::Regex;

// An optionally backslash-prefixed special. Matching the escape together
// with its character is what keeps consecutive wildcard runs correct: a
// plain per-character substitution would re-examine the character after a
// consumed backslash.
static USERQL_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\[%_*?]|[%_*?]").unwrap());

static CQL_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\[%_*?]|[%_]").unwrap());

/// Rewrites a UserQL value into CQL LIKE syntax: `*`→`%`, `?`→`_`,
/// literal `%`/`_` escaped, backslash-prefixed specials passed through.
pub fn translate_userql_to_cql(input: &str) -> String {
    USERQL_SPECIAL
        .replace_all(input, |caps: &regex::Captures| match &caps[0] {
            "*" => "%".to_string(),
            "?" => "_".to_string(),
            "%" => r"\%".to_string(),
            "_" => r"\_".to_string(),
            escaped => escaped.to_string(),
        })
        .into_owned()
}

/// The inverse of [`translate_userql_to_cql`]: `%`→`*`, `_`→`?`, escaped
/// `\%`/`\_` back to literals, `\*`/`\?` passed through.
pub fn translate_cql_to_userql(input: &str) -> String {
    CQL_SPECIAL
        .replace_all(input, |caps: &regex::Captures| match &caps[0] {
            "%" => "*".to_string(),
            "_" => "?".to_string(),
            r"\%" => "%".to_string(),
            r"\_" => "_".to_string(),
            escaped => escaped.to_string(),
        })
        .into_owned()
}
