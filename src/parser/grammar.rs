use once_cell::sync::Lazy;
use regex::Regex;

/// Token categories produced by the tokenizer. The grammar tables below
/// (`follows`, `precedence`, the match patterns) are all keyed on this
/// enum, so adding a variant forces every table to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Property,
    Comparison,
    IsNull,
    Comma,
    Logical,
    Value,
    FilterFunction,
    Boolean,
    LParen,
    RParen,
    Spatial,
    Units,
    Not,
    Between,
    Before,
    After,
    During,
    Relative,
    Time,
    TimePeriod,
    Geometry,
    End,
}

impl TokenKind {
    /// Grammar-level name, used in syntax error messages.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Property => "PROPERTY",
            TokenKind::Comparison => "COMPARISON",
            TokenKind::IsNull => "IS_NULL",
            TokenKind::Comma => "COMMA",
            TokenKind::Logical => "LOGICAL",
            TokenKind::Value => "VALUE",
            TokenKind::FilterFunction => "FILTER_FUNCTION",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Spatial => "SPATIAL",
            TokenKind::Units => "UNITS",
            TokenKind::Not => "NOT",
            TokenKind::Between => "BETWEEN",
            TokenKind::Before => "BEFORE",
            TokenKind::After => "AFTER",
            TokenKind::During => "DURING",
            TokenKind::Relative => "RELATIVE",
            TokenKind::Time => "TIME",
            TokenKind::TimePeriod => "TIME_PERIOD",
            TokenKind::Geometry => "GEOMETRY",
            TokenKind::End => "END",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

/// Token kinds allowed at the very start of an expression.
pub const ROOT_FOLLOWS: &[TokenKind] = &[
    TokenKind::Not,
    TokenKind::Geometry,
    TokenKind::Spatial,
    TokenKind::FilterFunction,
    TokenKind::Property,
    TokenKind::LParen,
];

/// Token kinds allowed after a token of the given kind. Order matters:
/// the tokenizer tries the candidates front to back and the first whose
/// pattern matches wins, which is how ambiguous prefixes (a geometry
/// keyword used as a property name, NOT vs. a property starting with
/// "not", ...) are resolved.
pub fn follows(kind: TokenKind) -> &'static [TokenKind] {
    use TokenKind::*;
    match kind {
        LParen => &[Not, Geometry, Spatial, FilterFunction, Property, Value, LParen],
        RParen => &[Not, Logical, End, RParen, Comparison, Comma],
        Property => &[
            FilterFunction,
            Comparison,
            Between,
            Comma,
            IsNull,
            Before,
            After,
            During,
            RParen,
        ],
        Between => &[Value],
        IsNull => &[RParen, Logical, End],
        Comparison => &[Relative, Value, Boolean],
        Comma => &[FilterFunction, Geometry, Value, Units, Property],
        Value => &[Logical, Comma, RParen, End],
        Boolean => &[Comma, Logical, RParen, End],
        Spatial => &[LParen],
        Units => &[RParen],
        Logical => &[FilterFunction, Not, Value, Spatial, Property, LParen],
        Not => &[LParen, Property],
        Geometry => &[Comma, RParen, Logical, End],
        Before => &[Time],
        After => &[Time],
        During => &[TimePeriod],
        Time => &[Logical, RParen, End],
        TimePeriod => &[Logical, RParen, End],
        Relative => &[Logical, RParen, End],
        FilterFunction => &[Value, FilterFunction, Property, RParen],
        End => &[],
    }
}

/// Operator binding strength for the postfix conversion. Kinds without
/// an entry are never popped by the precedence rule.
pub fn precedence(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::RParen => Some(3),
        TokenKind::Logical => Some(2),
        TokenKind::Comparison => Some(1),
        _ => None,
    }
}

static PROPERTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^([_a-zA-Z][_a-zA-Z0-9:.\-]*|"[^"]+"|'[^']+')"#).unwrap());

static COMPARISON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(=|<>|<=|<|>=|>|LIKE\b|ILIKE\b)").unwrap());

static IS_NULL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^IS NULL\b").unwrap());

static COMMA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^,").unwrap());

static LOGICAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(AND|OR)\b").unwrap());

static VALUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^('([^']|'')*'|-?\d+(\.\d*)?|-?\.\d+)").unwrap());

static FILTER_FUNCTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]\w+\(").unwrap());

static BOOLEAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(false|true)\b").unwrap());

static LPAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(").unwrap());

static RPAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\)").unwrap());

static SPATIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(BBOX|INTERSECTS|DWITHIN|WITHIN|CONTAINS)\b").unwrap());

static UNITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(meters)\b").unwrap());

static NOT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^NOT\b").unwrap());

static BETWEEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^BETWEEN\b").unwrap());

static BEFORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^BEFORE\b").unwrap());

static AFTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^AFTER\b").unwrap());

static DURING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^DURING\b").unwrap());

static RELATIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^'RELATIVE\([A-Za-z0-9.]*\)'").unwrap());

const TIME_BODY: &str =
    r"\d{4}-\d{2}-\d{2}(?:T\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?(?:Z|[-+]\d{2}(?::\d{2})?)?)?";

static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^{}", TIME_BODY)).unwrap());

static TIME_PERIOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{}/{}", TIME_BODY, TIME_BODY)).unwrap());

static GEOMETRY_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(POINT|LINESTRING|POLYGON|MULTIPOINT|MULTILINESTRING|MULTIPOLYGON|GEOMETRYCOLLECTION)\b",
    )
    .unwrap()
});

/// Length of the token of `kind` at the start of `input`, if one is there.
/// Every pattern is anchored; GEOMETRY needs a paren-balancing scan that a
/// regex cannot express, END matches only the empty string.
pub fn match_len(kind: TokenKind, input: &str) -> Option<usize> {
    let re = match kind {
        TokenKind::Property => &PROPERTY_RE,
        TokenKind::Comparison => &COMPARISON_RE,
        TokenKind::IsNull => &IS_NULL_RE,
        TokenKind::Comma => &COMMA_RE,
        TokenKind::Logical => &LOGICAL_RE,
        TokenKind::Value => &VALUE_RE,
        TokenKind::FilterFunction => &FILTER_FUNCTION_RE,
        TokenKind::Boolean => &BOOLEAN_RE,
        TokenKind::LParen => &LPAREN_RE,
        TokenKind::RParen => &RPAREN_RE,
        TokenKind::Spatial => &SPATIAL_RE,
        TokenKind::Units => &UNITS_RE,
        TokenKind::Not => &NOT_RE,
        TokenKind::Between => &BETWEEN_RE,
        TokenKind::Before => &BEFORE_RE,
        TokenKind::After => &AFTER_RE,
        TokenKind::During => &DURING_RE,
        TokenKind::Relative => &RELATIVE_RE,
        TokenKind::Time => &TIME_RE,
        TokenKind::TimePeriod => &TIME_PERIOD_RE,
        TokenKind::Geometry => return match_geometry(input),
        TokenKind::End => {
            return if input.is_empty() { Some(0) } else { None };
        }
    };
    re.find(input).map(|m| m.end())
}

/// Matches a WKT literal: a geometry keyword followed by a balanced
/// parenthesized coordinate list, captured whole as one token. Returns
/// None when the parens never balance or the keyword is not followed by
/// one, letting the tokenizer fall through to the next candidate kind.
fn match_geometry(input: &str) -> Option<usize> {
    let keyword = GEOMETRY_KEYWORD_RE.find(input)?;
    let mut depth = 0usize;
    let mut seen_paren = false;
    for (idx, ch) in input[keyword.end()..].char_indices() {
        match ch {
            '(' => {
                depth += 1;
                seen_paren = true;
            }
            ')' => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
                if depth == 0 {
                    return Some(keyword.end() + idx + 1);
                }
            }
            c if c.is_whitespace() && !seen_paren => {}
            _ if !seen_paren => return None,
            _ => {}
        }
    }
    None
}
