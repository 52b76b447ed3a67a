use super::grammar::{follows, match_len, Token, TokenKind, ROOT_FOLLOWS};
use crate::error::ParseError;

/// Splits a CQL expression into tokens. The set of kinds tried at each
/// step comes from the `follows` table keyed by the previous token, so a
/// keyword is only recognized where the grammar allows it. Ends with an
/// END token once the input is exhausted.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut remainder = text.trim_start();
    let mut expected = ROOT_FOLLOWS;

    loop {
        let matched = expected
            .iter()
            .find_map(|&kind| match_len(kind, remainder).map(|len| (kind, len)));

        let (kind, len) = match matched {
            Some(hit) => hit,
            None => {
                return Err(ParseError::Syntax {
                    remainder: remainder.to_string(),
                    expected: expected
                        .iter()
                        .map(|kind| kind.name())
                        .collect::<Vec<_>>()
                        .join(", "),
                });
            }
        };

        tokens.push(Token::new(kind, &remainder[..len]));
        remainder = remainder[len..].trim_start();

        if kind == TokenKind::End {
            return Ok(tokens);
        }
        expected = follows(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_tokenizes_simple_comparison() {
        let tokens = tokenize("title = 'cat'").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["title", "=", "'cat'", ""]);
        assert_eq!(
            kinds("title = 'cat'"),
            vec![
                TokenKind::Property,
                TokenKind::Comparison,
                TokenKind::Value,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn test_tokenizes_spatial_call() {
        assert_eq!(
            kinds("INTERSECTS(anyGeo, POLYGON((1 2,3 4,5 6,1 2)))"),
            vec![
                TokenKind::Spatial,
                TokenKind::LParen,
                TokenKind::Property,
                TokenKind::Comma,
                TokenKind::Geometry,
                TokenKind::RParen,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn test_tokenizes_dwithin_with_units() {
        assert_eq!(
            kinds("DWITHIN(anyGeo, POINT(1 2), 100, meters)"),
            vec![
                TokenKind::Spatial,
                TokenKind::LParen,
                TokenKind::Property,
                TokenKind::Comma,
                TokenKind::Geometry,
                TokenKind::Comma,
                TokenKind::Value,
                TokenKind::Comma,
                TokenKind::Units,
                TokenKind::RParen,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn test_tokenizes_filter_function() {
        let tokens = tokenize("proximity('anyText',3,'cat dog') = true").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::FilterFunction);
        assert_eq!(tokens[0].text, "proximity(");
        assert_eq!(
            kinds("proximity('anyText',3,'cat dog') = true"),
            vec![
                TokenKind::FilterFunction,
                TokenKind::Value,
                TokenKind::Comma,
                TokenKind::Value,
                TokenKind::Comma,
                TokenKind::Value,
                TokenKind::RParen,
                TokenKind::Comparison,
                TokenKind::Boolean,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn test_geometry_keyword_usable_as_property() {
        assert_eq!(
            kinds("POINT = 3"),
            vec![
                TokenKind::Property,
                TokenKind::Comparison,
                TokenKind::Value,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn test_relative_wins_over_value_after_comparison() {
        let tokens = tokenize("created = 'RELATIVE(P1D)'").unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Relative);
        assert_eq!(tokens[2].text, "'RELATIVE(P1D)'");
    }

    #[test]
    fn test_tokenizes_between_and_temporal() {
        assert_eq!(
            kinds("height BETWEEN 1 AND 3"),
            vec![
                TokenKind::Property,
                TokenKind::Between,
                TokenKind::Value,
                TokenKind::Logical,
                TokenKind::Value,
                TokenKind::End
            ]
        );
        assert_eq!(
            kinds("created DURING 2020-01-01/2020-06-30"),
            vec![
                TokenKind::Property,
                TokenKind::During,
                TokenKind::TimePeriod,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            kinds("title like 'a%' and created is null"),
            vec![
                TokenKind::Property,
                TokenKind::Comparison,
                TokenKind::Value,
                TokenKind::Logical,
                TokenKind::Property,
                TokenKind::IsNull,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let tokens = tokenize("   title   =   'cat'   ").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3].kind, TokenKind::End);
    }

    #[test]
    fn test_unexpected_token_reports_expected_set() {
        let err = tokenize("title = = 3").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("expected one of:"));
        assert!(message.contains("RELATIVE, VALUE, BOOLEAN"));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(tokenize("").is_err());
        assert!(tokenize("   ").is_err());
    }
}
