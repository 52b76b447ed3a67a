use super::grammar::{precedence, Token, TokenKind};
use crate::ast::{
    filter_function_param_count, BboxNode, BetweenNode, ComparisonNode, ComparisonOp, DuringNode,
    FilterNode, FunctionNode, GeometryNode, IsNullNode, LogicalNode, LogicalOp, PropertyRef,
    SpatialNode, SpatialOp, SpatialOperand, TemporalNode, Value,
};
use crate::error::ParseError;
use crate::userql::translate_cql_to_userql;

/// Builds a filter tree from a token stream: shunting-yard conversion to
/// postfix, then reduction of the postfix stack from the back.
pub fn build_ast(tokens: Vec<Token>) -> Result<FilterNode, ParseError> {
    AstBuilder::new(tokens)?.build()
}

struct AstBuilder {
    postfix: Vec<Token>,
}

impl AstBuilder {
    fn new(tokens: Vec<Token>) -> Result<Self, ParseError> {
        Ok(AstBuilder {
            postfix: to_postfix(tokens)?,
        })
    }

    fn build(mut self) -> Result<FilterNode, ParseError> {
        let tree = self.build_tree()?;
        if !self.postfix.is_empty() {
            let leftover = self
                .postfix
                .iter()
                .map(|token| token.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            return Err(ParseError::RemainingTokens(leftover));
        }
        Ok(tree)
    }

    fn build_tree(&mut self) -> Result<FilterNode, ParseError> {
        let token = self.pop()?;
        match token.kind {
            TokenKind::Logical => {
                let op = if token.text.eq_ignore_ascii_case("AND") {
                    LogicalOp::And
                } else {
                    LogicalOp::Or
                };
                let rhs = self.build_tree()?;
                let lhs = self.build_tree()?;
                Ok(LogicalNode::new(op, vec![lhs, rhs]).into())
            }

            TokenKind::Not => Ok(LogicalNode::not(self.build_tree()?).into()),

            TokenKind::Comparison => {
                let value = self.pop_value()?;
                let property = self.pop_property()?;
                let op = comparison_op(&token.text)?;
                Ok(ComparisonNode::new(op, property, value).into())
            }

            TokenKind::IsNull => Ok(IsNullNode::new(self.pop_property_name()?).into()),

            // The infix form carries a separator AND between the bounds;
            // it lands on the postfix stack right above BETWEEN and is
            // dropped here rather than treated as a logical operator.
            TokenKind::Between => {
                if let Some(top) = self.postfix.last() {
                    if top.kind == TokenKind::Logical && top.text.eq_ignore_ascii_case("AND") {
                        self.postfix.pop();
                    }
                }
                let upper = self.pop_value()?;
                let lower = self.pop_value()?;
                let property = self.pop_property_name()?;
                Ok(BetweenNode::new(property, lower, upper).into())
            }

            TokenKind::Before => {
                let value = self.pop_time()?;
                let property = self.pop_property_name()?;
                Ok(TemporalNode::before(property, value).into())
            }

            TokenKind::After => {
                let value = self.pop_time()?;
                let property = self.pop_property_name()?;
                Ok(TemporalNode::after(property, value).into())
            }

            TokenKind::During => {
                let period = self.pop()?;
                if period.kind != TokenKind::TimePeriod {
                    return Err(ParseError::InvalidTimePeriod(period.text));
                }
                let (from, to) = match period.text.split_once('/') {
                    Some(bounds) => bounds,
                    None => return Err(ParseError::InvalidTimePeriod(period.text)),
                };
                Ok(DuringNode::new(self.pop_property_name()?, from, to).into())
            }

            TokenKind::Spatial => self.build_spatial(&token.text),

            TokenKind::FilterFunction => Ok(self.build_function(&token.text)?.into()),

            TokenKind::Geometry => Ok(GeometryNode::new(token.text).into()),

            TokenKind::Property
            | TokenKind::Value
            | TokenKind::Boolean
            | TokenKind::Time
            | TokenKind::TimePeriod
            | TokenKind::Relative
            | TokenKind::Comma
            | TokenKind::Units
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::End => Err(ParseError::UnexpectedPostfixToken(token.text)),
        }
    }

    fn build_spatial(&mut self, keyword: &str) -> Result<FilterNode, ParseError> {
        match keyword.to_uppercase().as_str() {
            "BBOX" => {
                let maxy = self.pop_number()?;
                let maxx = self.pop_number()?;
                let miny = self.pop_number()?;
                let minx = self.pop_number()?;
                let property = self.pop_property_name()?;
                Ok(BboxNode::new(property, [minx, miny, maxx, maxy]).into())
            }
            "DWITHIN" => {
                let distance = self.pop_number()?;
                let value = self.pop_spatial_operand()?;
                let property = self.pop_property_name()?;
                let mut node = SpatialNode::new(SpatialOp::Dwithin, property, value);
                node.distance = Some(distance);
                Ok(node.into())
            }
            "INTERSECTS" => self.build_spatial_relation(SpatialOp::Intersects),
            "WITHIN" => self.build_spatial_relation(SpatialOp::Within),
            "CONTAINS" => self.build_spatial_relation(SpatialOp::Contains),
            _ => Err(ParseError::UnexpectedPostfixToken(keyword.to_string())),
        }
    }

    fn build_spatial_relation(&mut self, op: SpatialOp) -> Result<FilterNode, ParseError> {
        let value = self.pop_spatial_operand()?;
        let property = self.pop_property_name()?;
        Ok(SpatialNode::new(op, property, value).into())
    }

    fn build_function(&mut self, token_text: &str) -> Result<FunctionNode, ParseError> {
        let name = token_text.strip_suffix('(').unwrap_or(token_text);
        let arity = filter_function_param_count(name)
            .ok_or_else(|| ParseError::UnsupportedFilterFunction(name.to_string()))?;
        let mut params = Vec::with_capacity(arity);
        for _ in 0..arity {
            params.push(self.pop_function_param()?);
        }
        params.reverse();
        Ok(FunctionNode::new(name, params))
    }

    fn pop(&mut self) -> Result<Token, ParseError> {
        self.postfix
            .pop()
            .ok_or(ParseError::UnexpectedEndOfExpression)
    }

    fn pop_property(&mut self) -> Result<PropertyRef, ParseError> {
        let token = self.pop()?;
        match token.kind {
            TokenKind::Property => Ok(strip_property_quotes(&token.text).into()),
            TokenKind::FilterFunction => Ok(self.build_function(&token.text)?.into()),
            _ => Err(ParseError::ExpectedProperty(token.text)),
        }
    }

    fn pop_property_name(&mut self) -> Result<String, ParseError> {
        let token = self.pop()?;
        if token.kind == TokenKind::Property {
            Ok(strip_property_quotes(&token.text))
        } else {
            Err(ParseError::ExpectedProperty(token.text))
        }
    }

    fn pop_value(&mut self) -> Result<Value, ParseError> {
        let token = self.pop()?;
        match token.kind {
            TokenKind::Value | TokenKind::Relative => parse_value(&token.text),
            TokenKind::Boolean => Ok(Value::Boolean(token.text.eq_ignore_ascii_case("true"))),
            _ => Err(ParseError::ExpectedValue(token.text)),
        }
    }

    fn pop_function_param(&mut self) -> Result<Value, ParseError> {
        let token = self.pop()?;
        match token.kind {
            TokenKind::Value => parse_value(&token.text),
            TokenKind::Property => Ok(Value::Text(strip_property_quotes(&token.text))),
            TokenKind::Geometry => Ok(Value::Text(token.text)),
            TokenKind::FilterFunction => Ok(self.build_function(&token.text)?.into()),
            _ => Err(ParseError::ExpectedValue(token.text)),
        }
    }

    fn pop_number(&mut self) -> Result<f64, ParseError> {
        let token = self.pop()?;
        if token.kind != TokenKind::Value {
            return Err(ParseError::InvalidNumber(token.text));
        }
        token
            .text
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber(token.text))
    }

    fn pop_time(&mut self) -> Result<String, ParseError> {
        let token = self.pop()?;
        if token.kind == TokenKind::Time {
            Ok(token.text)
        } else {
            Err(ParseError::ExpectedValue(token.text))
        }
    }

    fn pop_spatial_operand(&mut self) -> Result<SpatialOperand, ParseError> {
        let token = self.pop()?;
        match token.kind {
            TokenKind::Geometry => Ok(SpatialOperand::Geometry(GeometryNode::new(token.text))),
            TokenKind::Value => match parse_value(&token.text)? {
                Value::Text(wkt) => Ok(SpatialOperand::Wkt(wkt)),
                _ => Err(ParseError::ExpectedGeometry(token.text)),
            },
            _ => Err(ParseError::ExpectedGeometry(token.text)),
        }
    }
}

fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut postfix = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Property
            | TokenKind::Geometry
            | TokenKind::Value
            | TokenKind::Time
            | TokenKind::TimePeriod
            | TokenKind::Relative
            | TokenKind::Boolean => postfix.push(token),

            TokenKind::Comparison
            | TokenKind::Between
            | TokenKind::IsNull
            | TokenKind::Logical
            | TokenKind::Before
            | TokenKind::After
            | TokenKind::During => {
                if let Some(incoming) = precedence(token.kind) {
                    while let Some(top) = stack.last().and_then(|top| precedence(top.kind)) {
                        if top > incoming {
                            break;
                        }
                        if let Some(popped) = stack.pop() {
                            postfix.push(popped);
                        }
                    }
                }
                stack.push(token);
            }

            TokenKind::Spatial | TokenKind::Not | TokenKind::LParen => stack.push(token),

            // The token text already swallowed the opening paren, so a
            // synthetic LPAREN keeps the stack balanced for the RPAREN
            // that will close the argument list.
            TokenKind::FilterFunction => {
                stack.push(token);
                stack.push(Token::new(TokenKind::LParen, "("));
            }

            TokenKind::RParen => {
                loop {
                    match stack.pop() {
                        Some(top) if top.kind == TokenKind::LParen => break,
                        Some(top) => postfix.push(top),
                        None => return Err(ParseError::UnexpectedClosingParenthesis),
                    }
                }
                let call = matches!(
                    stack.last().map(|top| top.kind),
                    Some(TokenKind::Spatial) | Some(TokenKind::FilterFunction)
                );
                if call {
                    if let Some(op) = stack.pop() {
                        postfix.push(op);
                    }
                }
            }

            TokenKind::Comma | TokenKind::End | TokenKind::Units => {}
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::LParen {
            return Err(ParseError::UnclosedParenthesis);
        }
        postfix.push(top);
    }

    Ok(postfix)
}

fn comparison_op(text: &str) -> Result<ComparisonOp, ParseError> {
    ComparisonOp::from_symbol(text)
        .ok_or_else(|| ParseError::UnexpectedPostfixToken(text.to_string()))
}

/// Quoted token text becomes a string value: quotes stripped, doubled
/// quotes unescaped, wildcards translated into their UserQL form.
/// Anything else must parse as a number.
fn parse_value(text: &str) -> Result<Value, ParseError> {
    if let Some(inner) = text.strip_prefix('\'') {
        let inner = inner.strip_suffix('\'').unwrap_or(inner);
        let unescaped = inner.replace("''", "'");
        return Ok(Value::Text(translate_cql_to_userql(&unescaped)));
    }
    text.parse::<f64>()
        .map(Value::Number)
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))
}

fn strip_property_quotes(text: &str) -> String {
    let quoted = text.len() >= 2
        && ((text.starts_with('"') && text.ends_with('"'))
            || (text.starts_with('\'') && text.ends_with('\'')));
    if quoted {
        text[1..text.len() - 1].to_string()
    } else {
        text.to_string()
    }
}
