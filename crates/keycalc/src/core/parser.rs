//! Tokenizer and recursive descent parser for machine-form expressions
//!
//! Accepts exactly what the accumulator can build (decimal literals joined by
//! `+ - * /`) plus `**`, unary signs, parentheses, and the exponent literals
//! that [`Number`]'s `Display` emits, so a result can be chained into the
//! next expression.

use crate::core::{CalcError, CalcResult, Number, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(Number),
    /// Binary operator (`+` and `-` double as unary signs)
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(Number),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: impl Into<Number>) -> Self {
        Self::Number(value.into())
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '*' => {
                self.advance();
                if self.current_char() == Some('*') {
                    self.advance();
                    Token::Operator(Operation::Power)
                } else {
                    Token::Operator(Operation::Multiply)
                }
            }
            '+' | '-' | '/' => {
                self.advance();
                match Operation::from_char(ch) {
                    Some(op) => Token::Operator(op),
                    None => return Err(CalcError::parse(format!("Unexpected character: '{ch}'"))),
                }
            }
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            _ => {
                return Err(CalcError::parse(format!("Unexpected character: '{ch}'")));
            }
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn skip_digits(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// True when the `e`/`E` under the cursor starts an exponent (`e5`, `e+16`, `e-05`)
    fn exponent_follows(&self) -> bool {
        let mut rest = self.input[self.pos..].chars().skip(1);
        match rest.next() {
            Some('+' | '-') => rest.next().is_some_and(|c| c.is_ascii_digit()),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut is_real = false;

        self.skip_digits();
        if self.current_char() == Some('.') {
            is_real = true;
            self.advance();
            self.skip_digits();
        }
        if matches!(self.current_char(), Some('e' | 'E')) && self.exponent_follows() {
            is_real = true;
            self.advance();
            if matches!(self.current_char(), Some('+' | '-')) {
                self.advance();
            }
            self.skip_digits();
        }

        let literal = &self.input[start..self.pos];
        let invalid = || CalcError::parse(format!("Invalid number: '{literal}'"));

        let value = if is_real {
            Number::Real(literal.parse().map_err(|_| invalid())?)
        } else {
            match literal.parse::<i64>() {
                Ok(n) => Number::Integer(n),
                // Too wide for i64: keep the magnitude as a real
                Err(_) => Number::Real(literal.parse().map_err(|_| invalid())?),
            }
        };

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('+' | '-') unary | power
/// power      ::= primary ('**' unary)?    // Right associative
/// primary    ::= NUMBER | '(' expression ')'
/// ```
///
/// `**` binds tighter than a leading sign, so `-2**2` is `-(2**2)`.
///
/// Signs, parentheses, powers and each link of an operator chain count
/// toward [`MAX_DEPTH`]; the resulting tree is bounded by it, so evaluating
/// and dropping it cannot exhaust the stack.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

/// Deepest nesting a parsed expression may reach
pub const MAX_DEPTH: usize = 256;

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let tokens = Tokenizer::new(trimmed).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::parse(format!(
                "Unexpected token {token:?} at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> CalcResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::parse("Expression nested too deeply"));
        }
        Ok(())
    }

    fn peek_operator(&self) -> Option<Operation> {
        match self.current() {
            Some(Token::Operator(op)) => Some(*op),
            _ => None,
        }
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let entry = self.depth;
        let mut left = self.parse_term()?;

        while let Some(op @ (Operation::Add | Operation::Subtract)) = self.peek_operator() {
            self.advance();
            self.descend()?;
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        self.depth = entry;
        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let entry = self.depth;
        let mut left = self.parse_unary()?;

        while let Some(op @ (Operation::Multiply | Operation::Divide)) = self.peek_operator() {
            self.advance();
            self.descend()?;
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        self.depth = entry;
        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        let node = match self.peek_operator() {
            Some(Operation::Subtract) => {
                self.advance();
                self.descend()?;
                AstNode::negate(self.parse_unary()?)
            }
            Some(Operation::Add) => {
                self.advance();
                self.descend()?;
                self.parse_unary()?
            }
            _ => return self.parse_power(),
        };
        self.depth -= 1;
        Ok(node)
    }

    fn parse_power(&mut self) -> CalcResult<AstNode> {
        let base = self.parse_primary()?;

        if self.peek_operator() == Some(Operation::Power) {
            self.advance();
            self.descend()?;
            let exponent = self.parse_unary()?;
            self.depth -= 1;
            return Ok(AstNode::binary(base, Operation::Power, exponent));
        }

        Ok(base)
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        let token = self
            .advance()
            .cloned()
            .ok_or_else(|| CalcError::parse("Unexpected end of expression"))?;

        match token {
            Token::Number(n) => Ok(AstNode::Number(n)),
            Token::LeftParen => {
                self.descend()?;
                let expr = self.parse_expression()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token::RightParen) => Ok(expr),
                    Some(t) => Err(CalcError::parse(format!("Expected ')' but found {t:?}"))),
                    None => Err(CalcError::parse("Unclosed parenthesis")),
                }
            }
            other => Err(CalcError::parse(format!("Unexpected token: {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Tokenizer::new(input).tokenize().unwrap()
    }

    // ===== Tokenizer tests =====

    #[test]
    fn test_tokenize_integer() {
        assert_eq!(tokens("42"), vec![Token::Number(Number::Integer(42))]);
    }

    #[test]
    fn test_tokenize_decimal_forms() {
        assert_eq!(tokens("3.14"), vec![Token::Number(Number::Real(3.14))]);
        assert_eq!(tokens(".5"), vec![Token::Number(Number::Real(0.5))]);
        assert_eq!(tokens("5."), vec![Token::Number(Number::Real(5.0))]);
    }

    #[test]
    fn test_tokenize_exponent_literals() {
        assert_eq!(tokens("1e+16"), vec![Token::Number(Number::Real(1e16))]);
        assert_eq!(tokens("1.5e-05"), vec![Token::Number(Number::Real(1.5e-5))]);
        assert_eq!(tokens("2E3"), vec![Token::Number(Number::Real(2000.0))]);
    }

    #[test]
    fn test_tokenize_dangling_exponent_is_rejected() {
        assert!(matches!(
            Tokenizer::new("2e").tokenize(),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_tokenize_operators() {
        assert_eq!(
            tokens("+ - * / **"),
            vec![
                Token::Operator(Operation::Add),
                Token::Operator(Operation::Subtract),
                Token::Operator(Operation::Multiply),
                Token::Operator(Operation::Divide),
                Token::Operator(Operation::Power),
            ]
        );
    }

    #[test]
    fn test_tokenize_no_spaces() {
        assert_eq!(
            tokens("3+4*2"),
            vec![
                Token::Number(Number::Integer(3)),
                Token::Operator(Operation::Add),
                Token::Number(Number::Integer(4)),
                Token::Operator(Operation::Multiply),
                Token::Number(Number::Integer(2)),
            ]
        );
    }

    #[test]
    fn test_tokenize_parentheses() {
        assert_eq!(tokens("()"), vec![Token::LeftParen, Token::RightParen]);
    }

    #[test]
    fn test_tokenize_leading_zeros() {
        assert_eq!(tokens("007"), vec![Token::Number(Number::Integer(7))]);
    }

    #[test]
    fn test_tokenize_wide_integer_becomes_real() {
        assert_eq!(
            tokens("99999999999999999999"),
            vec![Token::Number(Number::Real(1e20))]
        );
    }

    #[test]
    fn test_tokenize_invalid_char() {
        assert!(matches!(
            Tokenizer::new("2 @ 3").tokenize(),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_tokenize_error_marker_is_rejected() {
        assert!(matches!(
            Tokenizer::new("Error5").tokenize(),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_tokenize_lone_point() {
        assert!(matches!(
            Tokenizer::new(".").tokenize(),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokens("").is_empty());
        assert!(tokens("   ").is_empty());
    }

    // ===== Parser tests =====

    #[test]
    fn test_parse_single_number() {
        assert_eq!(Parser::parse_str("42").unwrap(), AstNode::number(42));
    }

    #[test]
    fn test_parse_precedence_mul_over_add() {
        assert_eq!(
            Parser::parse_str("2+3*4").unwrap(),
            AstNode::binary(
                AstNode::number(2),
                Operation::Add,
                AstNode::binary(AstNode::number(3), Operation::Multiply, AstNode::number(4)),
            )
        );
    }

    #[test]
    fn test_parse_left_associative_subtraction() {
        // 8-3-2 = (8-3)-2
        assert_eq!(
            Parser::parse_str("8-3-2").unwrap(),
            AstNode::binary(
                AstNode::binary(AstNode::number(8), Operation::Subtract, AstNode::number(3)),
                Operation::Subtract,
                AstNode::number(2),
            )
        );
    }

    #[test]
    fn test_parse_power_right_associative() {
        assert_eq!(
            Parser::parse_str("2**3**2").unwrap(),
            AstNode::binary(
                AstNode::number(2),
                Operation::Power,
                AstNode::binary(AstNode::number(3), Operation::Power, AstNode::number(2)),
            )
        );
    }

    #[test]
    fn test_parse_power_binds_tighter_than_sign() {
        assert_eq!(
            Parser::parse_str("-2**2").unwrap(),
            AstNode::negate(AstNode::binary(
                AstNode::number(2),
                Operation::Power,
                AstNode::number(2)
            ))
        );
    }

    #[test]
    fn test_parse_signed_exponent() {
        assert_eq!(
            Parser::parse_str("2**-1").unwrap(),
            AstNode::binary(
                AstNode::number(2),
                Operation::Power,
                AstNode::negate(AstNode::number(1))
            )
        );
    }

    #[test]
    fn test_parse_operator_followed_by_sign() {
        // What the keypad builds from 3, *, -, 4
        assert_eq!(
            Parser::parse_str("3*-4").unwrap(),
            AstNode::binary(
                AstNode::number(3),
                Operation::Multiply,
                AstNode::negate(AstNode::number(4))
            )
        );
    }

    #[test]
    fn test_parse_unary_plus_is_identity() {
        assert_eq!(Parser::parse_str("+5").unwrap(), AstNode::number(5));
        assert_eq!(
            Parser::parse_str("3++4").unwrap(),
            AstNode::binary(AstNode::number(3), Operation::Add, AstNode::number(4))
        );
    }

    #[test]
    fn test_parse_parentheses() {
        assert_eq!(
            Parser::parse_str("(2+3)*4").unwrap(),
            AstNode::binary(
                AstNode::binary(AstNode::number(2), Operation::Add, AstNode::number(3)),
                Operation::Multiply,
                AstNode::number(4),
            )
        );
    }

    #[test]
    fn test_parse_empty_expression() {
        assert!(matches!(Parser::parse_str(""), Err(CalcError::EmptyExpression)));
        assert!(matches!(Parser::parse_str("  "), Err(CalcError::EmptyExpression)));
    }

    #[test]
    fn test_parse_trailing_operator() {
        assert!(matches!(Parser::parse_str("3+"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parse_consecutive_binary_operators() {
        assert!(matches!(Parser::parse_str("3+*4"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parse_double_point_operand() {
        assert!(matches!(Parser::parse_str("1.2.3"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parse_unbalanced_parentheses() {
        assert!(matches!(Parser::parse_str("(2+3"), Err(CalcError::ParseError(_))));
        assert!(matches!(Parser::parse_str("2+3)"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parser_parse_empty_tokens() {
        let mut parser = Parser::new(vec![]);
        assert!(matches!(parser.parse(), Err(CalcError::EmptyExpression)));
    }

    // ===== Nesting limit =====

    fn nested_parens(levels: usize) -> String {
        format!("{}1{}", "(".repeat(levels), ")".repeat(levels))
    }

    #[test]
    fn test_parse_nesting_within_limit() {
        assert!(Parser::parse_str(&nested_parens(100)).is_ok());
        assert!(Parser::parse_str(&format!("3{}4", "-".repeat(100))).is_ok());
        let sum = vec!["1"; 200].join("+");
        assert!(Parser::parse_str(&sum).is_ok());
    }

    #[test]
    fn test_parse_long_sign_run_is_rejected() {
        let input = format!("3{}4", "-".repeat(200_000));
        let err = Parser::parse_str(&input).unwrap_err();
        assert_eq!(err, CalcError::parse("Expression nested too deeply"));
    }

    #[test]
    fn test_parse_deep_parentheses_are_rejected() {
        let err = Parser::parse_str(&nested_parens(200_000)).unwrap_err();
        assert_eq!(err, CalcError::parse("Expression nested too deeply"));
    }

    #[test]
    fn test_parse_long_operator_chain_is_rejected() {
        let chain = vec!["2"; MAX_DEPTH + 2].join("*");
        assert!(matches!(Parser::parse_str(&chain), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parse_depth_resets_between_siblings() {
        let sibling = nested_parens(MAX_DEPTH - 2);
        let input = format!("{sibling}+{sibling}");
        assert!(Parser::parse_str(&input).is_ok());
    }
}
