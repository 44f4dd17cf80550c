//! AST evaluator

use crate::core::parser::{AstNode, Parser};
use crate::core::{Arithmetic, CalcResult, Number, Operation};

/// Evaluator for AST expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<Number> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Negate(inner) => Ok(self.evaluate(inner)?.negate()),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                Arithmetic::calculate(left_val, right_val, *op)
            }
        }
    }

    /// Evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<Number> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }

    /// Raises an operand expression to `exponent`.
    ///
    /// The operand is evaluated on its own first, so `-3` squared is `9`.
    pub fn power(&self, operand: &str, exponent: Number) -> CalcResult<Number> {
        let base = self.evaluate_str(operand)?;
        Arithmetic::calculate(base, exponent, Operation::Power)
    }
}
