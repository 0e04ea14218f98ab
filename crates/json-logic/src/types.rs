use crate::error::LogicError;
use crate::value::Value;
use std::collections::HashMap;

/// Minimum operand count an operator indexes into. Extra operands are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arity {
    /// Any number of operands, including none.
    Any,
    /// At least `n` operands.
    AtLeast(usize),
}

/// The type of an operator evaluation function.
///
/// Receives the fully evaluated argument list.
pub type OperatorFn = fn(&[Value]) -> Result<Value, LogicError>;

/// A registered operator.
pub struct OperatorDefinition {
    pub name: &'static str,
    pub arity: Arity,
    pub eval_fn: OperatorFn,
}

/// Map of operator name -> definition.
pub type OperatorMap = HashMap<&'static str, OperatorDefinition>;

/// Asserts that an operator received enough operands.
pub fn assert_arity(operator: &str, arity: Arity, args_len: usize) -> Result<(), LogicError> {
    match arity {
        Arity::Any => Ok(()),
        Arity::AtLeast(min) if args_len < min => Err(LogicError::malformed(
            operator,
            if min == 1 {
                "operator expects at least one operand.".to_string()
            } else {
                format!("operator expects at least {} operands.", min)
            },
        )),
        Arity::AtLeast(_) => Ok(()),
    }
}

/// Builds an `OperatorMap` from a list of operator definitions.
pub fn operators_to_map(operators: Vec<OperatorDefinition>) -> OperatorMap {
    operators.into_iter().map(|op| (op.name, op)).collect()
}
