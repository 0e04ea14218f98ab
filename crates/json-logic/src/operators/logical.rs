//! Boolean operators. Operands arrive already evaluated, so `and`/`or`
//! inspect every operand rather than short-circuiting evaluation.

use crate::coerce;
use crate::error::LogicError;
use crate::types::{Arity, OperatorDefinition};
use crate::value::Value;

fn not_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(!coerce::to_bool(&args[0])))
}

fn bool_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(coerce::to_bool(&args[0])))
}

fn and_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(args.iter().all(coerce::to_bool)))
}

fn or_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(args.iter().any(coerce::to_bool)))
}

fn ternary_eval(args: &[Value]) -> Result<Value, LogicError> {
    if coerce::to_bool(&args[0]) {
        Ok(args[1].clone())
    } else {
        Ok(args[2].clone())
    }
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition { name: "!", arity: Arity::AtLeast(1), eval_fn: not_eval },
        OperatorDefinition { name: "!!", arity: Arity::AtLeast(1), eval_fn: bool_eval },
        OperatorDefinition { name: "and", arity: Arity::Any, eval_fn: and_eval },
        OperatorDefinition { name: "or", arity: Arity::Any, eval_fn: or_eval },
        OperatorDefinition { name: "?:", arity: Arity::AtLeast(3), eval_fn: ternary_eval },
    ]
}
