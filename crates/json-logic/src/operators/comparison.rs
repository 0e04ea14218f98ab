//! Equality and ordering operators.

use crate::coerce;
use crate::error::LogicError;
use crate::types::{Arity, OperatorDefinition};
use crate::value::Value;

fn eq_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(coerce::soft_equals(&args[0], &args[1])))
}

fn ne_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(!coerce::soft_equals(&args[0], &args[1])))
}

fn strict_eq_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(coerce::hard_equals(&args[0], &args[1])))
}

fn strict_ne_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(!coerce::hard_equals(&args[0], &args[1])))
}

fn gt_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(coerce::less(&args[1], &args[0])))
}

fn ge_eval(args: &[Value]) -> Result<Value, LogicError> {
    let (left, right) = (&args[0], &args[1]);
    Ok(Value::Bool(
        coerce::less(right, left) || coerce::soft_equals(left, right),
    ))
}

fn lt_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(coerce::less(&args[0], &args[1])))
}

fn le_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(coerce::less_or_equal(&args[0], &args[1])))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition { name: "==", arity: Arity::AtLeast(2), eval_fn: eq_eval },
        OperatorDefinition { name: "!=", arity: Arity::AtLeast(2), eval_fn: ne_eval },
        OperatorDefinition { name: "===", arity: Arity::AtLeast(2), eval_fn: strict_eq_eval },
        OperatorDefinition { name: "!==", arity: Arity::AtLeast(2), eval_fn: strict_ne_eval },
        OperatorDefinition { name: ">", arity: Arity::AtLeast(2), eval_fn: gt_eval },
        OperatorDefinition { name: ">=", arity: Arity::AtLeast(2), eval_fn: ge_eval },
        OperatorDefinition { name: "<", arity: Arity::AtLeast(2), eval_fn: lt_eval },
        OperatorDefinition { name: "<=", arity: Arity::AtLeast(2), eval_fn: le_eval },
    ]
}
