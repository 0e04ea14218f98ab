//! Sequence operators.

use crate::coerce;
use crate::error::LogicError;
use crate::types::{Arity, OperatorDefinition};
use crate::value::Value;

fn in_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Bool(coerce::contains(&args[1], &args[0])))
}

/// Flattens array operands one level; scalars are appended as-is.
fn merge_eval(args: &[Value]) -> Result<Value, LogicError> {
    let mut result = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Array(items) => result.extend(items.iter().cloned()),
            other => result.push(other.clone()),
        }
    }
    Ok(Value::Array(result))
}

fn count_eval(args: &[Value]) -> Result<Value, LogicError> {
    let n = args.iter().filter(|v| coerce::to_bool(v)).count();
    Ok(Value::Number(n as f64))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition { name: "in", arity: Arity::AtLeast(2), eval_fn: in_eval },
        OperatorDefinition { name: "merge", arity: Arity::Any, eval_fn: merge_eval },
        OperatorDefinition { name: "count", arity: Arity::Any, eval_fn: count_eval },
    ]
}
