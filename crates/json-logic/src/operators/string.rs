//! String operators.

use crate::coerce::str_val;
use crate::error::LogicError;
use crate::types::{Arity, OperatorDefinition};
use crate::value::Value;

fn cat_eval(args: &[Value]) -> Result<Value, LogicError> {
    let mut result = String::new();
    for arg in args {
        result.push_str(&str_val(arg));
    }
    Ok(Value::String(result))
}

/// `join` takes the separator first. An array second operand supplies the
/// items; otherwise every operand after the separator is an item.
fn join_eval(args: &[Value]) -> Result<Value, LogicError> {
    if args.len() < 2 {
        return Ok(Value::String(String::new()));
    }
    let separator = str_val(&args[0]);
    let items = match &args[1] {
        Value::Array(items) => items.as_slice(),
        _ => &args[1..],
    };
    let parts: Vec<String> = items.iter().map(str_val).collect();
    Ok(Value::String(parts.join(&separator)))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition { name: "cat", arity: Arity::Any, eval_fn: cat_eval },
        OperatorDefinition { name: "join", arity: Arity::Any, eval_fn: join_eval },
    ]
}
