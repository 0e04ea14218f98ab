//! Arithmetic operators. Every operand goes through `to_double`, so
//! unparseable operands turn the result into NaN instead of failing.

use crate::coerce::to_double;
use crate::error::LogicError;
use crate::types::{Arity, OperatorDefinition};
use crate::value::Value;

fn add_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Number(args.iter().map(to_double).fold(0.0, |acc, n| acc + n)))
}

fn multiply_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Number(args.iter().map(to_double).fold(1.0, |acc, n| acc * n)))
}

fn subtract_eval(args: &[Value]) -> Result<Value, LogicError> {
    let first = to_double(&args[0]);
    let result = match args.get(1) {
        None => -first,
        Some(second) => first - to_double(second),
    };
    Ok(Value::Number(result))
}

// A lone operand is returned unchanged, not inverted.
fn divide_eval(args: &[Value]) -> Result<Value, LogicError> {
    let first = to_double(&args[0]);
    let result = match args.get(1) {
        None => first,
        Some(second) => first / to_double(second),
    };
    Ok(Value::Number(result))
}

fn mod_eval(args: &[Value]) -> Result<Value, LogicError> {
    Ok(Value::Number(to_double(&args[0]) % to_double(&args[1])))
}

// NaN in any operand poisons the result, unlike `f64::min`/`f64::max`.
fn nan_or(a: f64, b: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        pick(a, b)
    }
}

fn min_eval(args: &[Value]) -> Result<Value, LogicError> {
    let m = args
        .iter()
        .map(to_double)
        .reduce(|a, b| nan_or(a, b, f64::min))
        .unwrap_or(f64::NAN);
    Ok(Value::Number(m))
}

fn max_eval(args: &[Value]) -> Result<Value, LogicError> {
    let m = args
        .iter()
        .map(to_double)
        .reduce(|a, b| nan_or(a, b, f64::max))
        .unwrap_or(f64::NAN);
    Ok(Value::Number(m))
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition { name: "+", arity: Arity::Any, eval_fn: add_eval },
        OperatorDefinition { name: "*", arity: Arity::Any, eval_fn: multiply_eval },
        OperatorDefinition { name: "-", arity: Arity::AtLeast(1), eval_fn: subtract_eval },
        OperatorDefinition { name: "/", arity: Arity::AtLeast(1), eval_fn: divide_eval },
        OperatorDefinition { name: "%", arity: Arity::AtLeast(2), eval_fn: mod_eval },
        OperatorDefinition { name: "min", arity: Arity::Any, eval_fn: min_eval },
        OperatorDefinition { name: "max", arity: Arity::Any, eval_fn: max_eval },
    ]
}
