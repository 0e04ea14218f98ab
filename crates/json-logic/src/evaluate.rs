//! The recursive logic-tree evaluator.

use crate::coerce::{str_val, to_bool, to_double};
use crate::error::LogicError;
use crate::eval_ctx::EvalCtx;
use crate::resolve;
use crate::types::{assert_arity, Arity};
use crate::value::Value;

/// Evaluates a logic tree against the context's data.
///
/// - Non-object values are returned as literals.
/// - An object is a logic node; its first-inserted key names the operator
///   and its value supplies the operands (a non-array operand is a single
///   operand).
/// - Object operands are evaluated recursively before dispatch; every other
///   operand, arrays included, is passed through as a literal.
#[tracing::instrument(level = "trace", skip_all, fields(depth = ctx.depth))]
pub fn eval_node(node: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let map = match node {
        Value::Object(map) => map,
        other => return Ok(other.clone()),
    };
    let Some((operator, operand)) = map.first() else {
        tracing::debug!("logic node without an operator");
        return Err(LogicError::UnknownOperator(String::new()));
    };

    if ctx.depth >= ctx.options.max_depth {
        tracing::warn!(max_depth = ctx.options.max_depth, "logic tree nesting limit reached");
        return Err(LogicError::DepthExceeded(ctx.options.max_depth));
    }
    ctx.depth += 1;
    let result = eval_operator(operator, operand, ctx);
    ctx.depth -= 1;
    result
}

fn eval_operator(operator: &str, operand: &Value, ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let args = materialize(operand, ctx)?;
    match operator {
        "var" => var_form(&args, ctx.data),
        "missing" => Ok(missing_form(&args, ctx.data)),
        "missing_some" => missing_some_form(&args, ctx.data),
        "if" => Ok(if_form(args)),
        _ => {
            let def = ctx.operators.get(operator).ok_or_else(|| {
                tracing::debug!(operator, "unknown operator");
                LogicError::UnknownOperator(operator.to_string())
            })?;
            assert_arity(def.name, def.arity, args.len())?;
            (def.eval_fn)(&args)
        }
    }
}

fn materialize(operand: &Value, ctx: &mut EvalCtx<'_>) -> Result<Vec<Value>, LogicError> {
    let items = match operand {
        Value::Array(items) => items.as_slice(),
        single => std::slice::from_ref(single),
    };
    items
        .iter()
        .map(|item| match item {
            Value::Object(_) => eval_node(item, ctx),
            literal => Ok(literal.clone()),
        })
        .collect()
}

fn var_form(args: &[Value], data: &Value) -> Result<Value, LogicError> {
    let Some(path) = args.first() else {
        tracing::debug!(operator = "var", "missing variable path");
        return Err(LogicError::malformed("var", "operator expects a variable path."));
    };
    Ok(resolve::resolve_var(data, &str_val(path), Value::Null))
}

fn missing_form(args: &[Value], data: &Value) -> Value {
    let names: Vec<String> = args.iter().map(str_val).collect();
    names_to_value(resolve::missing(data, &names))
}

fn missing_some_form(args: &[Value], data: &Value) -> Result<Value, LogicError> {
    assert_arity("missing_some", Arity::AtLeast(2), args.len())?;
    let min = match &args[0] {
        Value::Number(_) | Value::String(_) if to_double(&args[0]).is_finite() => {
            to_double(&args[0]).trunc() as i64
        }
        other => {
            tracing::debug!(operator = "missing_some", got = other.type_name(), "bad minimum");
            return Err(LogicError::malformed(
                "missing_some",
                format!("expects a numeric minimum as its first operand, got {}.", str_val(other)),
            ));
        }
    };
    let Value::Array(items) = &args[1] else {
        tracing::debug!(operator = "missing_some", got = args[1].type_name(), "bad name list");
        return Err(LogicError::malformed(
            "missing_some",
            format!("expects an array of names as its second operand, got {}.", args[1].type_name()),
        ));
    };
    let names: Vec<String> = items.iter().map(str_val).collect();
    Ok(names_to_value(resolve::missing_some(data, min, &names)))
}

/// Pairs of `(condition, value)`; a trailing odd operand is the else branch.
fn if_form(args: Vec<Value>) -> Value {
    let mut iter = args.into_iter();
    loop {
        match (iter.next(), iter.next()) {
            (Some(cond), Some(value)) => {
                if to_bool(&cond) {
                    return value;
                }
            }
            (Some(otherwise), None) => return otherwise,
            _ => return Value::Null,
        }
    }
}

fn names_to_value(names: Vec<String>) -> Value {
    Value::Array(names.into_iter().map(Value::String).collect())
}
