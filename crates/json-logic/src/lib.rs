//! JSON Logic evaluator.
//!
//! # Overview
//!
//! Rules are plain JSON: a logic node is an object with a single key, the
//! operator, whose value holds the operands, e.g. `{"==": [{"var": "a"}, 1]}`.
//! Evaluation is a pure function of the rule and a read-only data context.
//!
//! Truthiness is deliberately narrow: only `null` and `false` are falsy, so
//! `0`, `""` and `[]` all count as true.
//!
//! # Example
//!
//! ```
//! use json_logic::{apply, Value};
//! use serde_json::json;
//!
//! let rule = Value::from(json!({"and": [
//!     {">": [{"var": "temp"}, 110]},
//!     {"==": [{"var": "pie.filling"}, "apple"]}
//! ]}));
//! let data = Value::from(json!({"temp": 120, "pie": {"filling": "apple"}}));
//!
//! assert_eq!(apply(&rule, &data).unwrap(), Value::Bool(true));
//! ```

pub mod coerce;
pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod operators;
pub mod resolve;
pub mod types;
pub mod value;

// Re-export the core public API
pub use error::LogicError;
pub use eval_ctx::{EvalCtx, EvalOptions, DEFAULT_MAX_DEPTH};
pub use evaluate::eval_node;
pub use operators::{operators_map, registry};
pub use types::{Arity, OperatorDefinition, OperatorFn, OperatorMap};
pub use value::{Map, Value};

/// Evaluates `logic` against `data` with default options.
pub fn apply(logic: &Value, data: &Value) -> Result<Value, LogicError> {
    apply_with(logic, data, EvalOptions::default())
}

/// Evaluates `logic` against `data` with explicit options.
pub fn apply_with(logic: &Value, data: &Value, options: EvalOptions) -> Result<Value, LogicError> {
    let mut ctx = EvalCtx::with_options(data, options);
    eval_node(logic, &mut ctx)
}

/// Decodes `logic_text` as JSON and evaluates it against `data`.
pub fn evaluate(logic_text: &str, data: &Value) -> Result<Value, LogicError> {
    let logic: Value = serde_json::from_str(logic_text).map_err(|e| {
        tracing::debug!(error = %e, "failed to decode logic text");
        LogicError::from(e)
    })?;
    apply(&logic, data)
}
