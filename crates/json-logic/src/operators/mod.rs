//! The fixed operator table.
//!
//! `var`, `missing`, `missing_some` and `if` are special forms handled by the
//! evaluator and are not registered here.

pub mod arithmetic;
pub mod array;
pub mod comparison;
pub mod logical;
pub mod string;

use crate::types::{operators_to_map, OperatorDefinition, OperatorMap};
use std::sync::OnceLock;

/// All operators combined.
pub fn all_operators() -> Vec<OperatorDefinition> {
    let mut ops = Vec::new();
    ops.extend(comparison::operators());
    ops.extend(logical::operators());
    ops.extend(arithmetic::operators());
    ops.extend(string::operators());
    ops.extend(array::operators());
    ops
}

/// Build a fresh operator map from all operators.
pub fn operators_map() -> OperatorMap {
    operators_to_map(all_operators())
}

/// The process-wide operator table, built on first use and read-only after.
pub fn registry() -> &'static OperatorMap {
    static REGISTRY: OnceLock<OperatorMap> = OnceLock::new();
    REGISTRY.get_or_init(operators_map)
}
