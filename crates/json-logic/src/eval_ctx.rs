use crate::operators::registry;
use crate::types::OperatorMap;
use crate::value::Value;

/// Default limit on nested logic nodes along one evaluation path.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Evaluation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Maximum nesting of logic nodes before evaluation fails with
    /// `DepthExceeded`.
    ///
    /// Only the logic tree is bounded. Values taken from the data context are
    /// cloned and stringified recursively, so data built in code must keep its
    /// own nesting shallow enough for the thread's stack. Data decoded with
    /// `serde_json` is already capped at 128 levels.
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EvalOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// The execution context threaded through one evaluation.
///
/// Borrows the data context read-only; the only mutable state is the
/// current nesting depth.
pub struct EvalCtx<'a> {
    /// The data context `var` paths resolve against.
    pub data: &'a Value,
    /// The operator table used for dispatch.
    pub operators: &'static OperatorMap,
    pub options: EvalOptions,
    pub(crate) depth: usize,
}

impl<'a> EvalCtx<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self::with_options(data, EvalOptions::default())
    }

    pub fn with_options(data: &'a Value, options: EvalOptions) -> Self {
        EvalCtx {
            data,
            operators: registry(),
            options,
            depth: 0,
        }
    }
}
