//! try-await transform
//!
//! Rewrites asynchronous code so that exceptions raised while awaiting are
//! returned as values instead of thrown.
//!
//! # Strategies
//!
//! The options select one strategy for the whole run:
//!
//! ## Whole function (`method` and `module` both given)
//!
//! ```javascript
//! async function load(url) { return await fetch(url); }
//! ```
//!
//! with `{ method: "wrap", module: "runtime-lib" }` becomes:
//!
//! ```javascript
//! import { wrap as _wrap } from "runtime-lib";
//! function load(url) {
//!     return _wrap(function* () {
//!         return yield fetch(url);
//!     }).apply(this, arguments);
//! }
//! ```
//!
//! The import is injected once per file; later functions use clones of the
//! same reference.
//!
//! ## Local expression (default)
//!
//! ```javascript
//! const result = try await load();
//! ```
//!
//! becomes `const result = await _tryAwait(load());` with the shared
//! `tryAwait` helper declared once at the top of the file.

use crate::compilation_unit::CompilationUnit;
use crate::error::TransformError;
use crate::transforms::wrap_try_await::{ExpressionRewriter, WrapTryAwait};
use crate::traverse::{TransformDescriptor, traverse};
use serde::{Deserialize, Deserializer};
use std::rc::Rc;
use tracing::{debug, trace};
use tryawait_parser::parser::syntax_kind_ext;
use tryawait_parser::{NodeArena, NodeIndex};

pub const PLUGIN_NAME: &str = "transform-try-await";

/// Shared helper used by the local-expression strategy.
pub const TRY_AWAIT_HELPER_NAME: &str = "tryAwait";

/// Host API major version this transform is written against.
pub const REQUIRED_API_VERSION: u32 = 7;

const FUNCTION_KINDS: &[u16] = &[
    syntax_kind_ext::FUNCTION_DECLARATION,
    syntax_kind_ext::FUNCTION_EXPRESSION,
    syntax_kind_ext::ARROW_FUNCTION,
    syntax_kind_ext::METHOD_DECLARATION,
];

const TRY_EXPRESSION_KINDS: &[u16] = &[syntax_kind_ext::TRY_EXPRESSION];

/// Accepts any JSON value; only non-empty strings count as present.
fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Transform options. Keys other than `method` and `module` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TryAwaitOptions {
    /// Export name of the whole-function wrapper.
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub method: Option<String>,
    /// Module the wrapper is imported from.
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub module: Option<String>,
}

impl TryAwaitOptions {
    #[must_use]
    pub fn new(method: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            module: Some(module.into()),
        }
    }

    /// Read options from a JSON value. Anything that is not an object is the
    /// empty configuration.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }
}

/// Rewrite strategy, fixed for a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Wrap every eligible function body with an imported helper.
    WholeFunction { method: String, module: String },
    /// Wrap each eligible `try await` expression with the shared helper.
    LocalExpression,
}

impl Strategy {
    /// Both `method` and `module` select the whole-function strategy; anything
    /// less falls back to local expressions.
    #[must_use]
    pub fn select(options: &TryAwaitOptions) -> Self {
        match (&options.method, &options.module) {
            (Some(method), Some(module)) if !method.is_empty() && !module.is_empty() => {
                Self::WholeFunction {
                    method: method.clone(),
                    module: module.clone(),
                }
            }
            _ => Self::LocalExpression,
        }
    }

    /// Node kinds this strategy visits.
    #[must_use]
    pub const fn visited_kinds(&self) -> &'static [u16] {
        match self {
            Self::WholeFunction { .. } => FUNCTION_KINDS,
            Self::LocalExpression => TRY_EXPRESSION_KINDS,
        }
    }
}

/// Per-unit state.
#[derive(Debug, Default)]
pub struct TryAwaitState {
    /// Reference to the imported wrapper, set by the first eligible function
    /// of the unit.
    pub method_wrapper: Option<NodeIndex>,
}

/// The host's plugin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginApi {
    pub version: u32,
}

impl Default for PluginApi {
    fn default() -> Self {
        Self {
            version: REQUIRED_API_VERSION,
        }
    }
}

impl PluginApi {
    pub fn assert_version(&self, required: u32) -> Result<(), TransformError> {
        if self.version == required {
            Ok(())
        } else {
            Err(TransformError::IncompatibleHost {
                required,
                actual: self.version,
            })
        }
    }
}

/// Marked `async` and not a generator.
#[must_use]
pub fn is_eligible(arena: &NodeArena, idx: NodeIndex) -> bool {
    let Some(node) = arena.get(idx) else {
        return false;
    };
    if let Some(func) = arena.get_function(node) {
        return func.is_async && !func.asterisk_token;
    }
    if let Some(try_expr) = arena.get_try_expr(node) {
        return try_expr.is_async && !try_expr.is_generator;
    }
    false
}

/// Build the transform with the default rewriter.
pub fn declare(
    api: &PluginApi,
    options: &TryAwaitOptions,
) -> Result<TransformDescriptor<TryAwaitState>, TransformError> {
    declare_with_rewriter(api, options, Rc::new(WrapTryAwait))
}

pub fn declare_with_rewriter(
    api: &PluginApi,
    options: &TryAwaitOptions,
    rewriter: Rc<dyn ExpressionRewriter>,
) -> Result<TransformDescriptor<TryAwaitState>, TransformError> {
    api.assert_version(REQUIRED_API_VERSION)?;

    let strategy = Strategy::select(options);
    debug!(?strategy, "[try-await] strategy selected");

    let kinds = strategy.visited_kinds();
    let descriptor = TransformDescriptor::new(PLUGIN_NAME);
    Ok(match strategy {
        Strategy::WholeFunction { method, module } => {
            descriptor.on_kinds(kinds, move |idx, unit, state| {
                visit_function(idx, unit, state, &method, &module, rewriter.as_ref())
            })
        }
        Strategy::LocalExpression => descriptor.on_kinds(kinds, move |idx, unit, _state| {
            visit_try_expression(idx, unit, rewriter.as_ref())
        }),
    })
}

/// Declare with the default host API and run over one unit.
pub fn transform_unit(
    unit: &mut CompilationUnit,
    options: &TryAwaitOptions,
) -> Result<TryAwaitState, TransformError> {
    let descriptor = declare(&PluginApi::default(), options)?;
    traverse(unit, &descriptor)
}

fn visit_function(
    idx: NodeIndex,
    unit: &mut CompilationUnit,
    state: &mut TryAwaitState,
    method: &str,
    module: &str,
    rewriter: &dyn ExpressionRewriter,
) -> Result<(), TransformError> {
    if !is_eligible(&unit.arena, idx) {
        return Ok(());
    }

    let wrap_async = match state.method_wrapper {
        Some(cached) => unit.clone_reference(cached)?,
        None => {
            let reference = unit.add_named(method, module)?;
            state.method_wrapper = Some(reference);
            reference
        }
    };

    trace!(file = %unit.file_name, node = idx.0, "[try-await] wrapping function");
    rewriter.rewrite(unit, idx, wrap_async)
}

fn visit_try_expression(
    idx: NodeIndex,
    unit: &mut CompilationUnit,
    rewriter: &dyn ExpressionRewriter,
) -> Result<(), TransformError> {
    if !is_eligible(&unit.arena, idx) {
        return Ok(());
    }

    let wrap_async = unit.add_helper(TRY_AWAIT_HELPER_NAME)?;
    trace!(file = %unit.file_name, node = idx.0, "[try-await] wrapping try expression");
    rewriter.rewrite(unit, idx, wrap_async)
}

#[cfg(test)]
#[path = "../../tests/try_await.rs"]
mod tests;
