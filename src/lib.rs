#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions, // Rust naming conventions
    clippy::missing_errors_doc,      // the only error is Cancelled, documented on its type
)]

pub mod cache;
pub mod cancel;
pub(crate) mod classify;
pub mod context;
pub mod error;
pub mod unit;

use std::sync::Arc;

pub use cache::VerdictCache;
pub use cancel::CancellationToken;
pub use context::{NodeContext, UnitContext};
pub use error::Cancelled;
pub use unit::SourceUnit;

/// Whether `unit` should be treated as generated code, memoized in `cache`.
///
/// `true` when the base file name matches `*.designer.<ext>` (any case),
/// when a leading comment contains `<auto-generated` or `<autogenerated`,
/// or when the unit is blank. An absent unit yields `false`. Repeated calls
/// for the same unit are O(1) after the first; the verdict is a pure
/// function of the unit's path and content, so it is stable for the life
/// of the cache.
pub fn is_generated_code(
    unit: Option<&Arc<SourceUnit>>,
    cache: &VerdictCache,
    cancel: &CancellationToken,
) -> Result<bool, Cancelled> {
    cache.is_generated(unit, cancel)
}

/// Adapter for the "point of interest" context shape: extract the
/// enclosing unit and cancellation token, delegate to the cache.
pub fn node_context_is_generated(
    ctx: &NodeContext,
    cache: &VerdictCache,
) -> Result<bool, Cancelled> {
    cache.is_generated(ctx.unit(), ctx.cancellation())
}

/// Adapter for the "whole unit" context shape.
pub fn unit_context_is_generated(
    ctx: &UnitContext,
    cache: &VerdictCache,
) -> Result<bool, Cancelled> {
    cache.is_generated(ctx.unit(), ctx.cancellation())
}
