//! Typed numeric values.
//!
//! [`TypedValue`] is the leaf of the variable system: every asset and every
//! materialized instance stores exactly one. All mutations go through
//! [`TypedValue::apply`], which enforces the value invariants:
//!
//! 1. **Clamp**: with limits, `min <= current <= max` after `set`/`change`
//! 2. **Truncate**: integer values drop their fractional part toward zero
//! 3. **Reset**: restores the default verbatim, without clamping
//!
//! Out-of-range inputs are clamped silently; no mutation can fail.

mod kind;
mod limits;
mod typed;

pub use kind::ValueKind;
pub use limits::Limits;
pub use typed::{Mutation, TypedValue, ValueChange};
