//! Transforms
//!
//! - `try_await` - decides where exceptions from awaited operations should be
//!   returned as values, and which helper to route them through
//! - `wrap_try_await` - rewrites a single function or `try await` expression
//!   to call that helper

pub mod try_await;
pub mod wrap_try_await;
