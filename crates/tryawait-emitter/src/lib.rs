//! try-await transform for the tryawait syntax tree.
//!
//! The pass finds asynchronous functions (or `try await` expressions) and
//! rewrites them so that a thrown exception comes back as an ordinary value.
//!
//! - `traverse` - host tree walker and transform descriptors
//! - `compilation_unit` - one file's tree plus unit-scoped state
//! - `helpers` - import injection and shared runtime helpers
//! - `transforms` - the try-await pass and its node rewriter
//! - `printer` - serializes a unit back to JavaScript text
//! - `tracing_config` - logging bootstrap; hosts call `init_tracing()` once at
//!   startup before transforming any unit

pub mod compilation_unit;
pub mod error;
pub mod helpers;
pub mod printer;
pub mod tracing_config;
pub mod transforms;
pub mod traverse;

pub use compilation_unit::CompilationUnit;
pub use error::TransformError;
pub use printer::print_unit;
pub use transforms::try_await::{
    PluginApi, Strategy, TryAwaitOptions, TryAwaitState, declare, transform_unit,
};
pub use traverse::{TransformDescriptor, traverse};

#[cfg(test)]
pub(crate) mod test_fixtures;
