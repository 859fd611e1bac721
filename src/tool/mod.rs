// ABOUTME: Tool module - defines tools, registry, and execution results.
// ABOUTME: Core abstraction for the operations the server exposes.

mod registry;
mod result;
mod traits;

pub use registry::*;
pub use result::*;
pub use traits::*;

#[cfg(test)]
mod registry_test;
