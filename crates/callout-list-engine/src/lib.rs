pub mod filter;
pub mod io;
pub mod models;
pub mod parsing;
pub mod pipeline;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use filter::*;
pub use io::*;
pub use models::{callout::*, note::*};
pub use pipeline::*;
pub use render::*;
