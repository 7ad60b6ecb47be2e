/*
[INPUT]:  Public API exports for taskboard-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod board;

// Re-export main types for convenience
pub use board::{BoardState, TaskBoard};
