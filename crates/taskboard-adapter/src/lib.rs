/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public TaskBoard adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{ClientConfig, Result, TaskStoreClient, TaskStoreError};

// Re-export all wire types
pub use types::*;
