pub mod config;
pub mod emitter;
pub mod errors;
pub mod hypernymgraph;
pub mod input;
pub mod inventory;
pub mod overrides;
pub mod resolution;
pub mod report;
pub mod types;
