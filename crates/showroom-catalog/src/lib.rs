//! Showroom Catalog - the model list served by the viewer backend
//!
//! One immutable, process-wide catalog of 3D assets, built as a literal at
//! compile time. There is no persistence and no mutation after process start.

pub mod descriptor;

pub use descriptor::{models, ModelDescriptor};
