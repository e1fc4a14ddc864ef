//! Service Mesh Performance Specification (SMPS) test descriptions.
//!
//! Only the fields used to seed a test request are modelled; everything
//! else in the document is ignored.
mod loader;
mod types;


pub use loader::load_spec;
pub use types::{ClientSpec, PerformanceSpec};
