//! Test request building: parameter resolution, validation and the
//! submission payload.
mod name;
mod payload;
mod resolve;
mod stage;


pub use name::{GENERATED_NAME_LEN, random_test_name};
pub use payload::{build_payload, submission_query};
pub use resolve::{ResolvedParameters, TestConfig, load_spec_overlay, resolve_test_config};
pub use stage::RunStage;
