use std::path::PathBuf;
use std::time::Duration;

use perfctl::http::Endpoints;
use perfctl::perf::{RunStage, TestConfig};

/// Everything the network phase needs; built without touching the network.
pub(in crate::entry) struct PerfPlan {
    pub(super) config: TestConfig,
    pub(super) endpoints: Endpoints,
    pub(super) token_path: PathBuf,
    pub(super) connect_timeout: Duration,
    pub(super) request_timeout: Duration,
    pub(super) stage: RunStage,
}
