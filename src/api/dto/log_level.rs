//! DTOs for the runtime log-level endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// New filter, either a bare level (`debug`) or full directives
/// (`blog_backend=debug,tower_http=info`).
#[derive(Debug, Deserialize, Validate)]
pub struct LogLevelRequest {
    #[validate(length(min = 1, message = "level is required"))]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogLevelResponse {
    pub message: String,
}
