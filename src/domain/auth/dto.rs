use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for POST /auth/demo
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoSessionResponse {
    pub token: String,
    pub user_id: Uuid,
    pub expires_in: i64,
}
