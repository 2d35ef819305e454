use serde::{Deserialize, Serialize};

use crate::models::question::Question;

/// One user's answer to one question, stamped in unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub question: Question,
    pub user_answer: String,
    pub date_unix: i64,
}
