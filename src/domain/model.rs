use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    pub recipient: String,
    pub message: String,
}
