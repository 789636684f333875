// HTTP handlers, one module per resource

pub mod guilds;
pub mod items;
pub mod players;
pub mod root;

use serde::Serialize;

/// Plain confirmation body, e.g. after a delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Value of the `success` field in creation responses
pub(crate) const SUCCESS: &str = "true";
