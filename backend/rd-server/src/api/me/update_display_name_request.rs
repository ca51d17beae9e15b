use serde::Deserialize;

/// Request body for renaming the signed-in player
#[derive(Debug, Deserialize)]
pub struct UpdateDisplayNameRequest {
    pub display_name: String,
}
