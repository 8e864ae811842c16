use serde::Serialize;
use utoipa::ToSchema;

/// Mutation acknowledgement body.
#[derive(Debug, Serialize, ToSchema)]
pub struct StateResponse {
    #[schema(example = "Success")]
    pub state: &'static str,
}

impl StateResponse {
    pub fn success() -> Self {
        Self { state: "Success" }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
