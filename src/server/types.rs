use serde::Serialize;

pub use crate::relay::QueryRequest;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
