/// Liveness and health endpoints
pub mod general;
/// Receipt processing endpoints
pub mod receipt;
