use crate::messages::HealthRes;

/// Liveness check shared by the server binaries.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static liveness payload.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is running.
    pub fn check_health() -> HealthRes {
        HealthRes {
            status: "ok".into(),
            message: "AI Form Generator API is running".into(),
        }
    }
}
