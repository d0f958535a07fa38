use crate::app_config::MockConfig;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub mock: MockConfig,
}

impl AppState {
    /// Fixed generator seed for deterministic runs, if configured.
    pub fn seed(&self) -> Option<u64> {
        self.mock.seed
    }

    /// Emulated network latency; no-op when configured to 0.
    pub async fn simulate_latency(&self) {
        if self.mock.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.mock.latency_ms)).await;
        }
    }
}
