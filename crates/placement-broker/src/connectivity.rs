use placement_core::{BackendStatus, StatsSummary};
use placement_network::{ApiClient, RemoteError};

/// Result of the single startup poll of `GET /api/stats`.
#[derive(Debug, Clone, PartialEq)]
pub struct Connectivity {
    pub status: BackendStatus,
    /// Present only when the server answered with `success: true`.
    pub stats: Option<StatsSummary>,
}

impl Connectivity {
    pub fn offline() -> Self {
        Self {
            status: BackendStatus::Offline,
            stats: None,
        }
    }
}

/// Any 2xx answer counts as connected, even when the body is unusable.
pub async fn check_backend(client: &ApiClient) -> Connectivity {
    match client.stats().await {
        Ok(stats) => {
            tracing::info!(target: "placement_broker", api_base = client.api_base(), "backend connected");
            Connectivity {
                status: BackendStatus::Connected,
                stats: stats.success.then_some(stats),
            }
        }
        Err(RemoteError::Malformed(reason)) => {
            tracing::warn!(target: "placement_broker", %reason, "stats body unreadable");
            Connectivity {
                status: BackendStatus::Connected,
                stats: None,
            }
        }
        Err(error) => {
            tracing::info!(target: "placement_broker", error = %error, "backend offline; demo mode");
            Connectivity::offline()
        }
    }
}
