use serde::{Deserialize, Serialize};

/// Body of `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub success: bool,
    pub total_students: u64,
    pub placed_students: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_rate: Option<f64>,
    pub avg_cgpa: f64,
    pub avg_iq: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
}

impl StatsSummary {
    /// Figures reported when no dataset backs the server.
    pub fn demo() -> Self {
        Self {
            success: true,
            total_students: 100,
            placed_students: 65,
            placement_rate: Some(65.0),
            avg_cgpa: 7.2,
            avg_iq: 128.5,
            data_source: Some("demo".to_string()),
        }
    }

    /// Placement rate in percent, derived from the counts when the server omits it.
    pub fn placement_rate(&self) -> f64 {
        match self.placement_rate {
            Some(rate) => rate,
            None if self.total_students == 0 => 0.0,
            None => self.placed_students as f64 * 100.0 / self.total_students as f64,
        }
    }
}

/// Connectivity indicator shown at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Connected,
    Offline,
}

impl std::fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BackendStatus::Connected => "✅ Connected",
            BackendStatus::Offline => "⚠️ Offline (Demo Mode)",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_stats_body() {
        let stats: StatsSummary = serde_json::from_str(
            r#"{"success":true,"total_students":10,"placed_students":4,"avg_cgpa":6.9,"avg_iq":120}"#,
        )
        .unwrap();
        assert!(stats.success);
        assert_eq!(stats.placement_rate(), 40.0);
        assert_eq!(stats.data_source, None);
    }

    #[test]
    fn missing_success_flag_reads_as_false() {
        let stats: StatsSummary = serde_json::from_str(
            r#"{"total_students":100,"placed_students":65,"placement_rate":65.0,"avg_cgpa":7.2,"avg_iq":128.5}"#,
        )
        .unwrap();
        assert!(!stats.success);
        assert_eq!(stats.placement_rate(), 65.0);
    }
}
