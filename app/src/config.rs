//! FILENAME: app/src/config.rs
// PURPOSE: Deployment configuration with sensible single-tenant defaults.

use serde::{Deserialize, Serialize};

/// Tunables for one dashboard deployment.
///
/// The organization is a fixed single-tenant constant: the organization level
/// exists in the hierarchy but is pinned to this value and hidden from
/// selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// The pinned organization label.
    pub default_organization: String,
    /// Rows per table page.
    pub page_limit: usize,
    /// Cap on the sample used for chart aggregation.
    pub chart_sample_cap: usize,
    /// Quiet window after a filter edit before a query is due, in ms.
    pub debounce_ms: u64,
    /// Population size for the mock generator.
    pub mock_population: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            default_organization: "BRMS".to_string(),
            page_limit: 10,
            chart_sample_cap: 1000,
            debounce_ms: 300,
            mock_population: 500,
        }
    }
}

impl DashboardConfig {
    /// Loads a config from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<DashboardConfig, String> {
        serde_json::from_str(json).map_err(|e| format!("config parse error: {}", e))
    }
}
