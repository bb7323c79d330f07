// ============================================================================
// ADMIN STATS VIEWMODEL
// ============================================================================

use crate::models::DashboardStats;
use crate::services::MarketplaceApi;

pub const LOAD_FAILED: &str = "Failed to load dashboard statistics";

#[derive(Clone, Debug, PartialEq)]
pub enum StatsState {
    Loading,
    Loaded(DashboardStats),
    Failed(String),
}

impl Default for StatsState {
    fn default() -> Self {
        Self::Loading
    }
}

impl From<Result<DashboardStats, String>> for StatsState {
    fn from(result: Result<DashboardStats, String>) -> Self {
        match result {
            Ok(stats) => Self::Loaded(stats),
            Err(message) => Self::Failed(message),
        }
    }
}

#[derive(Clone)]
pub struct AdminStatsViewModel<A> {
    api: A,
}

impl<A: MarketplaceApi> AdminStatsViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<DashboardStats, String> {
        log::info!("📊 Cargando estadísticas del dashboard");
        self.api.admin_stats().await.map_err(|e| {
            log::error!("❌ Error cargando estadísticas: {}", e);
            LOAD_FAILED.to_string()
        })
    }
}
