use shared_types::AnalyticsReport;

use crate::api::ApiClient;

pub const AI_SERVICE_NOTICE: &str = "Connected to AI service directly (backend unavailable)";
pub const DEMO_NOTICE: &str = "Both backend services unavailable. Using demo data.";

/// Where a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsSource {
    Backend,
    AiService,
    Demo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsLoad {
    pub report: AnalyticsReport,
    pub source: AnalyticsSource,
    /// Warning to show above the report, set whenever a fallback was used.
    pub notice: Option<&'static str>,
}

/// Load analytics from the backend, then the AI service, then the demo report.
///
/// Never fails; each step is tried once.
pub async fn load_analytics(client: &ApiClient) -> AnalyticsLoad {
    let primary = match client.workflow_analytics().await {
        Ok(report) => {
            tracing::info!(source = ?report.source, "Analytics loaded from backend");
            return AnalyticsLoad {
                report,
                source: AnalyticsSource::Backend,
                notice: None,
            };
        }
        Err(e) => e,
    };
    tracing::warn!(error = %primary, "Backend analytics unavailable, trying AI service");

    match client.ai_service_analytics().await {
        Ok(report) => AnalyticsLoad {
            report,
            source: AnalyticsSource::AiService,
            notice: Some(AI_SERVICE_NOTICE),
        },
        Err(e) => {
            tracing::warn!(error = %e, "AI service analytics unavailable, using demo data");
            AnalyticsLoad {
                report: AnalyticsReport::demo(),
                source: AnalyticsSource::Demo,
                notice: Some(DEMO_NOTICE),
            }
        }
    }
}
