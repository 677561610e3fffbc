use crate::format_helpers::{format_percent, format_thousands};
use crate::use_api;
use backend::{load_analytics, AnalyticsLoad};
use dioxus::prelude::*;
use shared_types::{AnalyticsSummary, ChartData, Trends};
use shared_ui::{
    Alert, AlertVariant, Bar, BarList, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, LoadingState, PageActions, PageHeader, PageTitle, StatCard, StatGrid,
};

/// The four headline cards: (title, value, tone).
pub fn summary_cards(summary: &AnalyticsSummary) -> Vec<(&'static str, String, &'static str)> {
    vec![
        ("Total Workflows", summary.total_workflows.to_string(), "primary"),
        ("Approval Rate", format_percent(summary.approval_rate), "success"),
        (
            "Avg Processing Time",
            summary
                .avg_processing_time
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            "warning",
        ),
        (
            "Total Amount",
            summary
                .total_amount_processed
                .map(format_thousands)
                .unwrap_or_else(|| "N/A".to_string()),
            "info",
        ),
    ]
}

/// One dataset of a chart as bars, coloured per point where the data says so.
pub fn chart_bars(chart: &ChartData, dataset: usize) -> Vec<Bar> {
    let colors = chart.datasets.get(dataset);
    chart
        .points(dataset)
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let bar = Bar::new(label, value);
            match colors.and_then(|d| d.color_at(i)) {
                Some(c) => bar.with_color(c),
                None => bar,
            }
        })
        .collect()
}

#[component]
fn ChartCard(title: String, chart: ChartData) -> Element {
    let max = chart.max_value();
    let series: Vec<(usize, Option<String>)> = chart
        .datasets
        .iter()
        .enumerate()
        .map(|(i, d)| (i, d.label.clone()))
        .collect();
    let labelled = series.len() > 1;

    rsx! {
        Card { class: "chart-card",
            CardHeader { CardTitle { "{title}" } }
            CardContent {
                for (i, label) in series {
                    div { class: "chart-series", key: "{i}",
                        if labelled {
                            if let Some(label) = label {
                                h4 { class: "chart-series-label", "{label}" }
                            }
                        }
                        BarList { bars: chart_bars(&chart, i), max: Some(max) }
                    }
                }
            }
        }
    }
}

#[component]
fn TrendsSection(trends: Trends) -> Element {
    rsx! {
        section { class: "trends-grid",
            if let Some(week) = trends.weekly_comparison.clone() {
                Card { class: "trend-card",
                    CardHeader { CardTitle { "Weekly Performance" } }
                    CardContent {
                        div { class: "trend-item",
                            span { class: "trend-label", "Current Week" }
                            span { class: "trend-value", "{week.current_week}" }
                        }
                        div { class: "trend-item",
                            span { class: "trend-label", "Previous Week" }
                            span { class: "trend-value", "{week.previous_week}" }
                        }
                        div {
                            class: if week.is_positive { "trend-change positive" } else { "trend-change negative" },
                            "{week.change}"
                        }
                    }
                }
            }
            if !trends.top_performers.is_empty() {
                Card { class: "trend-card",
                    CardHeader { CardTitle { "Top Performing Departments" } }
                    CardContent {
                        for dept in trends.top_performers.iter() {
                            div { class: "performer-item", key: "{dept.department}",
                                span { class: "performer-name", "{dept.department}" }
                                span { class: "approval-rate", {format_percent(dept.approval_rate)} }
                                span { class: "processing-time", "{dept.processing_time}" }
                            }
                        }
                    }
                }
            }
            if let Some(m) = trends.efficiency_metrics.clone() {
                Card { class: "trend-card",
                    CardHeader { CardTitle { "Efficiency Metrics" } }
                    CardContent {
                        div { class: "metric-item",
                            span { class: "metric-label", "Avg Response Time" }
                            span { class: "metric-value", "{m.avg_response_time}" }
                        }
                        div { class: "metric-item",
                            span { class: "metric-label", "SLA Compliance" }
                            span { class: "metric-value", {format_percent(m.sla_compliance)} }
                        }
                        div { class: "metric-item",
                            span { class: "metric-label", "Automation Rate" }
                            span { class: "metric-value", {format_percent(m.automation_rate)} }
                        }
                        div { class: "metric-item",
                            span { class: "metric-label", "User Satisfaction" }
                            span { class: "metric-value", "{m.user_satisfaction}/5" }
                        }
                    }
                }
            }
        }
    }
}

/// A loaded report with its fallback notice.
#[component]
fn AnalyticsView(load: AnalyticsLoad) -> Element {
    let report = &load.report;
    let cards = summary_cards(&report.summary);
    let charts: Vec<(&'static str, ChartData)> = report
        .charts
        .as_ref()
        .map(|c| {
            c.titled()
                .into_iter()
                .map(|(title, data)| (title, data.clone()))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        if let Some(notice) = load.notice {
            Alert { variant: AlertVariant::Warning, "\u{26A0}\u{FE0F} {notice}" }
        }
        StatGrid {
            for (title, value, tone) in cards {
                StatCard {
                    key: "{title}",
                    title: title.to_string(),
                    value,
                    tone: tone.to_string(),
                }
            }
        }
        if !charts.is_empty() {
            section { class: "charts-grid",
                for (title, chart) in charts {
                    ChartCard { key: "{title}", title: title.to_string(), chart }
                }
            }
        }
        if let Some(trends) = report.trends.clone() {
            TrendsSection { trends }
        }
    }
}

/// Analytics for every signed-in role.
///
/// Tries the backend, then the AI service, then shows demo data.
#[component]
pub fn Analytics() -> Element {
    let api = use_api();
    let mut report = use_resource(move || {
        let api = api.clone();
        async move { load_analytics(&api).await }
    });

    rsx! {
        div { class: "container analytics",
            PageHeader {
                PageTitle { "Analytics Dashboard" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| report.restart(),
                        "Retry"
                    }
                }
            }
            match &*report.read() {
                None => rsx! {
                    LoadingState { message: "Loading analytics data..." }
                },
                Some(load) => rsx! {
                    AnalyticsView { load: load.clone() }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::analytics::{AnalyticsSource, DEMO_NOTICE};
    use pretty_assertions::assert_eq;
    use shared_types::AnalyticsReport;

    fn demo_load() -> AnalyticsLoad {
        AnalyticsLoad {
            report: AnalyticsReport::demo(),
            source: AnalyticsSource::Demo,
            notice: Some(DEMO_NOTICE),
        }
    }

    #[test]
    fn summary_cards_format_demo_numbers() {
        let values: Vec<String> = summary_cards(&AnalyticsReport::demo().summary)
            .into_iter()
            .map(|(_, v, _)| v)
            .collect();
        assert_eq!(values, vec!["156", "63%", "2.3 days", "$453K"]);
    }

    #[test]
    fn summary_only_report_shows_placeholders() {
        let report: AnalyticsReport =
            serde_json::from_str(r#"{"summary":{"totalWorkflows":3,"approvalRate":33.3}}"#)
                .unwrap();
        let values: Vec<String> = summary_cards(&report.summary)
            .into_iter()
            .map(|(_, v, _)| v)
            .collect();
        assert_eq!(values, vec!["3", "33.3%", "N/A", "N/A"]);
    }

    #[test]
    fn chart_bars_keep_label_order_and_colors() {
        let report = AnalyticsReport::demo();
        let charts = report.charts.unwrap();
        let status = charts.status_distribution.unwrap();
        let bars = chart_bars(&status, 0);
        assert_eq!(bars.len(), 4);
        assert_eq!(bars[0].label, "Approved");
        assert_eq!(bars[0].value, 98.0);
        assert_eq!(bars[0].color.as_deref(), Some("#10b981"));
    }

    #[test]
    fn demo_view_renders_notice_and_every_chart() {
        let html = dioxus_ssr::render_element(rsx! { AnalyticsView { load: demo_load() } });
        assert!(html.contains(DEMO_NOTICE), "{html}");
        assert_eq!(html.matches("chart-card").count(), 6);
        assert!(html.contains("Monthly Approval Trends"));
        assert!(html.contains("Top Performing Departments"));
    }

    #[test]
    fn backend_view_has_no_banner() {
        let load = AnalyticsLoad {
            report: AnalyticsReport::default(),
            source: AnalyticsSource::Backend,
            notice: None,
        };
        let html = dioxus_ssr::render_element(rsx! { AnalyticsView { load } });
        assert!(!html.contains(r#"role="alert""#));
        assert_eq!(html.matches("chart-card").count(), 0);
    }
}
