use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pre-aggregated analytics as served by the backend or the AI service.
///
/// The database-only variant carries just `summary`; charts and trends are
/// optional so that shape still parses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AnalyticsReport {
    #[serde(default)]
    pub summary: AnalyticsSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charts: Option<ChartSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trends: Option<Trends>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub fallback: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_workflows: u64,
    #[serde(default)]
    pub pending_workflows: u64,
    #[serde(default)]
    pub approved_workflows: u64,
    #[serde(default)]
    pub rejected_workflows: u64,
    #[serde(default)]
    pub approval_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_processing_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount_processed: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChartSet {
    #[serde(default)]
    pub status_distribution: Option<ChartData>,
    #[serde(default)]
    pub department_workflows: Option<ChartData>,
    #[serde(default)]
    pub monthly_trends: Option<ChartData>,
    #[serde(default)]
    pub approval_by_department: Option<ChartData>,
    #[serde(default)]
    pub amount_distribution: Option<ChartData>,
    #[serde(default)]
    pub type_distribution: Option<ChartData>,
}

impl ChartSet {
    /// Charts in display order, paired with their headings. Missing charts are skipped.
    pub fn titled(&self) -> Vec<(&'static str, &ChartData)> {
        [
            ("Workflow Status Distribution", &self.status_distribution),
            ("Workflows by Department", &self.department_workflows),
            ("Monthly Approval Trends", &self.monthly_trends),
            ("Approval Rate by Department", &self.approval_by_department),
            ("Workflows by Amount Range", &self.amount_distribution),
            ("Workflows by Type", &self.type_distribution),
        ]
        .into_iter()
        .filter_map(|(title, chart)| chart.as_ref().map(|c| (title, c)))
        .collect()
    }
}

/// Labels plus one or more series, in Chart.js layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Largest value across every series, used to scale bars.
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .fold(0.0, f64::max)
    }

    /// `(label, value)` pairs for one series. Labels without a value are dropped.
    pub fn points(&self, dataset: usize) -> Vec<(&str, f64)> {
        match self.datasets.get(dataset) {
            Some(ds) => self
                .labels
                .iter()
                .zip(ds.data.iter())
                .map(|(l, v)| (l.as_str(), *v))
                .collect(),
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Colors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Colors>,
}

impl Dataset {
    /// Colour for the point at `index`, cycling through a palette when one is given.
    pub fn color_at(&self, index: usize) -> Option<&str> {
        match self.background_color.as_ref()? {
            Colors::One(c) => Some(c.as_str()),
            Colors::Many(cs) if cs.is_empty() => None,
            Colors::Many(cs) => Some(cs[index % cs.len()].as_str()),
        }
    }
}

/// A single colour or one per data point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Colors {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    #[serde(default)]
    pub weekly_comparison: Option<WeeklyComparison>,
    #[serde(default)]
    pub top_performers: Vec<TopPerformer>,
    #[serde(default)]
    pub efficiency_metrics: Option<EfficiencyMetrics>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyComparison {
    pub current_week: u64,
    pub previous_week: u64,
    pub change: String,
    pub is_positive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    pub department: String,
    pub approval_rate: f64,
    pub processing_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyMetrics {
    pub avg_response_time: String,
    pub sla_compliance: f64,
    pub automation_rate: f64,
    pub user_satisfaction: f64,
}

/// Count items by key, sorted by key.
pub fn tally<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0usize) += 1;
    }
    counts.into_iter().collect()
}

fn chart(labels: &[&str], datasets: Vec<Dataset>) -> ChartData {
    ChartData {
        labels: labels.iter().map(|l| l.to_string()).collect(),
        datasets,
    }
}

fn series(label: Option<&str>, data: &[f64], colors: Colors) -> Dataset {
    Dataset {
        label: label.map(str::to_string),
        data: data.to_vec(),
        background_color: Some(colors),
        border_color: None,
    }
}

fn palette(colors: &[&str]) -> Colors {
    Colors::Many(colors.iter().map(|c| c.to_string()).collect())
}

impl AnalyticsReport {
    /// Static report shown when neither analytics service answers.
    pub fn demo() -> Self {
        let departments = [
            "Engineering", "Finance", "HR", "IT", "Operations", "Marketing", "Sales",
        ];
        Self {
            summary: AnalyticsSummary {
                total_workflows: 156,
                pending_workflows: 23,
                approved_workflows: 98,
                rejected_workflows: 35,
                approval_rate: 63.0,
                avg_processing_time: Some("2.3 days".to_string()),
                total_amount_processed: Some(452_800.0),
            },
            charts: Some(ChartSet {
                status_distribution: Some(chart(
                    &["Approved", "Pending", "Rejected", "Under Review"],
                    vec![series(
                        None,
                        &[98.0, 23.0, 35.0, 12.0],
                        palette(&["#10b981", "#f59e0b", "#ef4444", "#3b82f6"]),
                    )],
                )),
                department_workflows: Some(chart(
                    &departments,
                    vec![series(
                        Some("Workflows by Department"),
                        &[45.0, 32.0, 28.0, 25.0, 18.0, 15.0, 13.0],
                        palette(&[
                            "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#06b6d4",
                            "#f97316",
                        ]),
                    )],
                )),
                monthly_trends: Some(chart(
                    &[
                        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct",
                        "Nov", "Dec",
                    ],
                    vec![
                        series(
                            Some("Approved"),
                            &[45.0, 52.0, 48.0, 61.0, 55.0, 58.0, 62.0, 65.0, 59.0, 63.0, 67.0, 71.0],
                            Colors::One("#10b981".to_string()),
                        ),
                        series(
                            Some("Rejected"),
                            &[12.0, 15.0, 18.0, 14.0, 16.0, 13.0, 11.0, 9.0, 12.0, 10.0, 8.0, 6.0],
                            Colors::One("#ef4444".to_string()),
                        ),
                    ],
                )),
                approval_by_department: Some(chart(
                    &departments[..5],
                    vec![series(
                        Some("Approval Rate (%)"),
                        &[78.0, 65.0, 82.0, 71.0, 60.0],
                        palette(&["#3b82f6", "#10b981", "#f59e0b", "#8b5cf6", "#06b6d4"]),
                    )],
                )),
                amount_distribution: Some(chart(
                    &["$0-500", "$501-2000", "$2001-5000", "$5001-10000", "$10001+"],
                    vec![series(
                        Some("Workflows by Amount"),
                        &[45.0, 38.0, 42.0, 25.0, 6.0],
                        Colors::One("#3b82f6".to_string()),
                    )],
                )),
                type_distribution: Some(chart(
                    &["LEAVE", "PURCHASE", "BUDGET", "PROJECT", "TRAVEL", "EXPENSE"],
                    vec![series(
                        Some("Workflows by Type"),
                        &[42.0, 38.0, 35.0, 25.0, 12.0, 4.0],
                        Colors::One("#3b82f6".to_string()),
                    )],
                )),
            }),
            trends: Some(Trends {
                weekly_comparison: Some(WeeklyComparison {
                    current_week: 45,
                    previous_week: 38,
                    change: "+18%".to_string(),
                    is_positive: true,
                }),
                top_performers: vec![
                    TopPerformer {
                        department: "HR".to_string(),
                        approval_rate: 82.0,
                        processing_time: "1.2 days".to_string(),
                    },
                    TopPerformer {
                        department: "Engineering".to_string(),
                        approval_rate: 78.0,
                        processing_time: "1.8 days".to_string(),
                    },
                    TopPerformer {
                        department: "IT".to_string(),
                        approval_rate: 71.0,
                        processing_time: "2.1 days".to_string(),
                    },
                ],
                efficiency_metrics: Some(EfficiencyMetrics {
                    avg_response_time: "6.2 hours".to_string(),
                    sla_compliance: 94.0,
                    automation_rate: 67.0,
                    user_satisfaction: 4.2,
                }),
            }),
            source: Some("demo".to_string()),
            fallback: true,
        }
    }
}
