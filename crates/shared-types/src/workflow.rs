use crate::user::User;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of approval request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkflowType {
    #[default]
    Leave,
    Purchase,
    Budget,
    Project,
    Travel,
    Expense,
    /// Any type this client does not know; never offered in the form.
    #[serde(other)]
    Other,
}

/// All workflow types in form order.
pub const ALL_WORKFLOW_TYPES: &[WorkflowType] = &[
    WorkflowType::Leave,
    WorkflowType::Purchase,
    WorkflowType::Budget,
    WorkflowType::Project,
    WorkflowType::Travel,
    WorkflowType::Expense,
];

impl WorkflowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowType::Leave => "LEAVE",
            WorkflowType::Purchase => "PURCHASE",
            WorkflowType::Budget => "BUDGET",
            WorkflowType::Project => "PROJECT",
            WorkflowType::Travel => "TRAVEL",
            WorkflowType::Expense => "EXPENSE",
            WorkflowType::Other => "OTHER",
        }
    }

    /// Label used in the request form.
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowType::Leave => "Leave Request",
            WorkflowType::Purchase => "Purchase Order",
            WorkflowType::Budget => "Budget Request",
            WorkflowType::Project => "Project Approval",
            WorkflowType::Travel => "Travel Request",
            WorkflowType::Expense => "Expense Claim",
            WorkflowType::Other => "Other Request",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkflowType::Leave => "\u{1F3D6}",
            WorkflowType::Purchase => "\u{1F6D2}",
            WorkflowType::Budget => "\u{1F4B0}",
            WorkflowType::Project => "\u{1F4CB}",
            WorkflowType::Travel => "\u{2708}",
            WorkflowType::Expense => "\u{1F9FE}",
            WorkflowType::Other => "\u{1F4C4}",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ALL_WORKFLOW_TYPES
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a workflow.
///
/// A workflow starts `Pending`; a manager moves it to `Approved` or
/// `Rejected`, both of which are final.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkflowStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Review,
    /// Unrecognised status from the server; displayed like `Pending`.
    #[serde(other)]
    Other,
}

pub const ALL_WORKFLOW_STATUSES: &[WorkflowStatus] = &[
    WorkflowStatus::Pending,
    WorkflowStatus::Approved,
    WorkflowStatus::Rejected,
    WorkflowStatus::Review,
];

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::Pending => "PENDING",
            WorkflowStatus::Approved => "APPROVED",
            WorkflowStatus::Rejected => "REJECTED",
            WorkflowStatus::Review => "REVIEW",
            WorkflowStatus::Other => "UNKNOWN",
        }
    }

    /// Approved and rejected workflows never change again.
    pub fn is_final(&self) -> bool {
        matches!(self, WorkflowStatus::Approved | WorkflowStatus::Rejected)
    }

    /// Whether a manager may move a workflow from `self` to `next`.
    pub fn can_transition_to(&self, next: WorkflowStatus) -> bool {
        !self.is_final() && next.is_final()
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A manager's verdict on a pending workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn status(&self) -> WorkflowStatus {
        match self {
            Decision::Approve => WorkflowStatus::Approved,
            Decision::Reject => WorkflowStatus::Rejected,
        }
    }
}

/// A single approval request record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    #[serde(default, deserialize_with = "crate::user::string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub workflow_type: WorkflowType,
    #[serde(default)]
    pub status: WorkflowStatus,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub department: Option<String>,
    /// The backend omits the submitter from most payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<User>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Workflow {
    /// Amount to display, if any non-zero amount was requested.
    pub fn display_amount(&self) -> Option<f64> {
        self.amount.filter(|a| *a > 0.0)
    }

    pub fn submitter_name(&self) -> Option<&str> {
        self.submitted_by.as_ref().map(|u| u.username.as_str())
    }

    pub fn approver_name(&self) -> Option<&str> {
        self.approved_by.as_ref().map(|u| u.username.as_str())
    }
}

/// Body of `POST /api/workflows/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct NewWorkflow {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 255, message = "Request title is required"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 1000, message = "Description must be 1 to 1000 characters"))
    )]
    pub description: String,
    #[serde(rename = "type")]
    pub workflow_type: WorkflowType,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Amount cannot be negative"))
    )]
    pub amount: f64,
}

impl NewWorkflow {
    /// Build a request from raw form input.
    ///
    /// A blank amount means zero; NaN and infinities are rejected. Text
    /// fields are trimmed.
    pub fn from_form(
        title: &str,
        description: &str,
        workflow_type: WorkflowType,
        amount: &str,
    ) -> Result<Self, crate::AppError> {
        let amount = match amount.trim() {
            "" => 0.0,
            raw => raw
                .parse::<f64>()
                .ok()
                .filter(|a| a.is_finite())
                .ok_or_else(|| {
                    let mut fields = std::collections::HashMap::new();
                    fields.insert("amount".to_string(), "Amount must be a number".to_string());
                    crate::AppError::validation("Amount must be a number", fields)
                })?,
        };
        Ok(Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            workflow_type,
            amount,
        })
    }
}

/// Body of `PUT /api/workflows/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: WorkflowStatus,
    pub manager_username: String,
}

impl StatusUpdate {
    pub fn new(decision: Decision, manager_username: impl Into<String>) -> Self {
        Self {
            status: decision.status(),
            manager_username: manager_username.into(),
        }
    }
}

/// Recommended action from the approval model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suggestion {
    Approve,
    Review,
    Reject,
}

impl Suggestion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suggestion::Approve => "APPROVE",
            Suggestion::Review => "REVIEW",
            Suggestion::Reject => "REJECT",
        }
    }
}

/// Response of `GET /api/workflows/{id}/ai-prediction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalPrediction {
    pub approval_probability: f64,
    pub suggestion: Suggestion,
    #[serde(default)]
    pub confidence: f64,
    /// Set when the backend answered with its heuristic instead of the model.
    #[serde(default)]
    pub fallback: bool,
}

impl ApprovalPrediction {
    /// Probability as a whole percentage, clamped to 0..=100.
    pub fn percent(&self) -> u8 {
        (self.approval_probability.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}
