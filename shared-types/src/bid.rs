use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::user::DeveloperProfile;

/// Bid status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accepted => "accepted",
            BidStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for BidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Milestone status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
}

/// Scheduled partial payment within a bid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    #[ts(type = "number")]
    pub amount: u64,
    pub due_date: String, // YYYY-MM-DD
    pub status: MilestoneStatus,
}

/// A developer's proposal against a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: String,
    pub project_id: String,
    pub developer: DeveloperProfile,
    #[ts(type = "number")]
    pub amount: u64,
    pub timeline: String,
    pub proposal: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<Milestone>,
    pub submitted_date: DateTime<Utc>,
    pub status: BidStatus,
}

impl Bid {
    /// Sum of milestone amounts. Not required to equal `amount`.
    pub fn milestone_total(&self) -> u64 {
        self.milestones.iter().map(|m| m.amount).sum()
    }
}

/// Request to submit a bid; the bid always starts out pending
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateBidRequest {
    pub project_id: String,
    pub developer: DeveloperProfile,
    #[ts(type = "number")]
    pub amount: u64,
    pub timeline: String,
    pub proposal: String,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// Request to accept or reject a bid
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateBidStatusRequest {
    pub status: BidStatus,
}
