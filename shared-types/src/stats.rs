use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperStats {
    pub active_bids: usize,
    pub accepted_projects: usize,
    #[ts(type = "number")]
    pub total_earnings: u64,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ClientStats {
    pub active_projects: usize,
    pub completed_projects: usize,
    #[ts(type = "number")]
    pub total_spent: u64,
    pub total_bids_received: usize,
}

/// Dashboard overview cards, shaped by the viewer's role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DashboardStats {
    Developer(DeveloperStats),
    Client(ClientStats),
}
