use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::notification::NotificationType;

/// Icon the dashboard renders next to an activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
pub enum ActivityIcon {
    Briefcase,
    Chat,
    Currency,
    Person,
}

impl ActivityIcon {
    pub fn for_kind(kind: NotificationType) -> Self {
        match kind {
            NotificationType::Bid | NotificationType::Project => ActivityIcon::Briefcase,
            NotificationType::Message => ActivityIcon::Chat,
            NotificationType::Payment => ActivityIcon::Currency,
            _ => ActivityIcon::Person,
        }
    }
}

/// One entry of the dashboard activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub icon: ActivityIcon,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ActivityResponse {
    pub activities: Vec<ActivityItem>,
}
