use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::bid::Bid;
use crate::user::ClientProfile;

/// Kind of work a project asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    StaticWebsite,
    DynamicWebsite,
    EcommerceWebsite,
    MobileApp,
    WebApplication,
    UiUxDesign,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 6] = [
        ProjectCategory::StaticWebsite,
        ProjectCategory::DynamicWebsite,
        ProjectCategory::EcommerceWebsite,
        ProjectCategory::MobileApp,
        ProjectCategory::WebApplication,
        ProjectCategory::UiUxDesign,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::StaticWebsite => "static-website",
            ProjectCategory::DynamicWebsite => "dynamic-website",
            ProjectCategory::EcommerceWebsite => "ecommerce-website",
            ProjectCategory::MobileApp => "mobile-app",
            ProjectCategory::WebApplication => "web-application",
            ProjectCategory::UiUxDesign => "ui-ux-design",
        }
    }

    /// Human readable name shown on project cards and the filter panel
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::StaticWebsite => "Static Website",
            ProjectCategory::DynamicWebsite => "Dynamic Website",
            ProjectCategory::EcommerceWebsite => "E-commerce Website",
            ProjectCategory::MobileApp => "Mobile App",
            ProjectCategory::WebApplication => "Web Application",
            ProjectCategory::UiUxDesign => "UI/UX Design",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown project category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ProjectCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Open => "open",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Budget bounds in whole rupees. `min <= max` is expected but not enforced
/// when a project is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Budget {
    #[ts(type = "number")]
    pub min: u64,
    #[ts(type = "number")]
    pub max: u64,
}

impl Budget {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Project listing posted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub budget: Budget,
    pub timeline: String,
    pub skills: Vec<String>,
    pub client: ClientProfile,
    pub status: ProjectStatus,
    pub bids: Vec<Bid>,
    pub posted_date: DateTime<Utc>,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

/// Request to post a new project
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub budget: Budget,
    pub timeline: String,
    pub skills: Vec<String>,
    pub client: ClientProfile,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub files: Vec<String>,
}

/// Response containing a list of projects
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
    pub total: usize,
}
