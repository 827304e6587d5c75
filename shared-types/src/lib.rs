use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod activity;
pub mod bid;
pub mod filters;
pub mod notification;
pub mod project;
pub mod stats;
pub mod user;

pub use activity::{ActivityIcon, ActivityItem, ActivityResponse};
pub use bid::{Bid, BidStatus, CreateBidRequest, Milestone, MilestoneStatus, UpdateBidStatusRequest};
pub use filters::ProjectFilters;
pub use notification::{
    CreateNotificationRequest, Notification, NotificationType, NotificationsResponse,
};
pub use project::{
    Budget, CreateProjectRequest, Project, ProjectCategory, ProjectStatus, ProjectsResponse,
    UnknownCategory,
};
pub use stats::{ClientStats, DashboardStats, DeveloperStats};
pub use user::{
    Availability, ClientProfile, DeveloperProfile, PortfolioItem, RegisterRequest,
    UpdateProfileRequest, User, UserBase, UserKind,
};

/// Error payload returned to the UI
#[derive(Debug, Serialize, Deserialize, TS)]
pub struct ErrorResponse {
    pub error: String,
}
