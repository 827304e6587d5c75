//! In-memory marketplace state for one session.
//!
//! `Marketplace` owns the project, bid and notification collections and is
//! handed to whatever needs them; nothing here is global. Changes last only
//! as long as the value does.

use chrono::Utc;
use shared_types::{
    ActivityItem, Bid, BidStatus, CreateBidRequest, CreateNotificationRequest,
    CreateProjectRequest, DashboardStats, Notification, Project, ProjectFilters, ProjectStatus,
    User,
};
use uuid::Uuid;

use crate::activity::{self, ActivitySources};
use crate::filter;
use crate::seed::{self, SeedError};
use crate::stats;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarketplaceError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Bid not found: {0}")]
    BidNotFound(String),

    #[error("Notification not found: {0}")]
    NotificationNotFound(String),

    #[error("Invalid budget: minimum {min} exceeds maximum {max}")]
    InvalidBudget { min: u64, max: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct Marketplace {
    projects: Vec<Project>,
    bids: Vec<Bid>,
    notifications: Vec<Notification>,
}

impl Marketplace {
    pub fn new(projects: Vec<Project>, bids: Vec<Bid>, notifications: Vec<Notification>) -> Self {
        Self {
            projects,
            bids,
            notifications,
        }
    }

    /// Start from the bundled sample data
    pub fn seeded() -> Result<Self, SeedError> {
        let seed = seed::load()?;
        Ok(Self::new(seed.projects, seed.bids, seed.notifications))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Post a project; it opens immediately and goes to the top of the list
    pub fn add_project(
        &mut self,
        request: CreateProjectRequest,
    ) -> Result<&Project, MarketplaceError> {
        if !request.budget.is_valid() {
            return Err(MarketplaceError::InvalidBudget {
                min: request.budget.min,
                max: request.budget.max,
            });
        }

        let project = Project {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            description: request.description,
            category: request.category,
            budget: request.budget,
            timeline: request.timeline,
            skills: request.skills,
            client: request.client,
            status: ProjectStatus::Open,
            bids: Vec::new(),
            posted_date: Utc::now(),
            featured: request.featured,
            files: request.files,
        };

        tracing::debug!("Added project {} ({})", project.id, project.title);
        self.projects.insert(0, project);
        Ok(&self.projects[0])
    }

    /// Submit a bid. It starts out pending and is also listed on its project.
    pub fn add_bid(&mut self, request: CreateBidRequest) -> Result<&Bid, MarketplaceError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == request.project_id)
            .ok_or_else(|| MarketplaceError::ProjectNotFound(request.project_id.clone()))?;

        let bid = Bid {
            id: Uuid::new_v4().to_string(),
            project_id: request.project_id,
            developer: request.developer,
            amount: request.amount,
            timeline: request.timeline,
            proposal: request.proposal,
            milestones: request.milestones,
            submitted_date: Utc::now(),
            status: BidStatus::Pending,
        };

        tracing::debug!(
            "Developer {} bid {} on project {}",
            bid.developer.base.id,
            bid.amount,
            bid.project_id
        );
        project.bids.insert(0, bid.clone());
        self.bids.insert(0, bid);
        Ok(&self.bids[0])
    }

    pub fn update_bid_status(
        &mut self,
        bid_id: &str,
        status: BidStatus,
    ) -> Result<(), MarketplaceError> {
        let bid = self
            .bids
            .iter_mut()
            .find(|b| b.id == bid_id)
            .ok_or_else(|| MarketplaceError::BidNotFound(bid_id.to_string()))?;
        bid.status = status;

        if let Some(listed) = self
            .projects
            .iter_mut()
            .filter(|p| p.id == bid.project_id)
            .flat_map(|p| p.bids.iter_mut())
            .find(|b| b.id == bid_id)
        {
            listed.status = status;
        }

        tracing::debug!("Bid {} is now {}", bid_id, status);
        Ok(())
    }

    pub fn mark_notification_read(&mut self, notification_id: &str) -> Result<(), MarketplaceError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| MarketplaceError::NotificationNotFound(notification_id.to_string()))?;
        notification.read = true;
        Ok(())
    }

    pub fn add_notification(&mut self, request: CreateNotificationRequest) -> &Notification {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id,
            title: request.title,
            message: request.message,
            notification_type: request.notification_type,
            read: false,
            timestamp: Utc::now(),
            action_url: request.action_url,
        };

        tracing::debug!("Notify {}: {}", notification.user_id, notification.title);
        self.notifications.insert(0, notification);
        &self.notifications[0]
    }

    pub fn notifications_for(&self, user_id: &str) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .collect()
    }

    pub fn unread_count(&self, user_id: &str) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count()
    }

    pub fn bids_for_project(&self, project_id: &str) -> Vec<&Bid> {
        self.bids
            .iter()
            .filter(|b| b.project_id == project_id)
            .collect()
    }

    pub fn filter(&self, filters: &ProjectFilters) -> Vec<&Project> {
        filter::filter_project_refs(&self.projects, filters)
    }

    pub fn featured(&self, limit: usize) -> Vec<&Project> {
        filter::featured_projects(&self.projects, limit)
    }

    pub fn recent_activity(&self, viewer: Option<&User>) -> Vec<ActivityItem> {
        let sources = ActivitySources {
            notifications: &self.notifications,
            bids: &self.bids,
            projects: &self.projects,
        };
        activity::recent_activity(&sources, viewer)
    }

    pub fn dashboard_stats(&self, viewer: &User) -> DashboardStats {
        stats::dashboard_stats(viewer, &self.projects, &self.bids)
    }
}
