//! Sample data every session starts from.
//!
//! Projects and bids in `data/seed.json` refer to their client and developer
//! by id; `load` resolves those references into the embedded profiles the
//! UI expects and attaches each bid to its project.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared_types::{
    Bid, BidStatus, Budget, ClientProfile, DeveloperProfile, Milestone, Notification, Project,
    ProjectCategory, ProjectStatus,
};

const SEED_JSON: &str = include_str!("../data/seed.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seed data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project {project_id} refers to unknown client {client_id}")]
    UnknownClient {
        project_id: String,
        client_id: String,
    },

    #[error("Bid {bid_id} refers to unknown developer {developer_id}")]
    UnknownDeveloper {
        bid_id: String,
        developer_id: String,
    },

    #[error("Bid {bid_id} refers to unknown project {project_id}")]
    UnknownProject { bid_id: String, project_id: String },
}

#[derive(Debug, Clone)]
pub struct SeedData {
    pub clients: Vec<ClientProfile>,
    pub developers: Vec<DeveloperProfile>,
    pub projects: Vec<Project>,
    pub bids: Vec<Bid>,
    pub notifications: Vec<Notification>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeed {
    clients: Vec<ClientProfile>,
    developers: Vec<DeveloperProfile>,
    projects: Vec<RawProject>,
    bids: Vec<RawBid>,
    notifications: Vec<Notification>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    id: String,
    title: String,
    description: String,
    category: ProjectCategory,
    budget: Budget,
    timeline: String,
    skills: Vec<String>,
    client_id: String,
    status: ProjectStatus,
    posted_date: DateTime<Utc>,
    featured: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBid {
    id: String,
    project_id: String,
    developer_id: String,
    amount: u64,
    timeline: String,
    proposal: String,
    #[serde(default)]
    milestones: Vec<Milestone>,
    submitted_date: DateTime<Utc>,
    status: BidStatus,
}

/// Parse the embedded sample data set
pub fn load() -> Result<SeedData, SeedError> {
    parse(SEED_JSON)
}

fn parse(json: &str) -> Result<SeedData, SeedError> {
    let raw: RawSeed = serde_json::from_str(json)?;

    let mut projects = Vec::with_capacity(raw.projects.len());
    for project in raw.projects {
        let client = raw
            .clients
            .iter()
            .find(|c| c.base.id == project.client_id)
            .cloned()
            .ok_or_else(|| SeedError::UnknownClient {
                project_id: project.id.clone(),
                client_id: project.client_id.clone(),
            })?;

        projects.push(Project {
            id: project.id,
            title: project.title,
            description: project.description,
            category: project.category,
            budget: project.budget,
            timeline: project.timeline,
            skills: project.skills,
            client,
            status: project.status,
            bids: Vec::new(),
            posted_date: project.posted_date,
            featured: project.featured,
            files: Vec::new(),
        });
    }

    let mut bids = Vec::with_capacity(raw.bids.len());
    for bid in raw.bids {
        let developer = raw
            .developers
            .iter()
            .find(|d| d.base.id == bid.developer_id)
            .cloned()
            .ok_or_else(|| SeedError::UnknownDeveloper {
                bid_id: bid.id.clone(),
                developer_id: bid.developer_id.clone(),
            })?;

        let bid = Bid {
            id: bid.id,
            project_id: bid.project_id,
            developer,
            amount: bid.amount,
            timeline: bid.timeline,
            proposal: bid.proposal,
            milestones: bid.milestones,
            submitted_date: bid.submitted_date,
            status: bid.status,
        };

        let project = projects
            .iter_mut()
            .find(|p| p.id == bid.project_id)
            .ok_or_else(|| SeedError::UnknownProject {
                bid_id: bid.id.clone(),
                project_id: bid.project_id.clone(),
            })?;
        project.bids.push(bid.clone());
        bids.push(bid);
    }

    Ok(SeedData {
        clients: raw.clients,
        developers: raw.developers,
        projects,
        bids,
        notifications: raw.notifications,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_seed_loads() {
        let seed = load().unwrap();
        assert_eq!(seed.clients.len(), 2);
        assert_eq!(seed.developers.len(), 3);
        assert_eq!(seed.projects.len(), 4);
        assert_eq!(seed.bids.len(), 3);
        assert_eq!(seed.notifications.len(), 3);
    }

    #[test]
    fn test_references_are_resolved() {
        let seed = load().unwrap();

        let fashion = &seed.projects[0];
        assert_eq!(fashion.client.base.name, "Priya Sharma");
        assert_eq!(fashion.bids.len(), 2);

        let first_bid = &seed.bids[0];
        assert_eq!(first_bid.developer.base.name, "Rajesh Kumar");
        assert_eq!(first_bid.milestones.len(), 4);
        assert_eq!(first_bid.milestone_total(), 75000);
    }

    #[test]
    fn test_unknown_client_is_reported() {
        let json = r#"{
            "clients": [],
            "developers": [],
            "projects": [{
                "id": "9", "title": "t", "description": "d", "category": "mobile-app",
                "budget": {"min": 1, "max": 2}, "timeline": "1 week", "skills": [],
                "clientId": "42", "status": "open",
                "postedDate": "2024-01-15T10:30:00Z", "featured": false
            }],
            "bids": [],
            "notifications": []
        }"#;

        match parse(json) {
            Err(SeedError::UnknownClient { client_id, .. }) => assert_eq!(client_id, "42"),
            other => panic!("Expected UnknownClient, got {:?}", other.map(|s| s.projects.len())),
        }
    }
}
