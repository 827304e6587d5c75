//! Dashboard activity feed.
//!
//! Merges recent notifications with the viewer's own bids (developers) or
//! postings (clients) into one feed, newest first.

mod format;

pub use format::{format_amount, format_time_ago};

use shared_types::{
    ActivityIcon, ActivityItem, Bid, Notification, NotificationType, Project, User,
};

/// Longest feed the dashboard shows
pub const MAX_ACTIVITY_ITEMS: usize = 5;

const NOTIFICATION_LIMIT: usize = 3;
const OWN_ITEM_LIMIT: usize = 2;

/// Collections the feed is drawn from, in the order they are stored
#[derive(Debug, Clone, Copy)]
pub struct ActivitySources<'a> {
    pub notifications: &'a [Notification],
    pub bids: &'a [Bid],
    pub projects: &'a [Project],
}

pub fn recent_activity(sources: &ActivitySources<'_>, viewer: Option<&User>) -> Vec<ActivityItem> {
    let mut activities: Vec<ActivityItem> = sources
        .notifications
        .iter()
        .take(NOTIFICATION_LIMIT)
        .map(notification_entry)
        .collect();

    match viewer {
        Some(User::Developer(developer)) => {
            activities.extend(
                sources
                    .bids
                    .iter()
                    .filter(|bid| bid.developer.base.id == developer.base.id)
                    .take(OWN_ITEM_LIMIT)
                    .map(|bid| bid_entry(bid, sources.projects)),
            );
        }
        Some(User::Client(client)) => {
            activities.extend(
                sources
                    .projects
                    .iter()
                    .filter(|project| project.client.base.id == client.base.id)
                    .take(OWN_ITEM_LIMIT)
                    .map(project_entry),
            );
        }
        None => {}
    }

    // Stable: equal timestamps keep notification-then-own order
    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    activities.truncate(MAX_ACTIVITY_ITEMS);
    activities
}

fn notification_entry(notification: &Notification) -> ActivityItem {
    ActivityItem {
        id: notification.id.clone(),
        kind: notification.notification_type,
        title: notification.title.clone(),
        description: notification.message.clone(),
        timestamp: notification.timestamp,
        icon: ActivityIcon::for_kind(notification.notification_type),
    }
}

fn bid_entry(bid: &Bid, projects: &[Project]) -> ActivityItem {
    let target = projects
        .iter()
        .find(|p| p.id == bid.project_id)
        .map_or(bid.project_id.as_str(), |p| p.title.as_str());

    ActivityItem {
        id: format!("bid-{}", bid.id),
        kind: NotificationType::Bid,
        title: "Bid Submitted".to_string(),
        description: format!(
            "You submitted a bid for \"{}\" - ₹{}",
            target,
            format_amount(bid.amount)
        ),
        timestamp: bid.submitted_date,
        icon: ActivityIcon::for_kind(NotificationType::Bid),
    }
}

fn project_entry(project: &Project) -> ActivityItem {
    ActivityItem {
        id: format!("project-{}", project.id),
        kind: NotificationType::Project,
        title: "Project Posted".to_string(),
        description: format!(
            "You posted \"{}\" - {} bids received",
            project.title,
            project.bids.len()
        ),
        timestamp: project.posted_date,
        icon: ActivityIcon::for_kind(NotificationType::Project),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{self, SeedData};
    use chrono::{DateTime, Duration, Utc};

    fn seed() -> SeedData {
        seed::load().unwrap()
    }

    fn sources(seed: &SeedData) -> ActivitySources<'_> {
        ActivitySources {
            notifications: &seed.notifications,
            bids: &seed.bids,
            projects: &seed.projects,
        }
    }

    fn ids(items: &[ActivityItem]) -> Vec<&str> {
        items.iter().map(|a| a.id.as_str()).collect()
    }

    fn assert_newest_first(items: &[ActivityItem]) {
        for pair in items.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_anonymous_viewer_sees_notifications_only() {
        let seed = seed();
        let feed = recent_activity(&sources(&seed), None);

        assert_eq!(ids(&feed), vec!["2", "1", "3"]);
        assert_eq!(feed[0].icon, ActivityIcon::Chat);
        assert_eq!(feed[1].icon, ActivityIcon::Briefcase);
        assert_eq!(feed[2].icon, ActivityIcon::Currency);
    }

    #[test]
    fn test_developer_feed_includes_own_bids() {
        let seed = seed();
        let viewer = User::Developer(seed.developers[0].clone());
        let feed = recent_activity(&sources(&seed), Some(&viewer));

        // Bid 1 shares its timestamp with notification 1 and follows it
        assert_eq!(ids(&feed), vec!["2", "1", "bid-1", "3"]);
        assert_newest_first(&feed);

        let bid = &feed[2];
        assert_eq!(bid.title, "Bid Submitted");
        assert_eq!(bid.kind, NotificationType::Bid);
        assert_eq!(
            bid.description,
            "You submitted a bid for \"E-commerce Website for Fashion Brand\" - ₹75,000"
        );
    }

    #[test]
    fn test_bid_for_unknown_project_names_the_id() {
        let seed = seed();
        let viewer = User::Developer(seed.developers[1].clone());
        let sources = ActivitySources {
            notifications: &[],
            bids: &seed.bids,
            projects: &[],
        };

        let feed = recent_activity(&sources, Some(&viewer));
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].description, "You submitted a bid for \"4\" - ₹45,000");
    }

    #[test]
    fn test_client_feed_includes_own_projects() {
        let seed = seed();
        let viewer = User::Client(seed.clients[0].clone());
        let feed = recent_activity(&sources(&seed), Some(&viewer));

        assert_eq!(ids(&feed), vec!["2", "1", "3", "project-1", "project-3"]);
        assert_newest_first(&feed);
        assert_eq!(
            feed[3].description,
            "You posted \"E-commerce Website for Fashion Brand\" - 2 bids received"
        );
        assert_eq!(feed[3].icon, ActivityIcon::Briefcase);
    }

    #[test]
    fn test_feed_is_capped_and_sorted() {
        let seed = seed();
        let base: DateTime<Utc> = seed.notifications[0].timestamp;

        let notifications: Vec<Notification> = (0..10)
            .map(|i| {
                let mut n = seed.notifications[0].clone();
                n.id = format!("n{}", i);
                n.timestamp = base + Duration::hours(i);
                n
            })
            .collect();

        let bids: Vec<Bid> = (0..6)
            .map(|i| {
                let mut b = seed.bids[0].clone();
                b.id = format!("b{}", i);
                b.submitted_date = base + Duration::minutes(30 * i);
                b
            })
            .collect();

        let viewer = User::Developer(seed.developers[0].clone());
        let sources = ActivitySources {
            notifications: &notifications,
            bids: &bids,
            projects: &seed.projects,
        };
        let feed = recent_activity(&sources, Some(&viewer));

        assert!(feed.len() <= MAX_ACTIVITY_ITEMS);
        assert_newest_first(&feed);
        // Only the first three notifications are considered
        assert!(feed.iter().all(|a| a.id != "n9"));
        assert_eq!(ids(&feed), vec!["n2", "n1", "bid-b1", "n0", "bid-b0"]);
    }

    #[test]
    fn test_system_notification_uses_person_icon() {
        let seed = seed();
        let mut notification = seed.notifications[0].clone();
        notification.notification_type = NotificationType::System;

        let sources = ActivitySources {
            notifications: std::slice::from_ref(&notification),
            bids: &[],
            projects: &[],
        };
        let feed = recent_activity(&sources, None);
        assert_eq!(feed[0].icon, ActivityIcon::Person);
    }
}
