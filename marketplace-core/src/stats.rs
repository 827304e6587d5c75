use shared_types::{
    Bid, BidStatus, ClientProfile, ClientStats, DashboardStats, DeveloperProfile, DeveloperStats,
    Project, ProjectStatus, User,
};

pub fn dashboard_stats(viewer: &User, projects: &[Project], bids: &[Bid]) -> DashboardStats {
    match viewer {
        User::Developer(developer) => DashboardStats::Developer(developer_stats(developer, bids)),
        User::Client(client) => DashboardStats::Client(client_stats(client, projects)),
    }
}

pub fn developer_stats(developer: &DeveloperProfile, bids: &[Bid]) -> DeveloperStats {
    let own: Vec<&Bid> = bids
        .iter()
        .filter(|bid| bid.developer.base.id == developer.base.id)
        .collect();
    let accepted: Vec<&Bid> = own
        .iter()
        .copied()
        .filter(|bid| bid.status == BidStatus::Accepted)
        .collect();

    DeveloperStats {
        active_bids: own
            .iter()
            .filter(|bid| bid.status == BidStatus::Pending)
            .count(),
        accepted_projects: accepted.len(),
        total_earnings: accepted.iter().map(|bid| bid.amount).sum(),
        average_rating: developer.base.rating,
    }
}

/// `total_spent` sums each project's budget ceiling
pub fn client_stats(client: &ClientProfile, projects: &[Project]) -> ClientStats {
    let own: Vec<&Project> = projects
        .iter()
        .filter(|project| project.client.base.id == client.base.id)
        .collect();

    let count_status = |status: ProjectStatus| own.iter().filter(|p| p.status == status).count();

    ClientStats {
        active_projects: count_status(ProjectStatus::InProgress),
        completed_projects: count_status(ProjectStatus::Completed),
        total_spent: own.iter().map(|p| p.budget.max).sum(),
        total_bids_received: own.iter().map(|p| p.bids.len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_developer_stats() {
        let mut seed = seed::load().unwrap();
        let developer = seed.developers[0].clone();

        let stats = developer_stats(&developer, &seed.bids);
        assert_eq!(stats.active_bids, 1);
        assert_eq!(stats.accepted_projects, 0);
        assert_eq!(stats.total_earnings, 0);
        assert_eq!(stats.average_rating, 4.8);

        seed.bids[0].status = BidStatus::Accepted;
        let stats = developer_stats(&developer, &seed.bids);
        assert_eq!(stats.active_bids, 0);
        assert_eq!(stats.accepted_projects, 1);
        assert_eq!(stats.total_earnings, 75000);
    }

    #[test]
    fn test_client_stats() {
        let seed = seed::load().unwrap();
        let stats = client_stats(&seed.clients[0], &seed.projects);

        assert_eq!(stats.active_projects, 1);
        assert_eq!(stats.completed_projects, 0);
        assert_eq!(stats.total_spent, 150000);
        assert_eq!(stats.total_bids_received, 2);
    }

    #[test]
    fn test_dashboard_stats_follow_viewer_role() {
        let seed = seed::load().unwrap();

        let client = User::Client(seed.clients[1].clone());
        match dashboard_stats(&client, &seed.projects, &seed.bids) {
            DashboardStats::Client(stats) => {
                assert_eq!(stats.total_spent, 310000);
                assert_eq!(stats.total_bids_received, 1);
            }
            other => panic!("Expected client stats, got {:?}", other),
        }

        let developer = User::Developer(seed.developers[2].clone());
        assert!(matches!(
            dashboard_stats(&developer, &seed.projects, &seed.bids),
            DashboardStats::Developer(DeveloperStats { active_bids: 1, .. })
        ));
    }
}
