use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::ValueEnum;
use marketplace_core::activity::{format_amount, format_time_ago};
use marketplace_core::filter::CompiledFilters;
use marketplace_core::seed;
use marketplace_core::{Marketplace, Session, SessionStore};
use serde::Serialize;
use shared_types::{
    DashboardStats, Project, ProjectFilters, ProjectsResponse, RegisterRequest,
    UpdateProfileRequest, User, UserKind,
};

use crate::config::DisplayConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Role {
    Client,
    Developer,
}

impl From<Role> for UserKind {
    fn from(role: Role) -> Self {
        match role {
            Role::Client => UserKind::Client,
            Role::Developer => UserKind::Developer,
        }
    }
}

/// Shared state every command runs against
pub struct App<S: SessionStore> {
    pub market: Marketplace,
    pub session: Session<S>,
    pub display: DisplayConfig,
    pub json: bool,
}

impl<S: SessionStore> App<S> {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }

    fn money(&self, amount: u64) -> String {
        format!("{}{}", self.display.currency_symbol, format_amount(amount))
    }

    fn require_user(&self) -> Result<&User> {
        match self.session.current_user() {
            Some(user) => Ok(user),
            None => bail!("Not signed in. Run `marketplace login --email <EMAIL>` first."),
        }
    }
}

pub fn list_projects<S: SessionStore>(
    ctx: &App<S>,
    filters: ProjectFilters,
    strict: bool,
) -> Result<()> {
    if strict {
        CompiledFilters::try_compile(&filters).context("Invalid filter criteria")?;
    }

    let projects: Vec<Project> = ctx.market.filter(&filters).into_iter().cloned().collect();
    let response = ProjectsResponse {
        total: ctx.market.projects().len(),
        projects,
    };

    ctx.emit(&response, || {
        let mut out = format!(
            "Showing {} of {} projects",
            response.projects.len(),
            response.total
        );
        for project in &response.projects {
            out.push_str("\n\n");
            out.push_str(&project_card(ctx, project));
        }
        out
    })
}

pub fn featured<S: SessionStore>(ctx: &App<S>) -> Result<()> {
    let projects: Vec<Project> = ctx
        .market
        .featured(ctx.display.featured_limit)
        .into_iter()
        .cloned()
        .collect();

    ctx.emit(&projects, || {
        projects
            .iter()
            .map(|p| project_card(ctx, p))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

fn project_card<S: SessionStore>(ctx: &App<S>, project: &Project) -> String {
    let mut card = String::new();
    if project.featured {
        card.push_str("* Featured Project\n");
    }
    card.push_str(&format!(
        "[{}] {}\n  {} | {} | posted {}\n  Budget: {} - {} | Timeline: {}\n  Skills: {}\n  Client: {} ({}, {} reviews) | {} bids received",
        project.id,
        project.title,
        project.category.label(),
        project.status,
        format_time_ago(Utc::now(), project.posted_date),
        ctx.money(project.budget.min),
        ctx.money(project.budget.max),
        project.timeline,
        project.skills.join(", "),
        project.client.base.name,
        project.client.base.rating,
        project.client.base.review_count,
        project.bids.len(),
    ));
    card
}

pub fn activity<S: SessionStore>(ctx: &App<S>) -> Result<()> {
    let feed = ctx.market.recent_activity(ctx.session.current_user());
    let now = Utc::now();

    ctx.emit(&feed, || {
        if feed.is_empty() {
            return "No recent activity".to_string();
        }
        feed.iter()
            .map(|item| {
                format!(
                    "{:<9} {} - {} ({})",
                    format!("[{:?}]", item.icon).to_lowercase(),
                    item.title,
                    item.description,
                    format_time_ago(now, item.timestamp)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}

pub fn stats<S: SessionStore>(ctx: &App<S>) -> Result<()> {
    let user = ctx.require_user()?;
    let stats = ctx.market.dashboard_stats(user);

    ctx.emit(&stats, || match &stats {
        DashboardStats::Developer(s) => format!(
            "Active Bids: {}\nAccepted Projects: {}\nTotal Earnings: {}\nAverage Rating: {}/5",
            s.active_bids,
            s.accepted_projects,
            ctx.money(s.total_earnings),
            s.average_rating
        ),
        DashboardStats::Client(s) => format!(
            "Active Projects: {}\nCompleted Projects: {}\nTotal Investment: {}\nBids Received: {}",
            s.active_projects,
            s.completed_projects,
            ctx.money(s.total_spent),
            s.total_bids_received
        ),
    })
}

/// Sign in as the seeded member with this email. There is no password
/// check; the marketplace has no account backend.
pub fn login<S: SessionStore>(ctx: &mut App<S>, email: &str) -> Result<()> {
    let seed = seed::load()?;
    let developer = seed.developers.into_iter().find(|d| d.base.email == email);
    let client = seed.clients.into_iter().find(|c| c.base.email == email);

    let user: User = match (developer, client) {
        (Some(developer), _) => developer.into(),
        (None, Some(client)) => client.into(),
        (None, None) => bail!("No member with email {}", email),
    };

    ctx.session.sign_in(user)?;
    whoami(ctx)
}

pub fn register<S: SessionStore>(
    ctx: &mut App<S>,
    name: String,
    email: String,
    role: Role,
) -> Result<()> {
    ctx.session.register(RegisterRequest {
        name,
        email,
        kind: role.into(),
    })?;
    whoami(ctx)
}

pub fn update_profile<S: SessionStore>(
    ctx: &mut App<S>,
    update: UpdateProfileRequest,
) -> Result<()> {
    if ctx.session.update_profile(update)?.is_none() {
        bail!("Not signed in");
    }
    whoami(ctx)
}

pub fn logout<S: SessionStore>(ctx: &mut App<S>) -> Result<()> {
    ctx.session.sign_out()?;
    println!("Signed out");
    Ok(())
}

pub fn whoami<S: SessionStore>(ctx: &App<S>) -> Result<()> {
    match ctx.session.current_user() {
        Some(user) => ctx.emit(user, || {
            let base = user.base();
            format!(
                "{} <{}> ({}), rating {} from {} reviews{}",
                base.name,
                base.email,
                user.kind(),
                base.rating,
                base.review_count,
                if base.verified { ", verified" } else { "" }
            )
        }),
        None => {
            println!("Not signed in");
            Ok(())
        }
    }
}
