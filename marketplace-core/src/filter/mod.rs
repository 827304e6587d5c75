//! Project search and filtering for the browse page.
//!
//! Every supplied criterion must hold for a project to be kept; unset
//! criteria place no constraint. Results keep the input order.

mod criteria;

pub use criteria::{BudgetRange, RatingThreshold};

use shared_types::{Project, ProjectCategory, ProjectFilters};
use std::str::FromStr;

/// Budget presets offered in the filter panel (token, label)
pub const BUDGET_RANGES: [(&str, &str); 5] = [
    ("0-25000", "Under ₹25,000"),
    ("25000-50000", "₹25,000 - ₹50,000"),
    ("50000-100000", "₹50,000 - ₹1,00,000"),
    ("100000-250000", "₹1,00,000 - ₹2,50,000"),
    ("250000+", "Above ₹2,50,000"),
];

pub const CLIENT_RATINGS: [&str; 4] = ["4.5+", "4.0+", "3.5+", "3.0+"];

pub const POPULAR_SKILLS: [&str; 20] = [
    "React",
    "Node.js",
    "Python",
    "JavaScript",
    "TypeScript",
    "PHP",
    "WordPress",
    "Laravel",
    "Django",
    "React Native",
    "Flutter",
    "Vue.js",
    "Angular",
    "MongoDB",
    "MySQL",
    "PostgreSQL",
    "AWS",
    "Docker",
    "Figma",
    "Adobe XD",
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid budget range '{0}': expected 'min-max' or 'min+'")]
    MalformedBudgetRange(String),

    #[error("Invalid budget range '{0}': minimum exceeds maximum")]
    InvertedBudgetRange(String),

    #[error("Invalid client rating '{0}': expected a threshold like '4.5+'")]
    MalformedRating(String),
}

/// Filters with tokens parsed and the search term lowercased once
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledFilters {
    search: Option<String>,
    category: Option<ProjectCategory>,
    budget: Option<BudgetRange>,
    skills: Vec<String>,
    min_rating: Option<RatingThreshold>,
}

impl CompiledFilters {
    /// Compile, dropping any criterion whose token does not parse. A bad
    /// token never narrows the result to nothing or lets NaN bounds through.
    pub fn compile(filters: &ProjectFilters) -> Self {
        let mut compiled = Self::base(filters);

        compiled.budget = parse_token(filters.budget_range.as_deref()).unwrap_or_else(|e| {
            tracing::warn!("Ignoring budget filter: {}", e);
            None
        });
        compiled.min_rating = parse_token(filters.client_rating.as_deref()).unwrap_or_else(|e| {
            tracing::warn!("Ignoring client rating filter: {}", e);
            None
        });

        compiled
    }

    /// Compile, rejecting the filters if any token is malformed
    pub fn try_compile(filters: &ProjectFilters) -> Result<Self, FilterError> {
        let mut compiled = Self::base(filters);
        compiled.budget = parse_token(filters.budget_range.as_deref())?;
        compiled.min_rating = parse_token(filters.client_rating.as_deref())?;
        Ok(compiled)
    }

    fn base(filters: &ProjectFilters) -> Self {
        Self {
            search: (!filters.search.is_empty()).then(|| filters.search.to_lowercase()),
            category: filters.category,
            budget: None,
            skills: filters.skills.clone(),
            min_rating: None,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.budget.is_none()
            && self.skills.is_empty()
            && self.min_rating.is_none()
    }

    pub fn matches(&self, project: &Project) -> bool {
        if let Some(term) = &self.search {
            let hit = project.title.to_lowercase().contains(term)
                || project.description.to_lowercase().contains(term)
                || project
                    .skills
                    .iter()
                    .any(|skill| skill.to_lowercase().contains(term));
            if !hit {
                return false;
            }
        }

        if let Some(category) = self.category {
            if project.category != category {
                return false;
            }
        }

        if let Some(range) = &self.budget {
            if !range.admits(project.budget.min, project.budget.max) {
                return false;
            }
        }

        // Any selected skill is enough
        if !self.skills.is_empty() && !self.skills.iter().any(|s| project.skills.contains(s)) {
            return false;
        }

        if let Some(threshold) = &self.min_rating {
            if !threshold.admits(project.client.base.rating) {
                return false;
            }
        }

        true
    }
}

fn parse_token<T: FromStr<Err = FilterError>>(
    token: Option<&str>,
) -> Result<Option<T>, FilterError> {
    match token {
        Some(token) if !token.is_empty() => token.parse().map(Some),
        _ => Ok(None),
    }
}

/// Projects satisfying every supplied criterion, in input order
pub fn filter_projects(projects: &[Project], filters: &ProjectFilters) -> Vec<Project> {
    filter_project_refs(projects, filters)
        .into_iter()
        .cloned()
        .collect()
}

pub fn filter_project_refs<'a>(
    projects: &'a [Project],
    filters: &ProjectFilters,
) -> Vec<&'a Project> {
    let compiled = CompiledFilters::compile(filters);
    if compiled.is_unconstrained() {
        return projects.iter().collect();
    }

    let filtered: Vec<&Project> = projects.iter().filter(|p| compiled.matches(p)).collect();
    tracing::debug!(
        "Filtered {} projects down to {}",
        projects.len(),
        filtered.len()
    );
    filtered
}

/// Featured listings for the home page, in input order
pub fn featured_projects(projects: &[Project], limit: usize) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).take(limit).collect()
}
