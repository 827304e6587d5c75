use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::project::ProjectCategory;

/// Criteria set from the browse-projects filter panel.
///
/// Empty strings and empty lists mean "not set". `budget_range` and
/// `client_rating` stay as the raw UI tokens (`"25000-50000"`, `"250000+"`,
/// `"4.5+"`); they are parsed when the filters are compiled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectFilters {
    pub search: String,
    pub category: Option<ProjectCategory>,
    pub budget_range: Option<String>,
    pub skills: Vec<String>,
    pub client_rating: Option<String>,
}

impl ProjectFilters {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.category.is_none()
            && is_blank(&self.budget_range)
            && self.skills.is_empty()
            && is_blank(&self.client_rating)
    }

    /// Count shown next to "Clear All": one per selected skill plus one per
    /// scalar criterion. The search box is not counted.
    pub fn active_count(&self) -> usize {
        self.skills.len()
            + usize::from(self.category.is_some())
            + usize::from(!is_blank(&self.budget_range))
            + usize::from(!is_blank(&self.client_rating))
    }

    /// Add the skill if absent, remove it otherwise
    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(pos) = self.skills.iter().position(|s| s == skill) {
            self.skills.remove(pos);
        } else {
            self.skills.push(skill.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn is_blank(token: &Option<String>) -> bool {
    token.as_deref().map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let filters = ProjectFilters::default();
        assert!(filters.is_empty());
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_blank_tokens_count_as_unset() {
        let filters = ProjectFilters {
            budget_range: Some(String::new()),
            client_rating: Some(String::new()),
            ..Default::default()
        };
        assert!(filters.is_empty());
    }

    #[test]
    fn test_active_count_excludes_search() {
        let filters = ProjectFilters {
            search: "react".to_string(),
            category: Some(ProjectCategory::MobileApp),
            budget_range: Some("250000+".to_string()),
            skills: vec!["React".to_string(), "PHP".to_string()],
            client_rating: None,
        };
        assert!(!filters.is_empty());
        assert_eq!(filters.active_count(), 4);
    }

    #[test]
    fn test_toggle_skill() {
        let mut filters = ProjectFilters::default();
        filters.toggle_skill("React");
        filters.toggle_skill("PHP");
        assert_eq!(filters.skills, vec!["React", "PHP"]);

        filters.toggle_skill("React");
        assert_eq!(filters.skills, vec!["PHP"]);

        filters.clear();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_deserialize_partial_criteria() {
        let filters: ProjectFilters =
            serde_json::from_str(r#"{"budgetRange":"0-25000","skills":["Figma"]}"#).unwrap();
        assert_eq!(filters.budget_range.as_deref(), Some("0-25000"));
        assert_eq!(filters.skills, vec!["Figma"]);
        assert!(filters.search.is_empty());
    }
}
