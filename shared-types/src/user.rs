use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Discriminant of the `User` sum type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Client,
    Developer,
}

impl UserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserKind::Client => "client",
            UserKind::Developer => "developer",
        }
    }
}

impl fmt::Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields every marketplace member carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct UserBase {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub rating: f64,
    pub review_count: u32,
    pub verified: bool,
    pub joined_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    #[serde(flatten)]
    pub base: UserBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default)]
    pub projects_posted: u32,
    #[serde(default)]
    #[ts(type = "number")]
    pub total_spent: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Busy,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperProfile {
    #[serde(flatten)]
    pub base: UserBase,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    #[ts(type = "number")]
    pub hourly_rate: u64,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub completed_projects: u32,
    #[serde(default)]
    pub success_rate: u32, // percent
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub availability: Availability,
}

/// A marketplace member, discriminated by the `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum User {
    Client(ClientProfile),
    Developer(DeveloperProfile),
}

impl User {
    pub fn base(&self) -> &UserBase {
        match self {
            User::Client(client) => &client.base,
            User::Developer(developer) => &developer.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut UserBase {
        match self {
            User::Client(client) => &mut client.base,
            User::Developer(developer) => &mut developer.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn kind(&self) -> UserKind {
        match self {
            User::Client(_) => UserKind::Client,
            User::Developer(_) => UserKind::Developer,
        }
    }

    pub fn is_client(&self) -> bool {
        matches!(self, User::Client(_))
    }

    pub fn is_developer(&self) -> bool {
        matches!(self, User::Developer(_))
    }
}

impl From<ClientProfile> for User {
    fn from(profile: ClientProfile) -> Self {
        User::Client(profile)
    }
}

impl From<DeveloperProfile> for User {
    fn from(profile: DeveloperProfile) -> Self {
        User::Developer(profile)
    }
}

/// Registration form payload
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: UserKind,
}

/// Partial update of the shared profile fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(id: &str) -> UserBase {
        UserBase {
            id: id.to_string(),
            name: "Priya Sharma".to_string(),
            email: "priya@company.com".to_string(),
            avatar: None,
            rating: 4.9,
            review_count: 45,
            verified: true,
            joined_date: "2023-03-10".to_string(),
        }
    }

    #[test]
    fn test_user_tagged_by_type() {
        let user = User::Client(ClientProfile {
            base: base("1"),
            company: Some("Tech Innovations Pvt Ltd".to_string()),
            industry: None,
            projects_posted: 23,
            total_spent: 185000,
        });

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["type"], "client");
        assert_eq!(json["id"], "1");
        assert_eq!(json["reviewCount"], 45);
        assert_eq!(json["projectsPosted"], 23);
        assert!(json.get("industry").is_none());

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_bare_record_defaults_profile_fields() {
        let json = r#"{
            "id": "1700000000000",
            "name": "New Dev",
            "email": "dev@example.com",
            "type": "developer",
            "rating": 0,
            "reviewCount": 0,
            "verified": false,
            "joinedDate": "2024-02-01T10:00:00.000Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        match user {
            User::Developer(dev) => {
                assert_eq!(dev.base.name, "New Dev");
                assert!(dev.skills.is_empty());
                assert_eq!(dev.availability, Availability::Available);
            }
            _ => panic!("Expected developer"),
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let json = r#"{"id":"1","name":"x","email":"x","type":"admin","rating":0,"reviewCount":0,"verified":false,"joinedDate":""}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
