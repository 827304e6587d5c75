//! The signed-in user, persisted as one JSON record under [`SESSION_KEY`].
//!
//! Stored records are validated when the session is restored: anything
//! that does not deserialize into a [`User`] is discarded and the session
//! starts signed out.

mod store;

pub use store::{FileStore, MemoryStore, SessionStore};

use chrono::Utc;
use shared_types::{
    Availability, ClientProfile, DeveloperProfile, RegisterRequest, UpdateProfileRequest, User,
    UserBase, UserKind,
};
use uuid::Uuid;

pub const SESSION_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct Session<S: SessionStore> {
    store: S,
    user: Option<User>,
}

impl<S: SessionStore> Session<S> {
    /// Rehydrate from the store, falling back to signed out
    pub fn restore(mut store: S) -> Self {
        let user = match store.get(SESSION_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<User>(&payload) {
                Ok(user) => {
                    tracing::debug!("Restored session for {}", user.id());
                    Some(user)
                }
                Err(e) => {
                    tracing::warn!("Discarding unreadable session record: {}", e);
                    if let Err(e) = store.remove(SESSION_KEY) {
                        tracing::warn!("Failed to clear session record: {}", e);
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Session store unavailable: {}", e);
                None
            }
        };

        Self { store, user }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn sign_in(&mut self, user: User) -> Result<&User, SessionError> {
        self.store.set(SESSION_KEY, &serde_json::to_string(&user)?)?;
        tracing::info!("Signed in as {} ({})", user.name(), user.kind());
        Ok(&*self.user.insert(user))
    }

    /// Create a fresh, unrated and unverified member and sign them in
    pub fn register(&mut self, request: RegisterRequest) -> Result<&User, SessionError> {
        let base = UserBase {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            avatar: None,
            rating: 0.0,
            review_count: 0,
            verified: false,
            joined_date: Utc::now().to_rfc3339(),
        };

        let user = match request.kind {
            UserKind::Client => User::Client(ClientProfile {
                base,
                company: None,
                industry: None,
                projects_posted: 0,
                total_spent: 0,
            }),
            UserKind::Developer => User::Developer(DeveloperProfile {
                base,
                skills: Vec::new(),
                hourly_rate: 0,
                portfolio: Vec::new(),
                experience: String::new(),
                completed_projects: 0,
                success_rate: 0,
                languages: Vec::new(),
                availability: Availability::Available,
            }),
        };

        self.sign_in(user)
    }

    pub fn sign_out(&mut self) -> Result<(), SessionError> {
        self.store.remove(SESSION_KEY)?;
        if let Some(user) = self.user.take() {
            tracing::info!("Signed out {}", user.name());
        }
        Ok(())
    }

    /// Merge the given fields into the signed-in user. Returns `None` when
    /// nobody is signed in.
    pub fn update_profile(
        &mut self,
        update: UpdateProfileRequest,
    ) -> Result<Option<&User>, SessionError> {
        let Some(current) = self.user.as_ref() else {
            return Ok(None);
        };

        let mut user = current.clone();
        let base = user.base_mut();
        if let Some(name) = update.name {
            base.name = name;
        }
        if let Some(email) = update.email {
            base.email = email;
        }
        if let Some(avatar) = update.avatar {
            base.avatar = Some(avatar);
        }

        self.store.set(SESSION_KEY, &serde_json::to_string(&user)?)?;
        Ok(Some(&*self.user.insert(user)))
    }
}
