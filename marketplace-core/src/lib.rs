//! Marketplace Core
//!
//! The logic behind the freelance marketplace UI, kept free of rendering
//! and I/O so it can be shared by any front end.
//!
//! # Modules
//!
//! - `filter`: project search and filter criteria for the browse page
//! - `activity`: the dashboard activity feed and relative-time labels
//! - `stats`: dashboard overview numbers for clients and developers
//! - `state`: the `Marketplace` container holding a session's projects,
//!   bids and notifications
//! - `session`: the signed-in user and the key-value store it persists to
//! - `seed`: bundled sample data
//!
//! # Example
//!
//! ```rust,ignore
//! use marketplace_core::Marketplace;
//! use shared_types::ProjectFilters;
//!
//! let market = Marketplace::seeded()?;
//! let filters = ProjectFilters { search: "react".into(), ..Default::default() };
//! let projects = market.filter(&filters);
//! ```

pub mod activity;
pub mod filter;
pub mod seed;
pub mod session;
pub mod state;
pub mod stats;

pub use activity::{format_time_ago, recent_activity, ActivitySources, MAX_ACTIVITY_ITEMS};
pub use filter::{filter_projects, CompiledFilters, FilterError};
pub use session::{FileStore, MemoryStore, Session, SessionError, SessionStore};
pub use state::{Marketplace, MarketplaceError};
pub use stats::dashboard_stats;
