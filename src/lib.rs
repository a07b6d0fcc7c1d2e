//! # Shortlink Visits
//!
//! Read-access layer over the visits recorded for shortened URLs, backed by
//! PostgreSQL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Visit entities, immutable query values and collaborator traits
//! - **Application Layer** ([`application`]) - Keyset bulk cursor and the visit service
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and in-memory stores, pool setup
//!
//! ## Features
//!
//! - Bulk scans over all visits, unlocated visits or visits with an empty
//!   location, fetched in bounded blocks by `id > last seen id`
//! - Per short URL listings, newest first, where limit and offset are applied
//!   to an identifier-only selection before full rows are joined
//! - Per short URL counts with optional inclusive date bounds
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let config = shortlink_visits::config::load_from_env()?;
//! shortlink_visits::telemetry::init_tracing(&config)?;
//!
//! let pool = Arc::new(connect_pool(&config).await?);
//! let service = VisitService::new(
//!     Arc::new(PgVisitStore::new(pool.clone())),
//!     Arc::new(PgShortUrlResolver::new(pool)),
//! )
//! .with_block_size(config.visits_block_size)?;
//!
//! let mut unlocated = service.find_unlocated_visits(None)?;
//! while let Some(visit) = unlocated.try_next().await? {
//!     // geolocate `visit`
//! }
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::{VisitError, VisitResult};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::VisitService;
    pub use crate::application::visit_cursor::VisitStream;
    pub use crate::domain::entities::{DateRange, NewVisit, Visit, VisitLocation};
    pub use crate::domain::query::{LocationFilter, VisitsParams};
    pub use crate::domain::repositories::{ShortUrlResolver, VisitRowStore};
    pub use crate::error::{VisitError, VisitResult};
    pub use crate::infrastructure::persistence::{
        MemoryShortUrlResolver, MemoryVisitStore, PgShortUrlResolver, PgVisitStore,
    };
}
