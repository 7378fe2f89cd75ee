//! Main client state container
//!
//! Owns the wired component graph. The session store is the single
//! writer of the credential storage; the API client and navigation
//! guard hold references to it and read through its accessors only.

use linkshort_api::ApiClient;
use linkshort_routes::{NavigationGuard, Route};
use linkshort_session::SessionStore;
use linkshort_storage::Database;

use crate::config::Config;
use crate::Result;

pub struct Client {
    config: Config,
    db: Database,
    session: SessionStore,
    api: ApiClient,
    guard: NavigationGuard,
}

impl Client {
    /// Initialize a new client instance from persisted state.
    pub fn new(config: Config) -> Result<Self> {
        // Ensure the profile directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Self::with_database(config, db)
    }

    /// Build the component graph on an already-open database. Used by
    /// tests with an in-memory database.
    pub fn with_database(config: Config, db: Database) -> Result<Self> {
        let session = SessionStore::new(db.clone());
        let api = ApiClient::new(config.api_config(), session.clone())?;
        let guard = NavigationGuard::new(session.clone());

        tracing::info!(
            api_base = %config.api_base,
            logged_in = session.is_authenticated(),
            "Client initialized"
        );

        Ok(Self {
            config,
            db,
            session,
            api,
            guard,
        })
    }

    // === Session operations ===

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Explicit logout: clears the credential record and notifies
    /// session subscribers.
    pub fn logout(&self) -> Result<()> {
        Ok(self.session.clear_auth()?)
    }

    // === API operations ===

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // === Navigation operations ===

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    /// Commit a navigation attempt through the guard.
    pub fn navigate(&self, target: Route) -> Route {
        self.guard.resolve(target)
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for Client {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            session: self.session.clone(),
            api: self.api.clone(),
            guard: self.guard.clone(),
        }
    }
}
