use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, MockmanConfig};
use crate::design_system::{DesignSystemState, DesignSystemStore};
use crate::overview::{self, GettingStarted};
use crate::storage::{
    SnapshotStore, StorageError, DESIGN_SYSTEM_STORAGE_KEY, GETTING_STARTED_DISMISSED_KEY,
    USER_STORAGE_KEY,
};
use crate::tokens::{ComponentDefinition, DesignSystem};
use crate::user::{UserState, UserStore};
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no design system; create one first")]
    NoDesignSystem,
    #[error("no component with id {0}")]
    UnknownComponent(String),
}

/// Both stores plus the snapshot storage backing them.
pub struct App {
    pub config: MockmanConfig,
    pub storage: SnapshotStore,
    pub users: UserStore,
    pub design: DesignSystemStore,
}

impl App {
    pub fn bootstrap(config: MockmanConfig) -> Result<Self, AppError> {
        Self::bootstrap_with_clock(config, Rc::new(SystemClock))
    }

    /// Restores both snapshots, seeds the mock user and the placeholder
    /// design system when they are missing, then writes the result back.
    pub fn bootstrap_with_clock(
        config: MockmanConfig,
        clock: Rc<dyn Clock>,
    ) -> Result<Self, AppError> {
        let storage = SnapshotStore::new(&config.data_dir);
        let user_state: UserState = storage.load(USER_STORAGE_KEY)?;
        let design_state: DesignSystemState = storage.load(DESIGN_SYSTEM_STORAGE_KEY)?;

        let mut app = Self {
            users: UserStore::new(user_state, clock.clone()),
            design: DesignSystemStore::with_clock(design_state, clock),
            storage,
            config,
        };
        let seeded_user = app.users.initialize_user();
        let seeded_system = app.design.ensure_initialized();
        if seeded_user || seeded_system {
            app.persist()?;
        }
        tracing::info!(
            data_dir = %app.storage.root().display(),
            seeded_user,
            seeded_system,
            "app ready"
        );
        Ok(app)
    }

    pub fn persist(&self) -> Result<(), AppError> {
        self.storage.save(USER_STORAGE_KEY, self.users.state())?;
        self.storage
            .save(DESIGN_SYSTEM_STORAGE_KEY, self.design.state())?;
        Ok(())
    }

    pub fn design_system(&self) -> Result<&DesignSystem, AppError> {
        self.design.design_system().ok_or(AppError::NoDesignSystem)
    }

    pub fn component(&self, id: &str) -> Result<&ComponentDefinition, AppError> {
        self.design
            .component(id)
            .ok_or_else(|| AppError::UnknownComponent(id.to_string()))
    }

    pub fn getting_started(&self) -> Result<GettingStarted, AppError> {
        let dismissed = self.storage.get_flag(GETTING_STARTED_DISMISSED_KEY)?;
        Ok(overview::getting_started(self.design_system()?, dismissed))
    }

    /// Dismissing writes the flag; restoring removes it.
    pub fn set_getting_started_dismissed(&self, dismissed: bool) -> Result<(), AppError> {
        if dismissed {
            self.storage.set_flag(GETTING_STARTED_DISMISSED_KEY, true)?;
        } else {
            self.storage.remove(GETTING_STARTED_DISMISSED_KEY)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::Pacing;
    use crate::design_system::PLACEHOLDER_NAME;
    use crate::tokens::NewColorToken;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn config(dir: &std::path::Path) -> MockmanConfig {
        MockmanConfig::new(dir).with_pacing(Pacing::instant())
    }

    fn clock() -> Rc<FixedClock> {
        Rc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn bootstrap_seeds_and_persists() {
        let dir = tempdir().expect("tempdir");
        let app = App::bootstrap_with_clock(config(dir.path()), clock()).expect("bootstrap");

        assert!(app.users.user().is_some());
        assert_eq!(app.design_system().expect("system").name, PLACEHOLDER_NAME);
        assert!(app.storage.path_for(USER_STORAGE_KEY).exists());
        assert!(app.storage.path_for(DESIGN_SYSTEM_STORAGE_KEY).exists());
    }

    #[test]
    fn bootstrap_restores_existing_state() {
        let dir = tempdir().expect("tempdir");
        let mut first = App::bootstrap_with_clock(config(dir.path()), clock()).expect("first");
        first.design.update_info("Brand", None);
        first
            .design
            .add_color_token(NewColorToken::new("Ink", "#111111"));
        first.persist().expect("persist");
        let user_id = first.users.user().expect("user").id.clone();

        let second = App::bootstrap_with_clock(config(dir.path()), clock()).expect("second");
        let system = second.design_system().expect("system");
        assert_eq!(system.name, "Brand");
        assert_eq!(system.theme.tokens.colors[0].value, "#111111");
        assert_eq!(second.users.user().expect("user").id, user_id);
    }

    #[test]
    fn deleted_system_is_replaced_on_next_bootstrap() {
        let dir = tempdir().expect("tempdir");
        let mut app = App::bootstrap_with_clock(config(dir.path()), clock()).expect("bootstrap");
        app.design.delete();
        app.persist().expect("persist");
        assert!(matches!(app.design_system(), Err(AppError::NoDesignSystem)));

        let next = App::bootstrap_with_clock(config(dir.path()), clock()).expect("next");
        assert_eq!(next.design_system().expect("system").name, PLACEHOLDER_NAME);
    }

    #[test]
    fn unknown_component_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let app = App::bootstrap_with_clock(config(dir.path()), clock()).expect("bootstrap");
        assert!(matches!(
            app.component("missing"),
            Err(AppError::UnknownComponent(id)) if id == "missing"
        ));
    }

    #[test]
    fn getting_started_dismissal_persists() {
        let dir = tempdir().expect("tempdir");
        let app = App::bootstrap_with_clock(config(dir.path()), clock()).expect("bootstrap");
        assert!(app.getting_started().expect("checklist").visible());

        app.set_getting_started_dismissed(true).expect("dismiss");
        let reopened = App::bootstrap_with_clock(config(dir.path()), clock()).expect("reopen");
        assert!(!reopened.getting_started().expect("checklist").visible());

        reopened
            .set_getting_started_dismissed(false)
            .expect("restore");
        assert!(reopened.getting_started().expect("checklist").visible());
        assert!(!reopened
            .storage
            .path_for(GETTING_STARTED_DISMISSED_KEY)
            .exists());
    }
}
