use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DATA_DIR_ENV: &str = "MOCKMAN_DATA_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no platform data directory is available; pass --data-dir or set MOCKMAN_DATA_DIR")]
    ProjectDir,
}

/// Simulated latency for the mock flows. Every wait is a plain blocking
/// sleep; none of them can be cancelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pacing {
    pub create_system: Duration,
    pub generate_palette: Duration,
    pub create_typography: Duration,
    pub finalize: Duration,
    pub import_step: Duration,
    pub import_redirect: Duration,
    pub builder_save: Duration,
    pub publish: Duration,
    pub save_draft: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            create_system: Duration::from_millis(800),
            generate_palette: Duration::from_millis(1000),
            create_typography: Duration::from_millis(800),
            finalize: Duration::from_millis(600),
            import_step: Duration::from_millis(1500),
            import_redirect: Duration::from_millis(1000),
            builder_save: Duration::from_millis(500),
            publish: Duration::from_millis(1500),
            save_draft: Duration::from_millis(1000),
        }
    }
}

impl Pacing {
    pub fn instant() -> Self {
        Self {
            create_system: Duration::ZERO,
            generate_palette: Duration::ZERO,
            create_typography: Duration::ZERO,
            finalize: Duration::ZERO,
            import_step: Duration::ZERO,
            import_redirect: Duration::ZERO,
            builder_save: Duration::ZERO,
            publish: Duration::ZERO,
            save_draft: Duration::ZERO,
        }
    }

    pub fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockmanConfig {
    pub data_dir: PathBuf,
    pub pacing: Pacing,
}

impl MockmanConfig {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            pacing: Pacing::default(),
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Explicit directory first, then `MOCKMAN_DATA_DIR`, then the platform
    /// data directory.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let env = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        Self::resolve_from(explicit, env)
    }

    pub fn resolve_from(
        explicit: Option<PathBuf>,
        env: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let non_empty = |dir: &PathBuf| !dir.as_os_str().is_empty();
        if let Some(dir) = explicit.filter(non_empty).or(env.filter(non_empty)) {
            return Ok(Self::new(dir));
        }
        let project_dirs =
            ProjectDirs::from("app", "mockman", "Mockman").ok_or(ConfigError::ProjectDir)?;
        Ok(Self::new(project_dirs.data_dir()))
    }
}
