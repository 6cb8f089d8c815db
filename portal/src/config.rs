//! Portal settings loaded via OrthoConfig.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("seeds.json")
}

/// Configuration values for the portal core.
///
/// Values layer from defaults, configuration files, `PORTAL_*` environment
/// variables and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTAL")]
pub struct PortalSettings {
    /// Seed registry to load master lists from.
    pub registry_path: Option<PathBuf>,
    /// Delay before a deferred navigation applies, in milliseconds.
    #[ortho_config(default = 200)]
    pub navigation_delay_ms: u64,
    /// Number of messages shown in the dashboard preview.
    #[ortho_config(default = 5)]
    pub recent_messages_limit: usize,
}

impl PortalSettings {
    /// Return the configured registry path, falling back to the bundled seeds.
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }

    /// Delay applied by deferred navigation.
    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }

    /// Size of the dashboard's recent-message preview.
    pub fn recent_messages_limit(&self) -> usize {
        self.recent_messages_limit
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for portal settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> PortalSettings {
        PortalSettings::load_from_iter([OsString::from("portal")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("PORTAL_REGISTRY_PATH", None::<String>),
            ("PORTAL_NAVIGATION_DELAY_MS", None::<String>),
            ("PORTAL_RECENT_MESSAGES_LIMIT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.registry_path(), default_registry_path());
        assert!(settings.registry_path.is_none());
        assert_eq!(settings.navigation_delay_ms, 200);
        assert_eq!(settings.navigation_delay(), Duration::from_millis(200));
        assert_eq!(settings.recent_messages_limit(), 5);
    }

    #[rstest]
    fn a_single_override_keeps_other_defaults() {
        let _guard = lock_env([
            ("PORTAL_REGISTRY_PATH", None::<String>),
            ("PORTAL_NAVIGATION_DELAY_MS", None::<String>),
            ("PORTAL_RECENT_MESSAGES_LIMIT", Some("2".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.recent_messages_limit(), 2);
        assert_eq!(settings.navigation_delay(), Duration::from_millis(200));
        assert_eq!(settings.registry_path(), default_registry_path());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "PORTAL_REGISTRY_PATH",
                Some("/tmp/portal-seeds.json".to_owned()),
            ),
            ("PORTAL_NAVIGATION_DELAY_MS", Some("750".to_owned())),
            ("PORTAL_RECENT_MESSAGES_LIMIT", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.registry_path(),
            PathBuf::from("/tmp/portal-seeds.json")
        );
        assert_eq!(settings.navigation_delay(), Duration::from_millis(750));
        assert_eq!(settings.recent_messages_limit(), 3);
    }
}
