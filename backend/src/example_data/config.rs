//! Example data configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_SEED: u64 = 42;
const DEFAULT_CANDIDATE_COUNT: usize = 20;

/// Configuration values controlling example data seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Enable example data seeding on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Seed for the deterministic candidate generator.
    pub seed: Option<u64>,
    /// Number of generated candidates appended to the curated users.
    pub candidate_count: Option<usize>,
}

impl ExampleDataSettings {
    /// Return the configured generator seed, falling back to the default.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Return the configured candidate count, falling back to the default.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidate_count.unwrap_or(DEFAULT_CANDIDATE_COUNT)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for example data configuration parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> ExampleDataSettings {
        ExampleDataSettings::load_from_iter([OsString::from("backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("EXAMPLE_DATA_ENABLED", None::<String>),
            ("EXAMPLE_DATA_SEED", None::<String>),
            ("EXAMPLE_DATA_CANDIDATE_COUNT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.enabled);
        assert_eq!(settings.seed(), DEFAULT_SEED);
        assert_eq!(settings.candidate_count(), DEFAULT_CANDIDATE_COUNT);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EXAMPLE_DATA_ENABLED", Some("true".to_owned())),
            ("EXAMPLE_DATA_SEED", Some("7".to_owned())),
            ("EXAMPLE_DATA_CANDIDATE_COUNT", Some("5".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.enabled);
        assert_eq!(settings.seed(), 7);
        assert_eq!(settings.candidate_count(), 5);
    }
}
