use std::path::PathBuf;

pub const SNAPSHOT_VAR: &str = "GROCERY_SNAPSHOT";
pub const DEFAULT_USER_VAR: &str = "GROCERY_DEFAULT_USER";

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub snapshot_path: PathBuf,
    pub default_user: Option<u32>,
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources").join("pantry.json")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            default_user: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from any variable source; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let default_user = match get(DEFAULT_USER_VAR) {
            Some(raw) => Some(raw.trim().parse::<u32>().map_err(|_| ConfigError::InvalidVar {
                var: DEFAULT_USER_VAR.to_string(),
                value: raw.clone(),
            })?),
            None => None,
        };

        Ok(Self {
            snapshot_path: get(SNAPSHOT_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_snapshot_path),
            default_user,
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidVar { var: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|var| map.get(var).cloned())
    }

    #[test]
    fn nothing_set_gives_defaults() {
        assert_eq!(settings(&[]).unwrap(), Settings::default());
        assert!(Settings::default().snapshot_path.ends_with("resources/pantry.json"));
    }

    #[test]
    fn reads_every_variable() {
        let s = settings(&[
            (SNAPSHOT_VAR, "/tmp/p.json"),
            (DEFAULT_USER_VAR, " 38 "),
        ])
        .unwrap();
        assert_eq!(s.snapshot_path, PathBuf::from("/tmp/p.json"));
        assert_eq!(s.default_user, Some(38));
    }

    #[test]
    fn empty_values_are_unset() {
        let s = settings(&[(SNAPSHOT_VAR, ""), (DEFAULT_USER_VAR, "  ")]).unwrap();
        assert_eq!(s.snapshot_path, default_snapshot_path());
        assert_eq!(s.default_user, None);
    }

    #[test]
    fn non_numeric_user_is_rejected() {
        let err = settings(&[(DEFAULT_USER_VAR, "invalid")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for GROCERY_DEFAULT_USER: 'invalid'");
    }
}
