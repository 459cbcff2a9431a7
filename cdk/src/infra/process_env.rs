//! Process environment: implements `ProcessEnv` over `std::env`.

use crate::application::ports::{EnvMap, ProcessEnv};

/// Production `ProcessEnv`. Variables whose name or value is not valid UTF-8
/// are skipped.
pub struct OsProcessEnv;

impl ProcessEnv for OsProcessEnv {
    fn vars(&self) -> EnvMap {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
