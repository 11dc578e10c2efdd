//! Access to the search path variable.

use std::ffi::OsString;

/// Reads environment variables; the resolver only ever asks for the search path.
pub trait EnvProvider {
    fn get(&self, key: &str) -> Option<OsString>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed set of variables for tests; anything not set reads as unset.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockEnv {
    vars: Vec<(String, OsString)>,
}

#[cfg(test)]
impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
impl EnvProvider for MockEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}
