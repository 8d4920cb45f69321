//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites read their case count and fork mode through one profile so a CI
//! job can deepen every property suite with a single variable.

use std::env;

/// Environment variable controlling proptest case counts.
pub const GRAPHGEN_PBT_CASES_ENV_KEY: &str = "GRAPHGEN_PBT_CASES";
/// Environment variable controlling proptest process forking.
pub const GRAPHGEN_PBT_FORK_ENV_KEY: &str = "GRAPHGEN_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphgen_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::load_from(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Load a profile through `lookup`, which maps a variable name to its
    /// value. Invalid overrides are logged and replaced by the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphgen_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load_from(64, false, |key| {
    ///     (key == "GRAPHGEN_PBT_CASES").then(|| "8".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 8);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn load_from<F>(default_cases: u32, default_fork: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cases = override_or_default(
            GRAPHGEN_PBT_CASES_ENV_KEY,
            lookup(GRAPHGEN_PBT_CASES_ENV_KEY),
            default_cases,
            parse_cases,
        );
        let fork = override_or_default(
            GRAPHGEN_PBT_FORK_ENV_KEY,
            lookup(GRAPHGEN_PBT_FORK_ENV_KEY),
            default_fork,
            parse_bool,
        );
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or_default<T: Copy>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    parser: fn(&str) -> Result<T, String>,
) -> T {
    let Some(raw_value) = raw else {
        return default;
    };
    match parser(&raw_value) {
        Ok(value) => value,
        Err(reason) => {
            tracing::warn!(
                env = key,
                raw = %raw_value,
                reason = %reason,
                "invalid property-test profile override; using default",
            );
            default
        }
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
