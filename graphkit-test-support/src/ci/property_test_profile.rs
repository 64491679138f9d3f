//! Property-test run profile for CI and local overrides.
//!
//! Every property suite in the workspace reads its case count and fork mode
//! through [`ProptestRunProfile`], so one pair of environment variables tunes
//! them all.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const GRAPHKIT_PBT_FORK_ENV_KEY: &str = "GRAPHKIT_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment.
    ///
    /// Missing or malformed overrides fall back to the supplied defaults; a
    /// malformed value is reported with a `warn` event.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphkit_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Loads a profile through an arbitrary key lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphkit_test_support::ci::property_test_profile::{
    ///     PROGTEST_CASES_ENV_KEY, ProptestRunProfile,
    /// };
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, false, |key| {
    ///     (key == PROGTEST_CASES_ENV_KEY).then(|| "12".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 12);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup<L>(default_cases: u32, default_fork: bool, lookup: L) -> Self
    where
        L: Fn(&'static str) -> Option<String>,
    {
        let cases = override_or(
            PROGTEST_CASES_ENV_KEY,
            lookup(PROGTEST_CASES_ENV_KEY),
            default_cases,
            parse_cases,
        );
        let fork = override_or(
            GRAPHKIT_PBT_FORK_ENV_KEY,
            lookup(GRAPHKIT_PBT_FORK_ENV_KEY),
            default_fork,
            parse_bool,
        );
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

fn override_or<T, F>(key: &'static str, raw: Option<String>, default: T, parser: F) -> T
where
    F: Fn(&str) -> Result<T, String>,
{
    let Some(raw) = raw else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
