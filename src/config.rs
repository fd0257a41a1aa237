//! Build-time client configuration.
//!
//! DESIGN
//! ======
//! A WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled. Missing or unparsable values fall
//! back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_TOAST_TTL_MS: u32 = 5000;

/// Route the user lands on after signing in.
pub const HOME_ROUTE: &str = "/";
/// Route of the sign-in page itself.
pub const SIGNIN_ROUTE: &str = "/sign-in";
/// Route of the registration page, served outside this crate.
pub const SIGNUP_ROUTE: &str = "/sign-up";

/// Client settings shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Path prefix for REST calls, without a trailing slash.
    pub api_base: String,
    pub home_route: String,
    pub signup_route: String,
    /// Lifetime of a toast before it is dismissed automatically.
    pub toast_ttl_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    /// Read `SIGNIN_API_BASE` and `SIGNIN_TOAST_TTL_MS` captured at build time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SIGNIN_API_BASE"), option_env!("SIGNIN_TOAST_TTL_MS"))
    }

    fn from_values(api_base: Option<&str>, toast_ttl_ms: Option<&str>) -> Self {
        Self {
            api_base: normalize_api_base(api_base),
            home_route: HOME_ROUTE.to_owned(),
            signup_route: SIGNUP_ROUTE.to_owned(),
            toast_ttl_ms: parse_or(toast_ttl_ms, DEFAULT_TOAST_TTL_MS),
        }
    }
}

fn normalize_api_base(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn parse_or<T>(raw: Option<&str>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}
