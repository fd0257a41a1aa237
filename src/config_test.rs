use super::*;

#[test]
fn defaults_when_nothing_is_set() {
    let config = ClientConfig::from_values(None, None);
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.home_route, "/");
    assert_eq!(config.signup_route, "/sign-up");
    assert_eq!(config.toast_ttl_ms, 5000);
}

#[test]
fn default_impl_matches_unset_values() {
    assert_eq!(ClientConfig::default(), ClientConfig::from_values(None, None));
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let config = ClientConfig::from_values(Some("https://auth.example.com/api/"), None);
    assert_eq!(config.api_base, "https://auth.example.com/api");
}

#[test]
fn blank_api_base_falls_back() {
    assert_eq!(ClientConfig::from_values(Some("   "), None).api_base, "/api");
    assert_eq!(ClientConfig::from_values(Some("/"), None).api_base, "/api");
}

#[test]
fn toast_ttl_parses_number() {
    assert_eq!(ClientConfig::from_values(None, Some(" 1500 ")).toast_ttl_ms, 1500);
}

#[test]
fn toast_ttl_unparsable_falls_back() {
    assert_eq!(ClientConfig::from_values(None, Some("soon")).toast_ttl_ms, 5000);
    assert_eq!(ClientConfig::from_values(None, Some("-1")).toast_ttl_ms, 5000);
}
