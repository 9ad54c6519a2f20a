use super::*;

#[test]
fn defaults_are_same_origin_with_rewrite() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.base_url, "");
    assert_eq!(cfg.zero_filter, ZeroFilterPolicy::RewriteToEmpty);
    assert_eq!(
        cfg.timeouts,
        HttpTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn with_base_url_trims_trailing_slash() {
    let cfg = ClientConfig::with_base_url("http://cemetery.local/");
    assert_eq!(cfg.base_url, "http://cemetery.local");
}

#[test]
fn parse_zero_filter_accepts_both_policies() {
    assert_eq!(parse_zero_filter(None).unwrap(), ZeroFilterPolicy::RewriteToEmpty);
    assert_eq!(parse_zero_filter(Some("rewrite")).unwrap(), ZeroFilterPolicy::RewriteToEmpty);
    assert_eq!(parse_zero_filter(Some("verbatim")).unwrap(), ZeroFilterPolicy::SendVerbatim);
}

#[test]
fn parse_zero_filter_rejects_unknown_policy() {
    let err = parse_zero_filter(Some("maybe")).unwrap_err().to_string();
    assert!(err.contains("unknown GRID_ZERO_FILTER"));
}

#[test]
fn env_parse_u64_falls_back_on_garbage() {
    assert_eq!(env_parse_u64("GRID_NO_SUCH_VAR", 30), 30);
}

/// Single env-mutating test so parallel test threads never race on the
/// `GRID_*` variables.
#[test]
fn from_env_reads_overrides_and_defaults() {
    unsafe {
        std::env::remove_var("GRID_BASE_URL");
        std::env::remove_var("GRID_ZERO_FILTER");
        std::env::remove_var("GRID_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("GRID_CONNECT_TIMEOUT_SECS");
    }
    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg, ClientConfig::default());

    unsafe {
        std::env::set_var("GRID_BASE_URL", "http://cemetery.local/");
        std::env::set_var("GRID_ZERO_FILTER", "verbatim");
        std::env::set_var("GRID_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("GRID_CONNECT_TIMEOUT_SECS", "7");
    }
    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "http://cemetery.local");
    assert_eq!(cfg.zero_filter, ZeroFilterPolicy::SendVerbatim);
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe {
        std::env::set_var("GRID_ZERO_FILTER", "bad");
    }
    assert!(ClientConfig::from_env().is_err());

    unsafe {
        std::env::remove_var("GRID_BASE_URL");
        std::env::remove_var("GRID_ZERO_FILTER");
        std::env::remove_var("GRID_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("GRID_CONNECT_TIMEOUT_SECS");
    }
}
