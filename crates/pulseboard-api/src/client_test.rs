use super::*;

fn test_client(base_url: &str) -> DashboardClient {
    DashboardClient::with_base_url(base_url, 30, "pulseboard-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn build_url_constructs_correct_query_string() {
    let client = test_client("http://localhost:8000");
    let url = client
        .build_url(TRENDS_PATH, &[("creator_id", "abc")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:8000/api/dashboard/trends?creator_id=abc"
    );
}

#[test]
fn build_url_strips_trailing_slashes() {
    let client = test_client("http://localhost:8000//");
    let url = client
        .build_url(MONETIZATION_PATH, &[("creator_id", "abc")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:8000/api/creator/monetization?creator_id=abc"
    );
}

#[test]
fn build_url_keeps_base_path_prefix() {
    let client = test_client("https://metrics.example.com/v1");
    let url = client
        .build_url(BUSINESS_PROFILE_PATH, &[("user_id", "u-1")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://metrics.example.com/v1/api/business/profile?user_id=u-1"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("http://localhost:8000");
    let url = client
        .build_url(OVERVIEW_PATH, &[("creator_id", "a&b c")])
        .unwrap();
    assert!(
        url.as_str().contains("a%26b+c") || url.as_str().contains("a%26b%20c"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = DashboardClient::with_base_url("not a url", 30, "ua").unwrap_err();
    assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
}

#[test]
fn non_base_url_is_rejected() {
    let err = DashboardClient::with_base_url("mailto:ops@example.com", 30, "ua").unwrap_err();
    assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
}

#[test]
fn new_uses_configured_base_url() {
    let config = DashboardConfig {
        api_base_url: "http://backend.internal:9000".to_owned(),
        ..DashboardConfig::default()
    };
    let client = DashboardClient::new(&config).unwrap();
    assert_eq!(client.base_url().as_str(), "http://backend.internal:9000/");
}
