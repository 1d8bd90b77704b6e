use forsight::api::rest::ApiClient;
use forsight::api::types::CompareRequest;

#[test]
/// Verifies the comparison guard: zero or one distinct symbols never
/// produce a request payload.
fn too_few_symbols_is_a_no_op() {
    assert!(CompareRequest::from_symbols(&[]).is_none());
    assert!(CompareRequest::from_symbols(&["THYAO".to_string()]).is_none());
    // Duplicates collapse before the count check.
    assert!(CompareRequest::from_symbols(&[
        "THYAO".to_string(),
        "thyao".to_string().to_uppercase(),
    ])
    .is_none());
}

#[test]
/// Verifies the wire body for {"A","B"} is exactly {"symbols":["A","B"]}.
fn two_symbols_build_the_exact_body() {
    let req = CompareRequest::from_symbols(&["A".to_string(), "B".to_string()]).unwrap();
    let body = serde_json::to_string(&req).unwrap();
    assert_eq!(body, r#"{"symbols":["A","B"]}"#);
}

#[test]
/// Verifies blank entries are ignored and order of first appearance wins.
fn blank_entries_are_dropped_and_order_kept() {
    let req = CompareRequest::from_symbols(&[
        "  ".to_string(),
        "GARAN".to_string(),
        "AKBNK".to_string(),
        "GARAN".to_string(),
    ])
    .unwrap();
    assert_eq!(req.symbols, vec!["GARAN", "AKBNK"]);
}

#[tokio::test]
/// Verifies the client short-circuits below the threshold: with an
/// unroutable base URL the call can only succeed through the no-op path.
async fn client_skips_the_request_below_two_symbols() {
    let client = ApiClient::new("http://forsight.invalid/api", 50).unwrap();
    let result = client.compare(&["THYAO".to_string()]).await.unwrap();
    assert!(result.is_none());

    let result = client.compare(&[]).await.unwrap();
    assert!(result.is_none());
}
