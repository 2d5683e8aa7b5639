use super::*;

#[test]
fn next_marker_anywhere_in_link_header_means_more_pages() {
    assert!(has_next_page(Some("rel=\"next\"")));
    assert!(has_next_page(Some(
        "<http://localhost:3001/api/applications?_page=1&_limit=5>; rel=\"first\", \
         <http://localhost:3001/api/applications?_page=2&_limit=5>; rel=\"next\""
    )));
}

#[test]
fn missing_or_empty_link_header_means_last_page() {
    assert!(!has_next_page(None));
    assert!(!has_next_page(Some("")));
    assert!(!has_next_page(Some(
        "<http://localhost:3001/api/applications?_page=1&_limit=5>; rel=\"prev\""
    )));
}

#[test]
fn page_query_serializes_underscore_params() {
    let query = PageQuery::new(3);
    assert_eq!(query.limit, PAGE_SIZE);

    let value = serde_json::to_value(query).expect("json");
    assert_eq!(value, serde_json::json!({ "_page": 3, "_limit": 5 }));
}

#[test]
fn application_accepts_string_and_numeric_ids() {
    let text: Application = serde_json::from_value(serde_json::json!({
        "id": "1",
        "loan_amount": 1000,
        "first_name": "Bakayo",
        "last_name": "Saka",
        "company": "Company 1",
        "email": "bakayo@test.com",
        "date_created": "2025-01-01",
        "expiry_date": "2025-12-31"
    }))
    .expect("string id");
    assert_eq!(text.id, ApplicationId::from("1"));
    assert_eq!(text.loan_amount, 1000.0);

    let numeric: Application = serde_json::from_value(serde_json::json!({
        "id": 42,
        "loan_amount": 10000000,
        "first_name": "Mikel",
        "last_name": "Arteta",
        "company": "Company 2",
        "email": "mikel@test.com",
        "date_created": "2025-02-01",
        "expiry_date": "2025-12-31"
    }))
    .expect("numeric id");
    assert_eq!(numeric.id.to_string(), "42");
}
