mod common;

use common::serve_once;
use estate_scout::api::{HttpPropertyApi, ListResponse, PropertyApi};
use estate_scout::config::ClientConfig;
use estate_scout::errors::TransportError;
use estate_scout::models::{SortField, SortOrder};
use estate_scout::{ApiPropertyRepository, PropertyId, PropertyQuery, PropertyReader};

fn client(base_url: &str) -> HttpPropertyApi {
    HttpPropertyApi::new(&ClientConfig::new(base_url).unwrap()).unwrap()
}

#[tokio::test]
async fn lists_properties_with_only_set_filters() {
    let (base_url, request) = serve_once(
        200,
        r#"{"properties":[{"id":1,"name":"Beautiful Villa","price":250000}],"totalCount":1}"#,
    )
    .await;

    let query = PropertyQuery {
        name: Some("Villa".to_string()),
        address: Some(String::new()),
        max_price: Some(300000.0),
        page: Some(1),
        page_size: Some(100),
        ..Default::default()
    };
    let response = client(&base_url).list_properties(&query).await.unwrap();

    assert_eq!(response.total_count(), Some(1));
    assert!(matches!(response, ListResponse::Envelope(_)));
    assert_eq!(
        request.await.unwrap(),
        "GET /api/v1.0/properties?name=Villa&maxPrice=300000&page=1&pageSize=100 HTTP/1.1"
    );
}

#[tokio::test]
async fn top_properties_ask_for_price_descending() {
    let (base_url, request) = serve_once(
        200,
        r#"[{"id":1,"price":9},{"id":2,"price":8},{"id":3,"price":7},{"id":4,"price":6}]"#,
    )
    .await;

    let repo = ApiPropertyRepository::new(client(&base_url));
    let top = repo.get_top_properties(3).await.unwrap();

    let ids: Vec<PropertyId> = top.into_iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        vec![PropertyId::Number(1), PropertyId::Number(2), PropertyId::Number(3)]
    );
    assert_eq!(
        request.await.unwrap(),
        "GET /api/v1.0/properties?pageSize=3&sortBy=price&sortOrder=desc HTTP/1.1"
    );
}

#[tokio::test]
async fn fetches_single_property() {
    let (base_url, request) = serve_once(
        200,
        r#"{"id":7,"name":"Loft","address":"1 Dock Rd","price":410000,"bedrooms":1,"bathrooms":1}"#,
    )
    .await;

    let property = client(&base_url)
        .get_property(&PropertyId::Number(7))
        .await
        .unwrap();

    assert_eq!(property.name, "Loft");
    assert_eq!(property.bedrooms, Some(1));
    assert_eq!(
        request.await.unwrap(),
        "GET /api/v1.0/properties/7 HTTP/1.1"
    );
}

#[tokio::test]
async fn missing_property_is_not_found() {
    let (base_url, _request) = serve_once(404, r#"{"title":"Not Found"}"#).await;

    let err = client(&base_url)
        .get_property(&PropertyId::Number(999))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::NotFound));
}

#[tokio::test]
async fn null_property_body_is_not_found() {
    let (base_url, _request) = serve_once(200, "null").await;

    let err = client(&base_url)
        .get_property(&PropertyId::Number(1))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::NotFound));
}

#[tokio::test]
async fn server_errors_keep_status_and_body() {
    let (base_url, _request) = serve_once(500, r#"{"error":"database unavailable"}"#).await;

    let err = client(&base_url)
        .list_properties(&PropertyQuery::default())
        .await
        .unwrap_err();

    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("database unavailable"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (base_url, _request) = serve_once(200, "<html>oops</html>").await;

    let err = client(&base_url)
        .list_properties(&PropertyQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Bind and drop to get a port nobody is listening on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr))
        .list_properties(&PropertyQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
}

#[test]
fn sort_values_match_the_wire_format() {
    let query = PropertyQuery {
        sort_by: Some(SortField::Name),
        sort_order: Some(SortOrder::Asc),
        ..Default::default()
    };
    assert_eq!(
        query.to_query_pairs(),
        vec![("sortBy", "name".to_string()), ("sortOrder", "asc".to_string())]
    );
}
