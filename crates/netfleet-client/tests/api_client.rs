//! Integration tests for `ApiClient` against a mock API server

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use netfleet_client::{ApiClient, ClientConfig, ClientError};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ClientConfig::new(server.uri())).unwrap()
}

fn login_ok() -> Mock {
    Mock::given(method("POST"))
        .and(path("/Session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-1" })))
}

#[tokio::test]
async fn login_stores_token_from_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Session"))
        .and(body_json(json!({ "username": "svc", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login("svc", "pw").await.unwrap();
    assert!(client.has_session());
}

#[tokio::test]
async fn login_rejection_stores_no_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Session"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.login("svc", "wrong").await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::AuthenticationFailed { status: 401, .. }
    ));
    assert!(!client.has_session());
}

#[tokio::test]
async fn login_without_token_field_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "statusCode": 790200 })))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.login("svc", "pw").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert!(!client.has_session());
}

#[tokio::test]
async fn logout_without_session_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/Session"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.logout().await.unwrap_err();
    assert!(matches!(err, ClientError::NotAuthenticated));
}

#[tokio::test]
async fn logout_sends_token_and_clears_session() {
    let server = MockServer::start().await;
    login_ok().mount(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/Session"))
        .and(header("token", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login("svc", "pw").await.unwrap();
    client.logout().await.unwrap();
    assert!(!client.has_session());
}

#[tokio::test]
async fn failed_logout_keeps_session_for_retry() {
    let server = MockServer::start().await;
    login_ok().mount(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/Session"))
        .respond_with(ResponseTemplate::new(500).set_body_string("session store down"))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login("svc", "pw").await.unwrap();
    let err = client.logout().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert!(client.has_session());
}

#[tokio::test]
async fn list_devices_requires_session() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let err = client.list_devices().await.unwrap_err();
    assert!(matches!(err, ClientError::NotAuthenticated));
}

#[tokio::test]
async fn list_devices_parses_service_order() {
    let server = MockServer::start().await;
    login_ok().mount(&server).await;
    Mock::given(method("GET"))
        .and(path("/CMDB/Devices"))
        .and(header("Token", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "devices": [
                {
                    "id": "b",
                    "mgmtIP": "10.1.12.3",
                    "hostname": "Edge2",
                    "deviceTypeName": "Cisco Switch",
                    "firstDiscoverTime": "2024-03-01T08:00:00",
                    "lastDiscoverTime": "2024-03-02T08:00:00"
                },
                {
                    "id": "a",
                    "mgmtIP": "10.1.12.2",
                    "hostname": "Client1",
                    "deviceTypeName": "Cisco Router",
                    "firstDiscoverTime": "0001-01-01T00:00:00",
                    "lastDiscoverTime": "0001-01-01T00:00:00"
                }
            ]
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login("svc", "pw").await.unwrap();

    let devices = client.list_devices().await.unwrap();
    assert_eq!(devices.len(), 2);
    // service order preserved, no sorting
    assert_eq!(devices[0].hostname, "Edge2");
    assert_eq!(devices[1].hostname, "Client1");
    assert_eq!(devices[1].mgmt_ip, "10.1.12.2");
}

#[tokio::test]
async fn list_devices_surfaces_api_errors() {
    let server = MockServer::start().await;
    login_ok().mount(&server).await;
    Mock::given(method("GET"))
        .and(path("/CMDB/Devices"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login("svc", "pw").await.unwrap();

    let err = client.list_devices().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 503, .. }));
}

#[tokio::test]
async fn attributes_query_by_hostname() {
    let server = MockServer::start().await;
    login_ok().mount(&server).await;
    Mock::given(method("GET"))
        .and(path("/CMDB/Devices/Attributes"))
        .and(header("Token", "tok-1"))
        .and(query_param("hostname", "Client1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hostname": "Client1",
            "attributes": {
                "vendor": "Cisco",
                "model": "X",
                "hasBGPConfig": true
            },
            "statusCode": 790200,
            "statusDescription": "Success."
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login("svc", "pw").await.unwrap();

    let attrs = client.get_device_attributes("Client1", None).await.unwrap();
    assert_eq!(attrs.hostname, "Client1");
    assert_eq!(attrs.status_description, "Success.");
    assert_eq!(attrs.attributes["vendor"], json!("Cisco"));
}

#[tokio::test]
async fn attributes_query_narrowed_to_one_attribute() {
    let server = MockServer::start().await;
    login_ok().mount(&server).await;
    Mock::given(method("GET"))
        .and(path("/CMDB/Devices/Attributes"))
        .and(query_param("hostname", "Client1"))
        .and(query_param("attributeName", "vendor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hostname": "Client1",
            "attributes": { "vendor": "Cisco" },
            "statusCode": 790200,
            "statusDescription": "Success."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login("svc", "pw").await.unwrap();

    let attrs = client
        .get_device_attributes("Client1", Some("vendor"))
        .await
        .unwrap();
    assert_eq!(attrs.attributes.len(), 1);
}

#[tokio::test]
async fn transport_failure_is_an_explicit_error() {
    // port from a server that has been shut down: connection refused
    // (builder().start() avoids wiremock's server pool, which keeps the
    // listener open after drop)
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let mut client = ApiClient::new(&ClientConfig::new(uri)).unwrap();
    let err = client.login("svc", "pw").await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(!client.has_session());
}
