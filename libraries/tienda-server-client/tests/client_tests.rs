//! Tests for the Tienda server client library.
//!
//! These tests use mock servers to verify client behavior without requiring
//! a real catalog server.

use tienda_core::{CreateProduct, Credentials, Registration, UpdateProduct};
use tienda_server_client::{ClientError, ServerConfig, TiendaClient};
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

fn sample_product_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "nombre": name,
        "descripcion": "descripcion",
        "precio": "10.00",
        "stock": 5,
        "imagenUrl": format!("http://images.example.com/{id}.jpg"),
    })
}

fn credentials() -> Credentials {
    Credentials {
        email: "ana@example.com".into(),
        password: "secreto".into(),
    }
}

/// Matches requests whose body does NOT contain the given fragment.
struct BodyLacks(&'static str);

impl Match for BodyLacks {
    fn matches(&self, request: &Request) -> bool {
        !String::from_utf8_lossy(&request.body).contains(self.0)
    }
}

// =============================================================================
// Server Config Tests
// =============================================================================

mod server_config {
    use super::*;

    #[test]
    fn new_with_url() {
        let config = ServerConfig::new("http://example.com");
        assert_eq!(config.url, "http://example.com");
        assert!(config.session_token.is_none());
    }

    #[test]
    fn with_session_token() {
        let config = ServerConfig::with_session_token("http://example.com", "token_123");
        assert_eq!(config.session_token.as_deref(), Some("token_123"));
    }
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn valid_urls_accepted() {
        assert!(TiendaClient::new(ServerConfig::new("https://example.com")).is_ok());
        assert!(TiendaClient::new(ServerConfig::new("http://localhost:3000")).is_ok());
    }

    #[test]
    fn empty_url_rejected() {
        let result = TiendaClient::new(ServerConfig::new(""));

        match result.unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn url_without_scheme_rejected() {
        let result = TiendaClient::new(ServerConfig::new("example.com"));

        match result.unwrap_err() {
            ClientError::InvalidUrl(msg) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn url_normalization_trailing_slash() {
        let client = TiendaClient::new(ServerConfig::new("http://example.com///")).unwrap();
        assert!(!client.url().await.ends_with('/'));
    }
}

// =============================================================================
// Authentication Tests
// =============================================================================

mod authentication {
    use super::*;

    #[tokio::test]
    async fn successful_login_with_empty_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(serde_json::json!({
                "email": "ana@example.com",
                "password": "secreto"
            })))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = TiendaClient::new(ServerConfig::new(mock_server.uri())).unwrap();

        let response = client.login(&credentials()).await.unwrap();
        assert!(response.token.is_none());
        assert!(!client.has_session().await);
    }

    #[tokio::test]
    async fn login_captures_session_token_when_present() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "token": "session_abc" })),
            )
            .mount(&mock_server)
            .await;

        // The catalog mock only matches when the stored token is attached.
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .and(header("Authorization", "Bearer session_abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([sample_product_json(1, "A")])),
            )
            .mount(&mock_server)
            .await;

        let client = TiendaClient::new(ServerConfig::new(mock_server.uri())).unwrap();

        let response = client.login(&credentials()).await.unwrap();
        assert_eq!(response.token.as_deref(), Some("session_abc"));
        assert!(client.has_session().await);

        let products = client.catalog().await.client().list().await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn login_invalid_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("credenciales incorrectas"))
            .mount(&mock_server)
            .await;

        let client = TiendaClient::new(ServerConfig::new(mock_server.uri())).unwrap();

        match client.login(&credentials()).await.unwrap_err() {
            ClientError::AuthFailed(msg) => assert!(msg.contains("Invalid")),
            e => panic!("Expected AuthFailed, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn login_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let client = TiendaClient::new(ServerConfig::new(mock_server.uri())).unwrap();

        match client.login(&credentials()).await.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("boom"));
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn register_created() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/register"))
            .and(body_json(serde_json::json!({
                "name": "Ana",
                "email": "ana@example.com",
                "password": "secreto"
            })))
            .respond_with(ResponseTemplate::new(201))
            .mount(&mock_server)
            .await;

        let client = TiendaClient::new(ServerConfig::new(mock_server.uri())).unwrap();

        let registration = Registration {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "secreto".into(),
        };
        assert!(client.register(&registration).await.is_ok());
    }

    #[tokio::test]
    async fn register_accepts_only_201() {
        let mock_server = MockServer::start().await;

        // A plain 200 is not the documented created status.
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = TiendaClient::new(ServerConfig::new(mock_server.uri())).unwrap();

        let registration = Registration {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "secreto".into(),
        };

        match client.register(&registration).await.unwrap_err() {
            ClientError::ServerError { status, .. } => assert_eq!(status, 200),
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn logout_clears_session() {
        let client = TiendaClient::new(ServerConfig::with_session_token(
            "http://example.com",
            "token",
        ))
        .unwrap();
        assert!(client.has_session().await);

        client.logout().await;
        assert!(!client.has_session().await);
        assert!(client.session_token().await.is_none());
    }
}

// =============================================================================
// Catalog Tests
// =============================================================================

mod catalog {
    use super::*;

    async fn setup() -> (MockServer, TiendaClient) {
        let mock_server = MockServer::start().await;
        let client = TiendaClient::new(ServerConfig::new(mock_server.uri())).unwrap();
        (mock_server, client)
    }

    #[tokio::test]
    async fn list_parses_array() {
        let (mock_server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                sample_product_json(1, "Yerba"),
                sample_product_json(2, "Mate"),
            ])))
            .mount(&mock_server)
            .await;

        let products = client.catalog().await.client().list().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Yerba");
        assert_eq!(products[1].id, 2);
    }

    #[tokio::test]
    async fn list_tolerates_single_object_body() {
        let (mock_server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_product_json(1, "A")))
            .mount(&mock_server)
            .await;

        let products = client.catalog().await.client().list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 1);
    }

    #[tokio::test]
    async fn list_malformed_body_yields_empty_list() {
        let (mock_server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let products = client.catalog().await.client().list().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn list_server_error() {
        let (mock_server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(500).set_body_string("caido"))
            .mount(&mock_server)
            .await;

        match client.catalog().await.client().list().await.unwrap_err() {
            ClientError::ServerError { status, .. } => assert_eq!(status, 500),
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn search_uses_name_path_segment() {
        let (mock_server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/products/yerba"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([sample_product_json(1, "Yerba")])),
            )
            .mount(&mock_server)
            .await;

        let products = client
            .catalog()
            .await
            .client()
            .search("yerba")
            .await
            .unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn search_empty_query_fetches_full_list() {
        let (mock_server, client) = setup().await;

        // Only the unfiltered endpoint is mounted; an empty query must go there.
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([sample_product_json(3, "C")])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let products = client.catalog().await.client().search("").await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 3);
    }

    #[tokio::test]
    async fn get_by_id() {
        let (mock_server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/products/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_product_json(7, "Mate")))
            .mount(&mock_server)
            .await;

        let product = client.catalog().await.client().get(7).await.unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Mate");
    }

    #[tokio::test]
    async fn get_not_found() {
        let (mock_server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/products/99"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no existe"))
            .mount(&mock_server)
            .await;

        match client.catalog().await.client().get(99).await.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("99"));
            }
            e => panic!("Expected ServerError with 404, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn create_without_image_sends_four_parts() {
        let (mock_server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/products"))
            .and(body_string_contains("name=\"nombre\""))
            .and(body_string_contains("name=\"id_usuario\""))
            .and(body_string_contains("name=\"descripcion\""))
            .and(body_string_contains("name=\"precio\""))
            .and(BodyLacks("name=\"imagen\""))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let draft = CreateProduct {
            name: "Yerba".into(),
            description: "1kg".into(),
            price: "5.00".into(),
            image: None,
        };

        assert!(client.catalog().await.client().create(&draft).await.is_ok());
    }

    #[tokio::test]
    async fn create_with_image_attaches_file_part() {
        let (mock_server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/products"))
            .and(body_string_contains("name=\"imagen\""))
            .and(body_string_contains("filename=\"image.jpg\""))
            .and(body_string_contains("fake image bytes"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&mock_server)
            .await;

        let image = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        std::fs::write(image.path(), b"fake image bytes").unwrap();

        let draft = CreateProduct {
            name: "Yerba".into(),
            description: "1kg".into(),
            price: "5.00".into(),
            image: Some(image.path().to_path_buf()),
        };

        assert!(client.catalog().await.client().create(&draft).await.is_ok());
    }

    #[tokio::test]
    async fn create_missing_image_file_fails_before_sending() {
        let (mock_server, client) = setup().await;

        // Nothing may reach the server when the image path is bad.
        Mock::given(method("POST"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let draft = CreateProduct {
            name: "Yerba".into(),
            description: "1kg".into(),
            price: "5.00".into(),
            image: Some("/no/such/image.jpg".into()),
        };

        match client.catalog().await.client().create(&draft).await {
            Err(ClientError::FileNotFound(path)) => assert!(path.contains("no/such")),
            other => panic!("Expected FileNotFound, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_puts_id_in_body_not_path() {
        let (mock_server, client) = setup().await;

        Mock::given(method("PUT"))
            .and(path("/api/products"))
            .and(body_json(serde_json::json!({
                "id": 7,
                "nombre": "Mate",
                "descripcion": "Calabaza",
                "precio": "8.00"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let update = UpdateProduct {
            id: 7,
            name: "Mate".into(),
            description: "Calabaza".into(),
            price: "8.00".into(),
        };

        assert!(client.catalog().await.client().update(&update).await.is_ok());
    }

    #[tokio::test]
    async fn update_failure_maps_to_server_error() {
        let (mock_server, client) = setup().await;

        Mock::given(method("PUT"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(400).set_body_string("datos invalidos"))
            .mount(&mock_server)
            .await;

        let update = UpdateProduct {
            id: 7,
            name: "Mate".into(),
            description: "Calabaza".into(),
            price: "8.00".into(),
        };

        match client
            .catalog()
            .await
            .client()
            .update(&update)
            .await
            .unwrap_err()
        {
            ClientError::ServerError { status, .. } => assert_eq!(status, 400),
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn delete_success() {
        let (mock_server, client) = setup().await;

        Mock::given(method("DELETE"))
            .and(path("/api/products/4"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(client.catalog().await.client().delete(4).await.is_ok());
    }

    #[tokio::test]
    async fn delete_failure() {
        let (mock_server, client) = setup().await;

        Mock::given(method("DELETE"))
            .and(path("/api/products/4"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        assert!(client.catalog().await.client().delete(4).await.is_err());
    }
}

// =============================================================================
// Error Type Tests
// =============================================================================

mod errors {
    use super::*;

    #[test]
    fn error_display() {
        let error = ClientError::AuthFailed("Invalid email or password".to_string());
        assert!(format!("{}", error).contains("Invalid email or password"));

        let error = ClientError::ServerError {
            status: 500,
            message: "Internal error".to_string(),
        };
        assert!(format!("{}", error).contains("500"));
        assert!(format!("{}", error).contains("Internal error"));

        let error = ClientError::InvalidUrl("bad url".to_string());
        assert!(format!("{}", error).contains("bad url"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientError>();
    }
}
