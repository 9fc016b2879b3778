//! Client tests against a live in-process server.

use payments_client::{ClientError, PaymentsClient};
use payments_hex::{PaymentService, PaymentValidator, inbound::HttpServer};
use payments_repo::{EmailNotifier, RepositoryMode, build_repo};
use tokio::net::TcpListener;

/// Serves the stub-backed router on an ephemeral port and returns a client for it.
async fn spawn_server() -> PaymentsClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let service = PaymentService::new(
        build_repo(RepositoryMode::Stub),
        EmailNotifier::with_writer(std::io::sink()),
        PaymentValidator::new(),
    );
    let router = HttpServer::new(service).router();

    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });

    PaymentsClient::new(format!("http://{addr}"))
}

#[tokio::test]
async fn test_health_round_trip() {
    let client = spawn_server().await;
    assert!(client.health().await.unwrap());
}

#[tokio::test]
async fn test_process_payment_round_trip() {
    let client = spawn_server().await;
    assert_eq!(client.process_payment("buy widget").await.unwrap(), "OK");
}

#[tokio::test]
async fn test_empty_request_is_api_error() {
    let client = spawn_server().await;

    let err = client.process_payment("").await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Api { status: 400, ref message } if message == "Request cannot be empty"
    ));
}

#[tokio::test]
async fn test_get_payment_round_trip() {
    let client = spawn_server().await;
    assert_eq!(
        client.get_payment("PAY-123").await.unwrap(),
        "Payment{id='PAY-123', amount=100}"
    );
}

#[tokio::test]
async fn test_get_payment_keeps_reserved_characters_in_id() {
    let client = spawn_server().await;

    for id in ["x?y", "a#b", "a/b", "50% off"] {
        assert_eq!(
            client.get_payment(id).await.unwrap(),
            format!("Payment{{id='{id}', amount=100}}"),
            "id {id:?} was not sent verbatim"
        );
    }
}
