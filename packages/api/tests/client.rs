//! Serves the router on an ephemeral port and drives it through `UsersClient`.

#![cfg(feature = "server")]

use api::memory::{MemoryUserStore, Operation};
use api::routes::router;
use api::{ClientError, User, UsersClient};

async fn serve(store: MemoryUserStore) -> UsersClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router::<_, ()>(store)).await.unwrap();
    });
    UsersClient::new(format!("http://{addr}"))
}

#[tokio::test]
async fn test_crud_roundtrip() {
    let client = serve(MemoryUserStore::new()).await;

    assert!(client.list().await.unwrap().is_empty());

    let alice = client.create("Alice").await.unwrap();
    assert_eq!(alice.name, "Alice");
    let bob = client.create("Bob").await.unwrap();
    assert_ne!(alice.id, bob.id);
    assert_eq!(client.list().await.unwrap(), vec![alice.clone(), bob.clone()]);

    let renamed = client.update(alice.id, "Alicia").await.unwrap();
    assert_eq!(
        renamed,
        User {
            id: alice.id,
            name: "Alicia".to_string()
        }
    );

    let deleted = client.delete(bob.id).await.unwrap();
    assert_eq!(deleted.message, "User deleted");
    assert_eq!(client.list().await.unwrap(), vec![renamed]);
}

#[tokio::test]
async fn test_errors_carry_server_message() {
    let client = serve(MemoryUserStore::with_users(["John"])).await;

    let err = client.update(9999999, "X").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, ClientError::Status { ref message, .. } if message == "User not found"));

    let err = client.create("").await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(matches!(err, ClientError::Status { ref message, .. } if message == "Name is required"));

    client.delete(1).await.unwrap();
    assert!(client.delete(1).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_plain_text_list_failure() {
    let store = MemoryUserStore::with_users(["John"]);
    store.fail_on(Operation::List);
    let client = serve(store).await;

    match client.list().await {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Error fetching users");
        }
        other => panic!("expected a 500, got {other:?}"),
    }
}
