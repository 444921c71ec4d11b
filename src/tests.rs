//! Integration tests for the Name Meaning backend.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::db::{init_database, Repository};
use crate::favorites::FavoritesStore;
use crate::lookup::NameLookup;
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");
        let base_url = spawn_server(&db_path).await;

        TestFixture {
            client: Client::new(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn post_json(&self, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn delete_json(&self, path: &str) -> (u16, Value) {
        let resp = self.client.delete(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }
}

/// Start a server over the database at `db_path` and return its base URL.
async fn spawn_server(db_path: &Path) -> String {
    let pool = init_database(db_path).await.expect("Failed to init DB");
    let kv = Arc::new(Repository::new(pool));
    let favorites = Arc::new(FavoritesStore::open(kv).await);
    let lookup = Arc::new(NameLookup::with_rng(
        Duration::ZERO,
        StdRng::seed_from_u64(2024),
    ));

    let app = create_router(AppState { lookup, favorites });

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get addr");

    // Spawn server
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    format!("http://{}", addr)
}

fn favorite(name: &str) -> Value {
    json!({
        "name": name,
        "meaning": format!("{} means something", name),
        "origin": "Hebrew"
    })
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/nothing-here").await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_lookup_known_name_any_case() {
    let fixture = TestFixture::new().await;

    for query in ["john", "JOHN", "jOhN"] {
        let (status, body) = fixture
            .get_json(&format!("/api/names/lookup?name={}", query))
            .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "John");
        assert_eq!(body["data"]["origin"], "Hebrew");
        assert_eq!(body["data"]["phoneticPronunciation"], "jon");
        assert_eq!(body["data"]["variants"].as_array().unwrap().len(), 7);
        assert_eq!(
            body["data"]["pronunciationGuide"],
            "John is pronounced as \"jon\""
        );
    }
}

#[tokio::test]
async fn test_lookup_featured_entry_uses_pronunciation_override() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post_json("/api/names/lookup", json!({ "name": "Muzamil" }))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["pronunciationGuide"], body["data"]["pronunciation"]);
    assert_eq!(body["data"]["famousPeople"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_lookup_unknown_name_generates_record() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post_json("/api/names/lookup", json!({ "name": "  Xeno  " }))
        .await;

    assert_eq!(status, 200);
    let data = &body["data"];
    assert_eq!(data["name"], "Xeno");
    assert!(data["origin"].as_str().unwrap().starts_with("Possibly "));
    assert!(data["meaning"]
        .as_str()
        .unwrap()
        .starts_with("Xeno may mean \"blessed\" or \"fortunate\"."));
    assert_eq!(data["phoneticPronunciation"], "xe-no");
    assert_eq!(data["variants"], json!([]));
    assert_eq!(data["famousPeople"], json!([]));
    assert!(data.get("pronunciation").is_none());
}

#[tokio::test]
async fn test_lookup_meaning_dispatch() {
    let fixture = TestFixture::new().await;

    let cases = [
        ("Alice", "likely means \"strong\" or \"leader\""),
        ("Hassan", "likely means \"brave\" or \"courageous\""),
        ("Bruno", "possibly means \"wise\" or \"intelligent\""),
        ("Nadia", "may mean \"blessed\" or \"fortunate\""),
    ];

    for (name, expected) in cases {
        let (_, body) = fixture
            .get_json(&format!("/api/names/lookup?name={}", name))
            .await;
        let meaning = body["data"]["meaning"].as_str().unwrap();
        assert!(meaning.contains(expected), "{}: {}", name, meaning);
    }
}

#[tokio::test]
async fn test_lookup_rejects_blank_input() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post_json("/api/names/lookup", json!({ "name": "   " }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Please enter a name");

    let (status, _) = fixture.get_json("/api/names/lookup").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_lookup_malformed_body() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/names/lookup"))
        .header("content-type", "application/json")
        .body("{oops")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_known_and_featured_names() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/names").await;
    assert_eq!(status, 200);
    assert_eq!(
        body["data"],
        json!(["Muzamil", "John", "Sarah", "Maria", "David", "Sophia"])
    );

    let (status, body) = fixture.get_json("/api/names/featured").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["name"], "Muzamil");
    assert_eq!(body["data"]["origin"], "Arabic");
}

#[tokio::test]
async fn test_favorites_lifecycle() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/favorites").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"], json!([]));

    // Adding twice stores one entry
    for _ in 0..2 {
        let (status, body) = fixture.post_json("/api/favorites", favorite("Sarah")).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["isFavorite"], true);
    }

    let (_, body) = fixture.get_json("/api/favorites?source=storage").await;
    assert_eq!(body["data"], json!([favorite("Sarah")]));

    let (_, body) = fixture.get_json("/api/favorites/Sarah").await;
    assert_eq!(body["data"]["isFavorite"], true);

    // Removing an unknown name changes nothing
    let (status, _) = fixture.delete_json("/api/favorites/Nobody").await;
    assert_eq!(status, 200);
    let (_, body) = fixture.get_json("/api/favorites").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = fixture.delete_json("/api/favorites/Sarah").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["isFavorite"], false);

    let (_, body) = fixture.get_json("/api/favorites?source=storage").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_favorite_full_record_is_projected() {
    let fixture = TestFixture::new().await;

    let (_, looked_up) = fixture.get_json("/api/names/lookup?name=david").await;
    let (status, _) = fixture
        .post_json("/api/favorites", looked_up["data"].clone())
        .await;
    assert_eq!(status, 200);

    let (_, body) = fixture.get_json("/api/favorites").await;
    let saved = &body["data"][0];
    assert_eq!(saved["name"], "David");
    assert_eq!(saved["origin"], "Hebrew");
    assert_eq!(saved.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn test_favorite_names_with_spaces() {
    let fixture = TestFixture::new().await;

    fixture.post_json("/api/favorites", favorite("Mary Ann")).await;
    let (_, body) = fixture.get_json("/api/favorites/Mary%20Ann").await;
    assert_eq!(body["data"]["name"], "Mary Ann");
    assert_eq!(body["data"]["isFavorite"], true);
}

#[tokio::test]
async fn test_favorite_toggle() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture
        .post_json("/api/favorites/Maria/toggle", favorite("Maria"))
        .await;
    assert_eq!(body["data"]["isFavorite"], true);

    let (_, body) = fixture
        .post_json("/api/favorites/Maria/toggle", favorite("Maria"))
        .await;
    assert_eq!(body["data"]["isFavorite"], false);

    let (_, body) = fixture.get_json("/api/favorites").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_favorite_requires_name() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.post_json("/api/favorites", favorite(" ")).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = fixture
        .post_json("/api/favorites", json!({ "name": "Ada" }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_favorites_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.sqlite");
    let client = Client::new();

    let first = spawn_server(&db_path).await;
    for name in ["Sophia", "John"] {
        let resp = client
            .post(format!("{}/api/favorites", first))
            .json(&favorite(name))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let second = spawn_server(&db_path).await;
    let body: Value = client
        .get(format!("{}/api/favorites", second))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"], json!([favorite("Sophia"), favorite("John")]));
}

#[tokio::test]
async fn test_toggle_requires_matching_name() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post_json("/api/favorites/Maria/toggle", favorite("Sarah"))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (_, body) = fixture.get_json("/api/favorites").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_favorite_named_toggle_is_reachable() {
    let fixture = TestFixture::new().await;

    let (status, _) = fixture.post_json("/api/favorites", favorite("toggle")).await;
    assert_eq!(status, 200);

    let (status, body) = fixture.get_json("/api/favorites/toggle").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["name"], "toggle");
    assert_eq!(body["data"]["isFavorite"], true);

    let (status, body) = fixture.delete_json("/api/favorites/toggle").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["isFavorite"], false);

    let (_, body) = fixture.get_json("/api/favorites?source=storage").await;
    assert_eq!(body["data"], json!([]));

    // The toggle action works on that name too
    let (status, body) = fixture
        .post_json("/api/favorites/toggle/toggle", favorite("toggle"))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["isFavorite"], true);
}

#[tokio::test]
async fn test_malformed_query_uses_error_envelope() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/favorites?source=bogus").await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].as_str().unwrap().contains("bogus"));

    let (status, body) = fixture.get_json("/api/names/lookup?name=a&name=b").await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}
