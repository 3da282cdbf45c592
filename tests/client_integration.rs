use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use giphy_api::types::{ListResponse, Media, MediaType};
use giphy_api::{
    CategoriesQuery, ChannelContentQuery, Client, Error, Query, RandomQuery, SearchQuery,
    TaskStatus, TranslateQuery, TrendingQuery,
};
use tokio::sync::oneshot;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn test_client(server: &MockServer) -> Client {
    Client::with_base_url("test-key", &server.uri())
}

async fn receive<T>(rx: oneshot::Receiver<Result<T, Error>>) -> Result<T, Error> {
    tokio::time::timeout(Duration::from_secs(2), rx)
        .await
        .expect("completion not delivered in time")
        .expect("completion sender dropped")
}

#[tokio::test]
async fn search_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .and(query_param("q", "cats"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("search.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (tx, rx) = oneshot::channel();
    let handle = client
        .search(&SearchQuery::new("cats"), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();

    let resp = receive(rx).await.unwrap();
    assert_eq!(resp.data.len(), 3);
    assert_eq!(resp.data[0].id, "feqkVgjJpYtjy");
    assert_eq!(resp.pagination.as_ref().unwrap().count, 3);
    assert_eq!(resp.meta.status, 200);
    assert_eq!(handle.status(), TaskStatus::Succeeded);
    assert!(handle.is_finished());
}

#[tokio::test]
async fn sticker_search_uses_sticker_path() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .and(query_param("q", "cats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("search.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (tx, rx) = oneshot::channel();
    client
        .search(
            &SearchQuery::new("cats").with_media_type(MediaType::Sticker),
            move |outcome| {
                let _ = tx.send(outcome);
            },
        )
        .unwrap();

    assert!(receive(rx).await.is_ok());
}

#[tokio::test]
async fn trending_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("search.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (tx, rx) = oneshot::channel();
    client
        .trending(&TrendingQuery::new(), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();

    let resp = receive(rx).await.unwrap();
    assert_eq!(resp.data.len(), 3);
}

#[tokio::test]
async fn translate_sends_term_param() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/translate"))
        .and(query_param("s", "good morning"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("gif.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (tx, rx) = oneshot::channel();
    client
        .translate(&TranslateQuery::new("good morning"), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();

    let resp = receive(rx).await.unwrap();
    assert_eq!(resp.data.id, "feqkVgjJpYtjy");
}

#[tokio::test]
async fn random_sends_tag_param() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/random"))
        .and(query_param("tag", "birthday"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("gif.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (tx, rx) = oneshot::channel();
    client
        .random(&RandomQuery::new().with_tag("birthday"), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();

    assert!(receive(rx).await.is_ok());
}

#[tokio::test]
async fn categories_and_subcategories_paths() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("categories.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/categories/actions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("categories.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/categories/actions/dancing"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("search.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);

    let (tx, rx) = oneshot::channel();
    client
        .categories(&CategoriesQuery::new(), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();
    let resp = receive(rx).await.unwrap();
    assert_eq!(resp.data[0].name, "actions");

    let (tx, rx) = oneshot::channel();
    client
        .subcategories("actions", &CategoriesQuery::new(), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();
    assert!(receive(rx).await.is_ok());

    let (tx, rx) = oneshot::channel();
    client
        .gifs_by_category("actions", "dancing", &CategoriesQuery::new(), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();
    let resp = receive(rx).await.unwrap();
    assert_eq!(resp.data.len(), 3);
}

#[tokio::test]
async fn channel_content_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/channels/1066/gifs"))
        .and(query_param("limit", "13"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("search.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (tx, rx) = oneshot::channel();
    client
        .channel_content(
            "1066",
            &ChannelContentQuery::new()
                .with_media_type(MediaType::Gif)
                .with_limit(13),
            move |outcome| {
                let _ = tx.send(outcome);
            },
        )
        .unwrap();

    assert!(receive(rx).await.is_ok());
}

#[tokio::test]
async fn unknown_channel_id_completes_with_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/channels/jjhjhhjhhhjjhhh/gifs"))
        .respond_with(ResponseTemplate::new(404).set_body_string(load_fixture("not_found.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (tx, rx) = oneshot::channel();
    let handle = client
        .channel_content(
            "jjhjhhjhhhjjhhh",
            &ChannelContentQuery::new(),
            move |outcome| {
                let _ = tx.send(outcome);
            },
        )
        .unwrap();

    let outcome = receive(rx).await;
    match outcome {
        Err(Error::Server { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected server error, got {:?}", other.map(|r| r.data.len())),
    }
    assert_eq!(handle.status(), TaskStatus::Failed);
}

#[tokio::test]
async fn gif_by_id_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/feqkVgjJpYtjy"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("gif.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (tx, rx) = oneshot::channel();
    client
        .gif_by_id("feqkVgjJpYtjy", move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();

    let resp = receive(rx).await.unwrap();
    assert_eq!(resp.data.id, "feqkVgjJpYtjy");
}

#[tokio::test]
async fn gif_by_ids_joins_ids() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs"))
        .and(query_param("ids", "feqkVgjJpYtjy,FiGiRei2ICzzG"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("search.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let ids = vec!["feqkVgjJpYtjy".to_string(), "FiGiRei2ICzzG".to_string()];
    let (tx, rx) = oneshot::channel();
    client
        .gif_by_ids(&ids, move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();

    assert!(receive(rx).await.is_ok());
}

#[tokio::test]
async fn plain_server_error_maps_to_transport() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (tx, rx) = oneshot::channel();
    client
        .search(&SearchQuery::new("cats"), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();

    let outcome = receive(rx).await;
    assert!(matches!(outcome, Err(Error::Transport(_))));
}

#[tokio::test]
async fn malformed_body_maps_to_decode() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (tx, rx) = oneshot::channel();
    let handle = client
        .search(&SearchQuery::new("cats"), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();

    let outcome = receive(rx).await;
    assert!(matches!(outcome, Err(Error::Decode(_))));
    assert_eq!(handle.status(), TaskStatus::Failed);
}

#[tokio::test]
async fn error_meta_inside_ok_body_maps_to_server() {
    let mock_server = MockServer::start().await;
    let body = r#"{"data": [], "meta": {"status": 403, "msg": "Forbidden", "response_id": "x"}}"#;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (tx, rx) = oneshot::channel();
    client
        .search(&SearchQuery::new("cats"), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();

    let outcome = receive(rx).await;
    match outcome {
        Err(Error::Server { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "Forbidden");
        }
        other => panic!("expected server error, got {:?}", other.map(|r| r.data.len())),
    }
}

#[tokio::test]
async fn offset_consistency_across_pages() {
    let mock_server = MockServer::start().await;
    let ids = ["g0", "g1", "g2", "g3"];
    let page = |start: usize| {
        serde_json::json!({
            "data": ids[start..start + 3]
                .iter()
                .map(|id| serde_json::json!({"id": id, "type": "gif", "images": {}}))
                .collect::<Vec<_>>(),
            "pagination": {"total_count": 4, "count": 3, "offset": start},
            "meta": {"status": 200, "msg": "OK", "response_id": "x"}
        })
    };
    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1)))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let fetch = |offset: i64| {
        let (tx, rx) = oneshot::channel::<Result<ListResponse<Media>, Error>>();
        client
            .search(
                &SearchQuery::new("cats").with_limit(3).with_offset(offset),
                move |outcome| {
                    let _ = tx.send(outcome);
                },
            )
            .unwrap();
        rx
    };

    let first = receive(fetch(0)).await.unwrap();
    let second = receive(fetch(1)).await.unwrap();
    assert_eq!(first.data.len(), 3);
    assert_eq!(second.data.len(), 3);
    for i in 0..2 {
        assert_eq!(first.data[i + 1].id, second.data[i].id);
    }
}

#[tokio::test]
async fn cancel_before_response_suppresses_completion() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("search.json"))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let handle = client
        .search(&SearchQuery::new("cats"), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    assert!(handle.cancel());
    assert_eq!(handle.status(), TaskStatus::Canceled);

    // Re-canceling a canceled call is a no-op.
    assert!(!handle.cancel());

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(handle.status(), TaskStatus::Canceled);
}

#[tokio::test]
async fn cancel_after_completion_is_noop() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("search.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let (tx, rx) = oneshot::channel();
    let handle = client
        .search(&SearchQuery::new("cats"), move |outcome| {
            seen.fetch_add(1, Ordering::SeqCst);
            let _ = tx.send(outcome);
        })
        .unwrap();

    assert!(receive(rx).await.is_ok());
    assert_eq!(handle.status(), TaskStatus::Succeeded);

    assert!(!handle.cancel());
    assert_eq!(handle.status(), TaskStatus::Succeeded);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
