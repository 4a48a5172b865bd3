use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use ideascout::client::HttpIdeaSource;
use ideascout::config::Config;
use ideascout::{CycleOutcome, Dispatcher, Escaping, Page, PageHandle, Renderer};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Every multipart form the fake server received, as (name, value) pairs
type Seen = Arc<Mutex<Vec<Vec<(String, String)>>>>;

async fn handle_generate(State(seen): State<Seen>, mut multipart: Multipart) -> Response {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap_or_default();
        fields.push((name, value));
    }
    seen.lock().unwrap().push(fields.clone());

    let prompt = fields
        .iter()
        .find(|(name, _)| name == "prompt")
        .map(|(_, value)| value.clone())
        .unwrap_or_default();

    match prompt.as_str() {
        "quota" => Json(json!({"success": false, "error": "quota exceeded"})).into_response(),
        "nothing" => Json(json!({"success": true, "clusters": {}})).into_response(),
        "gateway" => (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response(),
        _ => Json(json!({
            "success": true,
            "clusters": {
                "b2b": [{"idea": format!("Ideas for {}", prompt)}],
                "consumer": [
                    {"idea": "Second", "novelty": 0, "validation": {"entry_barrier": "low"}},
                    {"idea": "Third", "market_analysis": {"tam": "$2B"}}
                ]
            }
        }))
        .into_response(),
    }
}

async fn spawn_generation_server() -> (String, Seen) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/generate_ideas", post(handle_generate))
        .with_state(seen.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), seen)
}

fn dispatcher_for(server_url: &str, prompt: &str) -> Dispatcher<HttpIdeaSource> {
    let mut config = Config::default();
    config.general.server_url = server_url.to_string();
    Dispatcher::new(
        HttpIdeaSource::new(&config).expect("client"),
        PageHandle::new(Page::with_prompt(prompt)),
        Renderer::new(Escaping::Html),
    )
}

#[tokio::test]
async fn submit_posts_single_prompt_field_and_renders_clusters() {
    let (url, seen) = spawn_generation_server().await;
    let dispatcher = dispatcher_for(&url, "  fintech  ");

    let report = dispatcher.submit().await.expect("request issued");

    assert_eq!(report.outcome, CycleOutcome::Rendered { clusters: 2, ideas: 3 });
    assert_eq!(
        *seen.lock().unwrap(),
        vec![vec![("prompt".to_string(), "fintech".to_string())]]
    );

    let page = dispatcher.page().snapshot();
    assert!(!page.loading);
    let b2b = page.container.find("🎯 B2b").expect("b2b header");
    let consumer = page.container.find("🎯 Consumer").expect("consumer header");
    assert!(b2b < consumer);
    assert!(page.container.contains("Ideas for fintech"));
    assert_eq!(page.container.matches("💡 Idea 1").count(), 2);
    assert!(page.container.contains("💡 Idea 2"));
    assert!(!page.container.contains("⭐ 0/10"));
    assert!(page.container.contains("<strong>Target Users:</strong> TBD"));
    assert!(page.container.contains("<strong>Entry Barrier:</strong> Low"));
    assert!(page.container.contains("<strong>Total Addressable Market:</strong> $2B"));
}

#[tokio::test]
async fn blank_prompt_issues_no_request() {
    let (url, seen) = spawn_generation_server().await;
    let dispatcher = dispatcher_for(&url, "   ");

    assert!(dispatcher.submit().await.is_none());
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(dispatcher.page().snapshot(), Page::with_prompt("   "));
}

#[tokio::test]
async fn preset_trigger_strips_label_before_posting() {
    let (url, seen) = spawn_generation_server().await;
    let dispatcher = dispatcher_for(&url, "");

    let report = dispatcher.trigger_preset("🚀 Fintech!").await.expect("request issued");

    assert_eq!(report.prompt.as_str(), "Fintech");
    assert_eq!(dispatcher.page().snapshot().prompt_input, "Fintech");
    assert_eq!(
        *seen.lock().unwrap(),
        vec![vec![("prompt".to_string(), "Fintech".to_string())]]
    );
}

#[tokio::test]
async fn server_failure_becomes_error_block() {
    let (url, _) = spawn_generation_server().await;
    let dispatcher = dispatcher_for(&url, "quota");

    let report = dispatcher.submit().await.expect("request issued");

    assert_eq!(report.outcome, CycleOutcome::Failed("quota exceeded".to_string()));
    assert_eq!(
        dispatcher.page().snapshot().container,
        r#"<div class="error">Error: quota exceeded</div>"#
    );
}

#[tokio::test]
async fn empty_clusters_leave_container_empty() {
    let (url, _) = spawn_generation_server().await;
    let dispatcher = dispatcher_for(&url, "nothing");
    dispatcher.page().lock().container = "stale".to_string();

    dispatcher.submit().await.expect("request issued");

    let page = dispatcher.page().snapshot();
    assert_eq!(page.container, "");
    assert!(!page.loading);
}

#[tokio::test]
async fn non_json_body_becomes_error_block() {
    let (url, _) = spawn_generation_server().await;
    let dispatcher = dispatcher_for(&url, "gateway");

    let report = dispatcher.submit().await.expect("request issued");

    assert!(matches!(report.outcome, CycleOutcome::TransportFailed(_)));
    let page = dispatcher.page().snapshot();
    assert!(!page.loading);
    assert!(page.container.starts_with(r#"<div class="error">Error: "#));
    assert_eq!(page.container.matches("class=\"error\"").count(), 1);
}

#[tokio::test]
async fn unreachable_server_becomes_error_block() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let dispatcher = dispatcher_for(&format!("http://{addr}"), "fintech");

    let report = dispatcher.submit().await.expect("request issued");

    assert!(matches!(report.outcome, CycleOutcome::TransportFailed(_)));
    let page = dispatcher.page().snapshot();
    assert!(!page.loading);
    assert!(page.container.starts_with(r#"<div class="error">Error: "#));
}
