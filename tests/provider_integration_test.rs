use httpmock::prelude::*;
use regret_roast::core::pool::pool_for;
use regret_roast::domain::ports::RoastProvider;
use regret_roast::{
    Intensity, OpenRouterProvider, OpenRouterSettings, ProviderError, RoastEngine, RoastRequest,
    RoastSource, SeededRandom,
};
use std::sync::Arc;
use std::time::Duration;

fn settings_for(server: &MockServer) -> OpenRouterSettings {
    OpenRouterSettings {
        enabled: true,
        api_key: Some("sk-test".to_string()),
        endpoint: server.url("/api/v1/chat/completions"),
        ..OpenRouterSettings::default()
    }
}

fn coffee(intensity: Intensity) -> RoastRequest {
    RoastRequest::new("coffee", 45000.0, "BTC", 5.0, intensity)
}

#[tokio::test]
async fn test_provider_sends_prompt_and_returns_completion() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/chat/completions")
            .header("authorization", "Bearer sk-test")
            .header("http-referer", "https://crypto-regret-engine.vercel.app")
            .json_body_partial(
                r#"{
                    "model": "meta-llama/llama-3.2-3b-instruct:free",
                    "max_tokens": 50
                }"#,
            )
            .body_contains("Be brutally honest and savage. No mercy.")
            .body_contains("They spent $5 on coffee instead of buying BTC. It would be worth $45,000 now. Roast them.");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": " Your coffee cost you a condo. "}}]
            }));
    });

    let provider = OpenRouterProvider::new(settings_for(&server)).unwrap();
    let roast = provider.generate(&coffee(Intensity::Savage)).await.unwrap();

    api_mock.assert();
    assert_eq!(roast, "Your coffee cost you a condo.");
}

#[tokio::test]
async fn test_unknown_intensity_sends_medium_tone() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/chat/completions")
            .body_contains("Be sarcastic and sharp, but not cruel.");
        then.status(200).json_body(serde_json::json!({
            "choices": [{"message": {"content": "Bold move."}}]
        }));
    });

    let provider = OpenRouterProvider::new(settings_for(&server)).unwrap();
    let request = RoastRequest::new("tv", 10.0, "ETH", 1.0, Intensity::parse_lenient("wat"));
    let roast = provider.generate(&request).await.unwrap();

    api_mock.assert();
    assert_eq!(roast, "Bold move.");
}

#[tokio::test]
async fn test_rate_limited_provider_is_call_failure() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/chat/completions");
        then.status(429).body("slow down");
    });

    let provider = OpenRouterProvider::new(settings_for(&server)).unwrap();
    let result = provider.generate(&coffee(Intensity::Medium)).await;

    api_mock.assert_hits(1);
    assert!(matches!(result, Err(ProviderError::Status { status: 429 })));
}

#[tokio::test]
async fn test_malformed_body_is_call_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/chat/completions");
        then.status(200).body("<html>not json</html>");
    });

    let provider = OpenRouterProvider::new(settings_for(&server)).unwrap();
    let result = provider.generate(&coffee(Intensity::Medium)).await;

    assert!(matches!(result, Err(ProviderError::Malformed { .. })));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/chat/completions");
        then.status(200)
            .delay(Duration::from_millis(1500))
            .json_body(serde_json::json!({
                "choices": [{"message": {"content": "Too late."}}]
            }));
    });

    let provider = OpenRouterProvider::new(OpenRouterSettings {
        timeout: Duration::from_millis(200),
        ..settings_for(&server)
    })
    .unwrap();
    let result = provider.generate(&coffee(Intensity::Fun)).await;

    assert!(matches!(result, Err(ProviderError::Transport(_))));
}

#[tokio::test]
async fn test_disabled_provider_makes_no_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/chat/completions");
        then.status(200);
    });

    let provider = OpenRouterProvider::new(OpenRouterSettings {
        enabled: false,
        ..settings_for(&server)
    })
    .unwrap();
    let result = provider.generate(&coffee(Intensity::Medium)).await;

    api_mock.assert_hits(0);
    assert!(matches!(result, Err(ProviderError::Unavailable)));
}

#[tokio::test]
async fn test_engine_falls_back_on_429() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/chat/completions");
        then.status(429);
    });

    let provider = OpenRouterProvider::new(settings_for(&server)).unwrap();
    let engine = RoastEngine::new(Arc::new(provider), Arc::new(SeededRandom::new(1)));
    let outcome = engine.roast(&coffee(Intensity::Savage)).await;

    // 只嘗試一次，不重試
    api_mock.assert_hits(1);
    assert_ne!(outcome.source, RoastSource::Provider);
    assert!(!outcome.roast.is_empty());
}

#[tokio::test]
async fn test_engine_rejects_oversized_completion() {
    let server = MockServer::start();
    let long_roast = "regret ".repeat(72);
    assert!(long_roast.len() >= 500);
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/chat/completions");
        then.status(200).json_body(serde_json::json!({
            "choices": [{"message": {"content": long_roast}}]
        }));
    });

    let provider = OpenRouterProvider::new(settings_for(&server)).unwrap();
    let engine = RoastEngine::new(Arc::new(provider), Arc::new(SeededRandom::new(3)));
    let outcome = engine.roast(&coffee(Intensity::Fun)).await;

    assert_eq!(outcome.source, RoastSource::Pool);
    assert!(pool_for(Intensity::Fun).contains(&outcome.roast.as_str()));
}

#[tokio::test]
async fn test_engine_uses_provider_roast_when_healthy() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/chat/completions");
        then.status(200).json_body(serde_json::json!({
            "choices": [{"message": {"content": "That latte had a mortgage attached."}}]
        }));
    });

    let provider = OpenRouterProvider::new(settings_for(&server)).unwrap();
    let engine = RoastEngine::new(Arc::new(provider), Arc::new(SeededRandom::new(5)));
    assert!(engine.provider_enabled());

    let outcome = engine.roast(&coffee(Intensity::Medium)).await;
    assert_eq!(outcome.source, RoastSource::Provider);
    assert_eq!(outcome.roast, "That latte had a mortgage attached.");
}
