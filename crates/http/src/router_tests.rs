//! HTTP contract tests driving the router in-process.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{HeaderMap, Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use xinzhi_llm::LlmClient;
    use xinzhi_service::{AnalysisService, ChatService, KnowledgeService, StaticCredential};

    use crate::{AppState, create_router};

    fn app(provider: &MockServer, api_key: Option<&str>) -> Router {
        let client = LlmClient::new(&provider.uri(), Duration::from_secs(5)).unwrap();
        let credentials = StaticCredential::new(api_key.map(str::to_owned));
        create_router(Arc::new(AppState {
            analysis_service: Arc::new(AnalysisService::new()),
            chat_service: Arc::new(ChatService::new(Arc::new(client), Arc::new(credentials))),
            knowledge_service: Arc::new(KnowledgeService::default()),
        }))
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, HeaderMap, Option<Value>) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() { None } else { Some(serde_json::from_slice(&bytes).unwrap()) };
        (status, headers, body)
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_raw(uri: &str, body: &'static str) -> Request<Body> {
        Request::post(uri).body(Body::from(body)).unwrap()
    }

    fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> &'h str {
        headers.get(name).and_then(|v| v.to_str().ok()).unwrap_or_default()
    }

    fn completion(content: &str) -> Value {
        json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }],
            "usage": { "total_tokens": 99 }
        })
    }

    #[tokio::test]
    async fn test_health_and_version() {
        let provider = MockServer::start().await;
        let resp = app(&provider, None)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let (status, _, body) =
            send(app(&provider, None), Request::get("/api/version").body(Body::empty()).unwrap())
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.unwrap()["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_preflight_is_answered_without_reaching_handlers() {
        let provider = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(500)).expect(0).mount(&provider).await;

        for uri in ["/chat", "/api/chat", "/analyze", "/api/analyze"] {
            let req = Request::builder()
                .method(Method::OPTIONS)
                .uri(uri)
                .header(header::ORIGIN, "http://localhost:8080")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap();
            let (status, headers, body) = send(app(&provider, Some("key")), req).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.is_none(), "{uri}");
            assert_eq!(header_str(&headers, "access-control-allow-origin"), "*");
            let methods = header_str(&headers, "access-control-allow-methods");
            assert!(methods.contains("POST") && methods.contains("OPTIONS"), "{methods}");
            assert!(!methods.contains("GET"), "{methods}");
            assert!(
                header_str(&headers, "access-control-allow-headers")
                    .eq_ignore_ascii_case("content-type")
            );
        }
    }

    #[tokio::test]
    async fn test_knowledge_preflight_allows_get() {
        let provider = MockServer::start().await;
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/knowledge")
            .header(header::ORIGIN, "http://localhost:8080")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let (status, headers, _) = send(app(&provider, None), req).await;
        assert_eq!(status, StatusCode::OK);
        let methods = header_str(&headers, "access-control-allow-methods");
        assert!(methods.contains("GET") && methods.contains("POST"), "{methods}");
    }

    #[tokio::test]
    async fn test_bare_options_returns_ok() {
        let provider = MockServer::start().await;
        let req =
            Request::builder().method(Method::OPTIONS).uri("/knowledge").body(Body::empty()).unwrap();
        let (status, headers, body) = send(app(&provider, None), req).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_none());
        assert_eq!(header_str(&headers, "access-control-allow-origin"), "*");
    }

    #[tokio::test]
    async fn test_unsupported_methods_are_405() {
        let provider = MockServer::start().await;
        for (verb, uri) in
            [(Method::GET, "/analyze"), (Method::GET, "/api/chat"), (Method::PUT, "/knowledge")]
        {
            let req = Request::builder().method(verb).uri(uri).body(Body::empty()).unwrap();
            let (status, headers, body) = send(app(&provider, None), req).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{uri}");
            assert_eq!(body.unwrap(), json!({ "error": "Method not allowed" }));
            assert_eq!(header_str(&headers, "access-control-allow-origin"), "*");
        }
    }

    #[tokio::test]
    async fn test_head_on_knowledge_is_405() {
        let provider = MockServer::start().await;
        for uri in ["/knowledge", "/api/knowledge"] {
            let req = Request::builder().method(Method::HEAD).uri(uri).body(Body::empty()).unwrap();
            let resp = app(&provider, None).oneshot(req).await.unwrap();
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_analyze_ncm811() {
        let provider = MockServer::start().await;
        let input = json!({
            "material": "NCM811",
            "process": "dry-electrode",
            "design": "cylindrical",
            "energyDensity": 280
        });
        let (status, headers, body) = send(app(&provider, None), post_json("/api/analyze", &input)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(header_str(&headers, "access-control-allow-origin"), "*");

        let body = body.unwrap();
        assert_eq!(body["success"], true);
        let data = &body["data"];
        assert_eq!(data["highRiskCount"], 1);
        assert_eq!(data["mediumRiskCount"], 1);
        assert_eq!(data["lowRiskCount"], 2);
        assert_eq!(data["risks"][0]["patentNumber"], "CN201810123456.7");
        assert_eq!(data["compliance"]["thermalDiffusion"], "需加强热管理设计");
        assert_eq!(data["compliance"]["mechanicalCrush"], "需验证底部防护");
        assert_eq!(body["report"]["sections"].as_array().map(Vec::len), Some(4));
        assert_eq!(body["report"]["sections"][0]["content"], "高风险：1项，中风险：1项，低风险：2项");
    }

    #[tokio::test]
    async fn test_analyze_accepts_body_without_content_type() {
        let provider = MockServer::start().await;
        let (status, _, body) =
            send(app(&provider, None), post_raw("/analyze", r#"{"energyDensity":"251"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        let data = &body.unwrap()["data"];
        assert_eq!(data["highRiskCount"], 0);
        assert_eq!(data["compliance"]["thermalDiffusion"], "需加强热管理设计");
    }

    #[tokio::test]
    async fn test_analyze_non_string_material_is_computed_not_mocked() {
        let provider = MockServer::start().await;
        let input = json!({ "material": 811, "energyDensity": 300 });
        let (status, _, body) = send(app(&provider, None), post_json("/analyze", &input)).await;
        assert_eq!(status, StatusCode::OK);
        let body = body.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["highRiskCount"], 0);
        assert_eq!(body["data"]["lowRiskCount"], 2);
        assert_eq!(body["data"]["compliance"]["thermalDiffusion"], "需加强热管理设计");
    }

    #[tokio::test]
    async fn test_analyze_unparseable_body_serves_mock() {
        let provider = MockServer::start().await;
        let (status, _, body) = send(app(&provider, None), post_raw("/analyze", "not json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "分析失败");
        assert_eq!(body["data"]["highRiskCount"], 1);
        assert_eq!(body["data"]["mediumRiskCount"], 2);
        assert_eq!(body["data"]["lowRiskCount"], 3);
    }

    #[tokio::test]
    async fn test_chat_empty_message_is_400_without_provider_call() {
        let provider = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&provider).await;

        for body in [json!({}), json!({ "message": "" }), json!({ "message": null, "context": "x" })] {
            let (status, _, resp) = send(app(&provider, Some("key")), post_json("/chat", &body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(resp.unwrap(), json!({ "error": "Message is required" }));
        }
    }

    #[tokio::test]
    async fn test_chat_without_key_serves_fallback() {
        let provider = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&provider).await;

        let (status, _, body) =
            send(app(&provider, None), post_json("/api/chat", &json!({ "message": "这个配方有专利风险吗" })))
                .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "API key not configured");
        assert!(body["fallback"].as_str().unwrap().starts_with("🔍 **专利风险分析**"));
    }

    #[tokio::test]
    async fn test_chat_success() {
        let provider = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("建议使用NCM622")))
            .expect(1)
            .mount(&provider)
            .await;

        let req = post_json("/chat", &json!({ "message": "替代方案", "context": "NCM811" }));
        let (status, _, body) = send(app(&provider, Some("key")), req).await;
        assert_eq!(status, StatusCode::OK);
        let body = body.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["reply"], "建议使用NCM622");
        assert_eq!(body["usage"]["total_tokens"], 99);
    }

    #[tokio::test]
    async fn test_chat_rate_limited_is_humanized() {
        let provider = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
            .expect(1)
            .mount(&provider)
            .await;

        let (status, _, body) =
            send(app(&provider, Some("key")), post_json("/chat", &json!({ "message": "GB38031" })))
                .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body.unwrap();
        assert_eq!(body["error"], "请求频率超限，请稍后再试");
        assert!(body["fallback"].as_str().unwrap().starts_with("📋 **GB38031-2025合规要求**"));
    }

    #[tokio::test]
    async fn test_chat_unparseable_body_gets_generic_error_and_welcome() {
        let provider = MockServer::start().await;
        let (status, _, body) = send(app(&provider, Some("key")), post_raw("/chat", "{oops")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body.unwrap();
        assert_eq!(body["error"], "AI服务暂时不可用，请稍后重试");
        assert!(body["fallback"].as_str().unwrap().starts_with("🤖 **芯智AI助手**"));
    }

    #[tokio::test]
    async fn test_knowledge_get_returns_dataset() {
        let provider = MockServer::start().await;
        let (status, _, body) =
            send(app(&provider, None), Request::get("/api/knowledge").body(Body::empty()).unwrap())
                .await;
        assert_eq!(status, StatusCode::OK);
        let body = body.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["materials"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["data"]["processes"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["data"]["standards"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["data"]["patents"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_knowledge_search_by_category() {
        let provider = MockServer::start().await;
        let req = post_json("/knowledge", &json!({ "query": "三星", "category": "patents" }));
        let (status, _, body) = send(app(&provider, None), req).await;
        assert_eq!(status, StatusCode::OK);
        let body = body.unwrap();
        assert_eq!(body["query"], "三星");
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["type"], "patent");
        assert_eq!(results[0]["data"]["number"], "CN201910987654.3");
    }

    #[tokio::test]
    async fn test_knowledge_empty_category_scans_everything() {
        let provider = MockServer::start().await;
        let req = post_json("/knowledge", &json!({ "query": "", "category": "" }));
        let (status, _, body) = send(app(&provider, None), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.unwrap()["results"].as_array().map(Vec::len), Some(10));
    }

    #[tokio::test]
    async fn test_knowledge_unknown_category_matches_nothing() {
        let provider = MockServer::start().await;
        let req = post_json("/knowledge", &json!({ "query": "", "category": "recipes" }));
        let (status, _, body) = send(app(&provider, None), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.unwrap()["results"], json!([]));
    }

    #[tokio::test]
    async fn test_knowledge_search_failures() {
        let provider = MockServer::start().await;
        for req in [post_json("/knowledge", &json!({ "category": "patents" })), post_raw("/knowledge", "")] {
            let (status, _, body) = send(app(&provider, None), req).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.unwrap(), json!({ "success": false, "error": "搜索失败" }));
        }
    }
}
