pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::guide::handlers as guide;
use crate::lead::handlers as lead;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Funnel
        .route("/api/quiz", get(quiz::handle_get_questions))
        .route("/api/quiz/result", post(quiz::handle_quiz_result))
        .route("/api/lead", post(lead::handle_capture_lead))
        // Guide download
        .route("/api/guide", get(guide::handle_get_guide))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, DEFAULT_GUIDE_URL};
    use crate::errors::AppError;
    use crate::lead::{Lead, LeadSink, LoggingLeadSink};

    /// Records every submitted lead in memory.
    #[derive(Default)]
    struct RecordingLeadSink {
        leads: Mutex<Vec<Lead>>,
    }

    #[async_trait]
    impl LeadSink for RecordingLeadSink {
        async fn submit(&self, lead: &Lead) -> Result<String, AppError> {
            self.leads.lock().unwrap().push(lead.clone());
            Ok("lead_test".to_string())
        }

        fn backend_name(&self) -> &'static str {
            "recording"
        }
    }

    struct FailingLeadSink;

    #[async_trait]
    impl LeadSink for FailingLeadSink {
        async fn submit(&self, _lead: &Lead) -> Result<String, AppError> {
            Err(AppError::Internal(anyhow::anyhow!("crm unreachable")))
        }

        fn backend_name(&self) -> &'static str {
            "failing"
        }
    }

    fn make_app(sink: Arc<dyn LeadSink>) -> Router {
        build_router(AppState {
            config: Config::default(),
            lead_sink: sink,
        })
    }

    fn default_app() -> Router {
        make_app(Arc::new(LoggingLeadSink))
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    // ── /health ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = default_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    // ── /api/guide ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_guide_returns_pdf_attachment() {
        let response = default_app()
            .oneshot(get("/api/guide?type=sleep"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"enso-sleep-breathwork-guide.pdf\""
        );
        assert!(body_bytes(response).await.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_guide_without_type_defaults_to_calm() {
        let response = default_app().oneshot(get("/api/guide")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"enso-calm-breathwork-guide.pdf\""
        );
    }

    #[tokio::test]
    async fn test_guide_unknown_type_defaults_to_calm() {
        let response = default_app()
            .oneshot(get("/api/guide?type=bogus"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"enso-calm-breathwork-guide.pdf\""
        );
    }

    // ── /api/lead ───────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_lead_maps_quiz_result_to_guide() {
        let sink = Arc::new(RecordingLeadSink::default());
        let body = json!({
            "email": "visitor@example.com",
            "variant": "b",
            "quizResult": "focus",
            "answers": { "goal": "focus" }
        });

        let response = make_app(sink.clone())
            .oneshot(post_json("/api/lead", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["leadId"], "lead_test");
        assert_eq!(json["pdfUrl"], "/api/guide?type=focus");

        let leads = sink.leads.lock().unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].email, "visitor@example.com");
        assert_eq!(leads[0].variant, "b");
        assert_eq!(leads[0].quiz_result.as_deref(), Some("focus"));
        assert!(leads[0].answers.is_some());
    }

    #[tokio::test]
    async fn test_lead_unmapped_result_uses_default_url() {
        let body = json!({ "email": "a@b.c", "variant": "a", "quizResult": "zen" });
        let response = default_app()
            .oneshot(post_json("/api/lead", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["pdfUrl"], DEFAULT_GUIDE_URL);
        assert!(json["leadId"].as_str().unwrap().starts_with("lead_"));
    }

    #[tokio::test]
    async fn test_lead_without_result_uses_default_url() {
        let body = json!({ "email": "a@b.c", "variant": "a" });
        let response = default_app()
            .oneshot(post_json("/api/lead", body.to_string()))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["pdfUrl"], DEFAULT_GUIDE_URL);
    }

    #[tokio::test]
    async fn test_lead_malformed_body_returns_500() {
        let response = default_app()
            .oneshot(post_json("/api/lead", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Failed to capture lead");
    }

    #[tokio::test]
    async fn test_lead_sink_failure_returns_500() {
        let body = json!({ "email": "a@b.c", "variant": "a" });
        let response = make_app(Arc::new(FailingLeadSink))
            .oneshot(post_json("/api/lead", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["success"], false);
    }

    #[tokio::test]
    async fn test_lead_accepts_null_and_non_string_fields() {
        let bodies = [
            json!({ "email": null, "variant": "a" }),
            json!({ "email": 42, "variant": "a" }),
            json!({ "email": "a@b.c", "variant": "a", "quizResult": 3 }),
        ];

        for body in bodies {
            let response = default_app()
                .oneshot(post_json("/api/lead", body.to_string()))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "body: {body}");
            let json = body_json(response).await;
            assert_eq!(json["success"], true);
            assert_eq!(json["pdfUrl"], DEFAULT_GUIDE_URL);
        }
    }

    #[tokio::test]
    async fn test_lead_null_email_recorded_as_empty() {
        let sink = Arc::new(RecordingLeadSink::default());
        let body = json!({ "email": null, "variant": "a", "quizResult": "calm" });

        let response = make_app(sink.clone())
            .oneshot(post_json("/api/lead", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["pdfUrl"], "/api/guide?type=calm");
        assert_eq!(sink.leads.lock().unwrap()[0].email, "");
    }

    // ── /api/quiz ───────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_quiz_questions_listed() {
        let response = default_app().oneshot(get("/api/quiz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["questions"].as_array().unwrap().len(), 5);
        assert_eq!(json["questions"][3]["key"], "goal");
    }

    #[tokio::test]
    async fn test_quiz_result_classifies_answers() {
        let body = json!({ "stress": "high", "sleep": "poor", "goal": "focus" });
        let response = default_app()
            .oneshot(post_json("/api/quiz/result", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["result"], "sleep");
        assert_eq!(json["title"], "The Rest Restorer");
        assert_eq!(json["guideUrl"], "/api/guide?type=sleep");
        assert_eq!(json["techniques"].as_array().unwrap().len(), 3);
        assert_eq!(
            json["description"],
            crate::content::Persona::Sleep.profile().result_description
        );
    }

    #[tokio::test]
    async fn test_quiz_result_malformed_body_returns_json_error() {
        let response = default_app()
            .oneshot(post_json("/api/quiz/result", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["error"]["message"].is_string());
    }
}
