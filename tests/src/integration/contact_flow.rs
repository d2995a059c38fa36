//! # Contact Flow Tests
//!
//! End-to-end checks of `POST /api/contact` against a gateway listening on
//! an ephemeral localhost port:
//!
//! 1. **Scenarios**: the five reference submissions and their responses
//! 2. **Independence**: repeated and concurrent submissions do not interact
//! 3. **Lifecycle**: graceful shutdown lets in-flight submissions finish

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use async_trait::async_trait;
    use contact_gateway::{
        ContactGatewayService, ContactResponse, ContactSubmission, GatewayConfig, GatewayError,
        SinkError, SubmissionId, SubmissionSink,
    };
    use serde_json::json;
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Sink that records deliveries after waiting a fixed delay
    struct RecordingSink {
        delay: Duration,
        delivered: Mutex<Vec<(SubmissionId, ContactSubmission)>>,
    }

    impl RecordingSink {
        fn new(delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                delay,
                delivered: Mutex::new(Vec::new()),
            })
        }

        fn count(&self) -> usize {
            self.delivered.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SubmissionSink for RecordingSink {
        async fn deliver(
            &self,
            id: SubmissionId,
            submission: &ContactSubmission,
        ) -> Result<(), SinkError> {
            tokio::time::sleep(self.delay).await;
            self.delivered
                .lock()
                .unwrap()
                .push((id, submission.clone()));
            Ok(())
        }
    }

    struct Harness {
        addr: SocketAddr,
        service: Arc<ContactGatewayService>,
        server: JoinHandle<Result<(), GatewayError>>,
        client: reqwest::Client,
    }

    impl Harness {
        async fn start(sink: Arc<dyn SubmissionSink>) -> Self {
            let mut config = GatewayConfig::default();
            config.http.host = [127, 0, 0, 1].into();
            config.http.port = 0;

            let service = Arc::new(ContactGatewayService::new(config, sink).unwrap());
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();

            let server = {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.serve(listener).await })
            };

            Self {
                addr,
                service,
                server,
                client: reqwest::Client::new(),
            }
        }

        fn url(&self, path: &str) -> String {
            format!("http://{}{}", self.addr, path)
        }

        async fn submit(&self, body: serde_json::Value) -> (u16, ContactResponse) {
            let response = self
                .client
                .post(self.url("/api/contact"))
                .json(&body)
                .send()
                .await
                .unwrap();
            let status = response.status().as_u16();
            (status, response.json().await.unwrap())
        }

        async fn stop(self) {
            self.service.shutdown();
            let result = tokio::time::timeout(Duration::from_secs(5), self.server)
                .await
                .expect("server should stop after shutdown")
                .unwrap();
            assert!(result.is_ok());
        }
    }

    // =========================================================================
    // SCENARIOS
    // =========================================================================

    #[tokio::test]
    async fn test_reference_scenarios() {
        let sink = RecordingSink::new(Duration::ZERO);
        let harness = Harness::start(sink.clone()).await;

        let (status, body) = harness
            .submit(json!({"name": "Jane", "email": "jane@example.com", "subject": "Hi", "message": "Hello there"}))
            .await;
        assert_eq!(status, 200);
        assert!(body.success);
        assert_eq!(body.message, "Message received successfully!");

        let (status, body) = harness
            .submit(json!({"name": "", "email": "jane@example.com", "message": "Hello"}))
            .await;
        assert_eq!(status, 400);
        assert!(!body.success);
        assert_eq!(body.message, "Name, email, and message are required");

        let (status, body) = harness
            .submit(json!({"name": "Jane", "email": "not-an-email", "message": "Hello"}))
            .await;
        assert_eq!(status, 400);
        assert!(!body.success);
        assert_eq!(body.message, "Please provide a valid email address");

        let (status, body) = harness
            .submit(json!({"name": "Jane", "email": "jane@example.com", "message": ""}))
            .await;
        assert_eq!(status, 400);
        assert_eq!(body.message, "Name, email, and message are required");

        let (status, body) = harness
            .submit(json!({"name": "Jane", "email": "jane@example.com", "subject": "", "message": "Hi"}))
            .await;
        assert_eq!(status, 200);
        assert!(body.success);

        // Only the two accepted submissions were handed off
        assert_eq!(sink.count(), 2);

        harness.stop().await;
    }

    #[tokio::test]
    async fn test_email_shape_edge_cases() {
        let harness = Harness::start(RecordingSink::new(Duration::ZERO)).await;

        for email in ["jane", "jane@example", "jane @example.com", "jane@exa mple.com"] {
            let (status, body) = harness
                .submit(json!({"name": "Jane", "email": email, "message": "Hi"}))
                .await;
            assert_eq!(status, 400, "{email}");
            assert_eq!(body.message, "Please provide a valid email address");
        }

        let (status, _) = harness
            .submit(json!({"name": "Jane", "email": "jane@mail.example.co.uk", "message": "Hi"}))
            .await;
        assert_eq!(status, 200);

        harness.stop().await;
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let harness = Harness::start(RecordingSink::new(Duration::ZERO)).await;

        let response = harness
            .client
            .post(harness.url("/api/contact"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
        let body: ContactResponse = response.json().await.unwrap();
        assert!(!body.success);
        assert_eq!(body.message, "Invalid request body");

        harness.stop().await;
    }

    // =========================================================================
    // INDEPENDENCE
    // =========================================================================

    #[tokio::test]
    async fn test_duplicate_submissions_are_independent() {
        let sink = RecordingSink::new(Duration::ZERO);
        let harness = Harness::start(sink.clone()).await;
        let payload = json!({"name": "Jane", "email": "jane@example.com", "message": "Hello"});

        let (first, _) = harness.submit(payload.clone()).await;
        let (second, _) = harness.submit(payload).await;
        assert_eq!((first, second), (200, 200));

        let delivered = sink.delivered.lock().unwrap().clone();
        assert_eq!(delivered.len(), 2);
        assert_ne!(delivered[0].0, delivered[1].0);
        assert_eq!(delivered[0].1, delivered[1].1);

        harness.stop().await;
    }

    #[tokio::test]
    async fn test_concurrent_submissions_do_not_serialize() {
        let delay = Duration::from_millis(300);
        let sink = RecordingSink::new(delay);
        let harness = Harness::start(sink.clone()).await;

        let start = Instant::now();
        let requests = (0..5).map(|i| {
            harness.submit(json!({
                "name": format!("Visitor {i}"),
                "email": format!("visitor{i}@example.com"),
                "message": "Hello"
            }))
        });
        let results = futures::future::join_all(requests).await;
        let elapsed = start.elapsed();

        assert!(results.iter().all(|(status, body)| *status == 200 && body.success));
        assert_eq!(sink.count(), 5);
        assert!(elapsed >= delay);
        assert!(elapsed < delay * 5, "submissions ran sequentially: {elapsed:?}");

        harness.stop().await;
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    #[tokio::test]
    async fn test_shutdown_drains_in_flight_submission() {
        let sink = RecordingSink::new(Duration::from_millis(300));
        let harness = Harness::start(sink.clone()).await;

        let client = harness.client.clone();
        let url = harness.url("/api/contact");
        let in_flight = tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({"name": "Jane", "email": "jane@example.com", "message": "Hi"}))
                .send()
                .await
                .unwrap()
                .status()
                .as_u16()
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        harness.stop().await;

        assert_eq!(in_flight.await.unwrap(), 200);
        assert_eq!(sink.count(), 1);
    }

    #[tokio::test]
    async fn test_cors_preflight_from_browser() {
        let harness = Harness::start(RecordingSink::new(Duration::ZERO)).await;

        let response = harness
            .client
            .request(reqwest::Method::OPTIONS, harness.url("/api/contact"))
            .header("origin", "https://jane.dev")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );

        harness.stop().await;
    }

    #[tokio::test]
    async fn test_health_and_metrics_endpoints() {
        let harness = Harness::start(RecordingSink::new(Duration::ZERO)).await;
        harness
            .submit(json!({"name": "Jane", "email": "bad", "message": "Hi"}))
            .await;

        let health: serde_json::Value = harness
            .client
            .get(harness.url("/health"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["status"], "healthy");

        let metrics: serde_json::Value = harness
            .client
            .get(harness.url("/metrics"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(metrics["rejected"]["invalid_email"], 1);
        assert_eq!(metrics["requests"]["accepted"], 0);

        harness.stop().await;
    }
}
