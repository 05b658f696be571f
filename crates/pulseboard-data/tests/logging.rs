//! The fallback path must leave a warning naming the category and user.

use std::io;
use std::sync::{Arc, Mutex};

use pulseboard_api::{DashboardClient, OverviewQuery};
use pulseboard_data::DataService;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let buf = self.0.lock().expect("log buffer lock poisoned");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer lock poisoned")
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn fallback_logs_category_and_username() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = DashboardClient::with_base_url("http://127.0.0.1:1", 5, "pulseboard-test/0.1")
        .expect("client construction should not fail");
    let service = DataService::new(client);
    service
        .get_overview("c-1", &OverviewQuery::default(), "jane_doe")
        .await;
    service.get_monetization_metrics("c-1", "jane_doe").await;

    let logs = captured.contents();
    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(logs.contains("overview"), "logs: {logs}");
    assert!(logs.contains("monetization"), "logs: {logs}");
    assert!(logs.contains("jane_doe"), "logs: {logs}");
}

#[tokio::test]
async fn successful_fetch_logs_no_warning() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::path("/api/dashboard/trends"))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "facts": { "engagement_change": "+1.0%" } })),
        )
        .mount(&server)
        .await;

    let client = DashboardClient::with_base_url(&server.uri(), 5, "pulseboard-test/0.1")
        .expect("client construction should not fail");
    let trends = DataService::new(client).get_trends("c-1", "demo_user").await;

    assert_eq!(trends.facts.engagement_change, "+1.0%");
    assert!(!captured.contents().contains("WARN"));
}
