use actix_http::{encoding::Decoder, Payload};
use once_cell::sync::Lazy;
use wire_profile::{
    application::Application,
    settings::get_settings,
    telemetry::{get_subscriber, init_subscriber},
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber)
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber)
    };
});

pub struct TestApplication {
    pub address: String,
    pub port: u16,
    pub backend: MockServer,
}

impl TestApplication {
    pub fn http_client(&self) -> awc::Client {
        awc::Client::default()
    }

    pub async fn get(&self, path: &str) -> awc::ClientResponse<Decoder<Payload>> {
        self.http_client()
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_profile(&self, username: &str) -> awc::ClientResponse<Decoder<Payload>> {
        self.get(&format!("/profile/{}", username)).await
    }

    pub async fn get_profile_section(
        &self,
        username: &str,
        section: &str,
    ) -> awc::ClientResponse<Decoder<Payload>> {
        self.get(&format!("/profile/{}/{}", username, section)).await
    }

    ///
    /// Answer `GET {endpoint}` on the mock backend with `body` as JSON.
    ///
    pub async fn mock_backend(&self, endpoint: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.backend)
            .await;
    }

    pub async fn mock_backend_status(&self, endpoint: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.backend)
            .await;
    }

    ///
    /// Answer every profile endpoint of `username` with an empty list.
    ///
    pub async fn mock_empty_profile(&self, username: &str) {
        for endpoint in [
            format!("/message/{}", username),
            format!("/get-recommended-users/{}", username),
            format!("/following/{}", username),
            format!("/followers/{}", username),
        ] {
            self.mock_backend(&endpoint, serde_json::json!([])).await;
        }
    }
}

pub async fn spawn_app() -> TestApplication {
    Lazy::force(&TRACING);

    let backend = MockServer::start().await;

    let settings = {
        let mut settings = get_settings().expect("Failed to read settings");

        settings.application.port = 0;
        settings.backend.base_url = backend.uri();

        settings
    };

    let application = Application::build(settings)
        .await
        .expect("Failed to build application");

    let application_port = application.port();

    let _ = tokio::spawn(application.run_until_stopped());

    TestApplication {
        address: format!("http://localhost:{}", application_port),
        port: application_port,
        backend,
    }
}

pub async fn body_text(mut response: awc::ClientResponse<Decoder<Payload>>) -> String {
    let body = response.body().await.expect("Failed to read response body.");

    String::from_utf8(body.to_vec()).expect("Response body is not utf-8.")
}
