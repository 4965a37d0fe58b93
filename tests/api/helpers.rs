use axum_webserver::configuration::get_configuration;
use axum_webserver::startup::Application;
use axum_webserver::telemetry::setup_tracing;
use once_cell::sync::Lazy;
use reqwest::Client;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter = "debug";
    if std::env::var("TEST_LOG").is_ok() {
        setup_tracing("test", default_filter, std::io::stdout);
    } else {
        setup_tracing("test", default_filter, std::io::sink);
    }
});

pub struct TestApp {
    pub address: String,
    pub server_port: u16,
}

impl TestApp {
    pub async fn check_health(
        &self,
    ) -> Result<reqwest::Response, reqwest::Error> {
        Client::new().get(format!("{}/", &self.address)).send().await
    }

    pub async fn ping(&self) -> Result<reqwest::Response, reqwest::Error> {
        Client::new()
            .get(format!("{}/ping", &self.address))
            .send()
            .await
    }

    pub async fn get(
        &self,
        path: &str,
    ) -> Result<reqwest::Response, reqwest::Error> {
        Client::new()
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("failed to get configuration");
        c.application.port = 0;
        c.application.host = "127.0.0.1".to_string();
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build app.");
    let server_port = application.port();
    tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", server_port),
        server_port,
    }
}
