use actix_web::web::Data;
use aquatrash::authentication::register_account;
use aquatrash::configuration::{Settings, get_configuration};
use aquatrash::domain::Username;
use aquatrash::startup::Application;
use aquatrash::storage::MemStorage;
use aquatrash::telemetry;
use aquatrash::telemetry::init_subscriber;
use once_cell::sync::Lazy;
use reqwest::Response;
use secrecy::Secret;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub store: Data<MemStorage>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> Response {
        self.api_client
            .post(format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute Request")
    }

    pub async fn post_raw_contact(&self, body: &'static str) -> Response {
        self.api_client
            .post(format!("{}/api/contact", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute Request")
    }

    pub async fn get_contact(&self) -> Response {
        self.api_client
            .get(format!("{}/api/contact", &self.address))
            .send()
            .await
            .expect("Failed to execute Request")
    }

    pub async fn post_newsletter(&self, body: &serde_json::Value) -> Response {
        self.api_client
            .post(format!("{}/api/newsletter", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute Request")
    }

    pub async fn get_newsletter(&self) -> Response {
        self.api_client
            .get(format!("{}/api/newsletter", &self.address))
            .send()
            .await
            .expect("Failed to execute Request")
    }

    pub async fn get_listing_as(&self, path: &str, username: &str, password: &str) -> Response {
        self.api_client
            .get(format!("{}{}", &self.address, path))
            .basic_auth(username, Some(password))
            .send()
            .await
            .expect("Failed to execute Request")
    }
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = 0;
        c.application.protect_listings = false;
        c.admin = None;
        customise(&mut c);
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", application.port());
    let store = application.store();

    _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        store,
        api_client: reqwest::Client::new(),
    }
}

pub struct TestUser {
    pub username: String,
    pub password: String,
}

impl TestUser {
    pub fn generate() -> Self {
        Self {
            username: Uuid::new_v4().to_string(),
            password: Uuid::new_v4().to_string(),
        }
    }

    pub async fn store(&self, store: &MemStorage) {
        register_account(
            store,
            Username::parse(&self.username).unwrap(),
            Secret::new(self.password.clone()),
        )
        .await
        .expect("Failed to create test user");
    }
}

pub fn valid_contact() -> serde_json::Value {
    serde_json::json!({
        "name": "Jo",
        "email": "jo@x.com",
        "subject": "question",
        "message": "Hello there, testing."
    })
}
