use std::path::PathBuf;

use consultation_booking::booking_client::BookingClient;
use consultation_booking::configuration::{get_configuration_from, Settings};
use consultation_booking::domain::{ApiBaseUrl, FormField};
use consultation_booking::form::BookingForm;
use consultation_booking::storage::{FileStore, KeyValueStore, SelectionBridge, SELECTED_OPTIONS_SLOT};
use consultation_booking::telemetry::init_subscriber;
use once_cell::sync::Lazy;
use serde_json::Value;
use uuid::Uuid;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    let configuration = configuration();

    let outcome = if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout,
            &configuration.telemetry,
        )
    } else {
        init_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink,
            &configuration.telemetry,
        )
    };
    outcome.expect("Failed to install the test subscriber.");
});

fn configuration() -> Settings {
    let directory = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configuration");
    let mut c = get_configuration_from(directory).expect("Failed to read configuration.");
    c.telemetry.enabled = false;
    c
}

pub struct TestApp {
    pub booking_server: MockServer,
    pub booking_client: BookingClient,
    pub store_path: PathBuf,
}

impl TestApp {
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.store_path)
    }

    pub fn seed_selection(&self, raw: &str) {
        self.store()
            .set(SELECTED_OPTIONS_SLOT, raw)
            .expect("Failed to seed the selected options slot.");
    }

    pub fn stored_selection(&self) -> Option<String> {
        self.store()
            .get(SELECTED_OPTIONS_SLOT)
            .expect("Failed to read the selected options slot.")
    }

    pub fn mounted_form(&self) -> BookingForm<FileStore> {
        let mut form = BookingForm::new(SelectionBridge::new(self.store()));
        form.on_mount();
        form
    }

    pub async fn received_bookings(&self) -> Vec<Value> {
        self.booking_server
            .received_requests()
            .await
            .expect("Request recording is disabled.")
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("Booking body is not JSON."))
            .collect()
    }
}

pub fn fill_valid(form: &mut BookingForm<FileStore>) {
    form.on_field_change(FormField::Name, "Ursula Le Guin");
    form.on_field_change(FormField::Email, "ursula@example.com");
    form.on_field_change(FormField::Business, "Earthsea Ltd");
    form.on_field_change(FormField::Message, "We want to automate our support inbox.");
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let booking_server = MockServer::start().await;

    let configuration = {
        let mut c = configuration();
        c.booking_api.base_url =
            ApiBaseUrl::parse(&booking_server.uri()).expect("Mock server uri is not a base url.");
        c.booking_api.timeout_millis = 500;
        c.storage.path = std::env::temp_dir()
            .join(format!("booking-test-{}", Uuid::new_v4()))
            .join("local_storage.json");
        c
    };

    let booking_client = configuration
        .booking_api
        .client()
        .expect("Failed to build the booking client.");

    TestApp {
        booking_server,
        booking_client,
        store_path: configuration.storage.path,
    }
}
