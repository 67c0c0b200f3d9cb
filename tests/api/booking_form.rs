use std::time::Duration;

use claims::assert_none;
use consultation_booking::domain::{BookingRequest, ErrorField, FormField};
use consultation_booking::storage::KeyValueStore;
use consultation_booking::submission::{
    SubmissionState, NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE,
};
use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{fill_valid, spawn_app};

#[tokio::test]
async fn a_successful_booking_sends_the_full_request_and_clears_the_slot() {
    let app = spawn_app().await;
    app.seed_selection(r#"["gpt-4-turbo","claude-3"]"#);
    app.store().set("theme", "dark").unwrap();

    Mock::given(path("/api/book"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Booking saved!"})))
        .expect(1)
        .mount(&app.booking_server)
        .await;

    let mut form = app.mounted_form();
    fill_valid(&mut form);
    let state = form.submit(&app.booking_client).await;

    assert_eq!(state, SubmissionState::Succeeded);
    assert_eq!(form.status().message(), Some(SUCCESS_MESSAGE));
    assert_eq!(
        app.received_bookings().await,
        vec![json!({
            "name": "Ursula Le Guin",
            "email": "ursula@example.com",
            "business": "Earthsea Ltd",
            "message": "We want to automate our support inbox.",
            "selected_models": ["gpt-4-turbo", "claude-3"],
        })]
    );
    assert_eq!(
        *form.request(),
        BookingRequest {
            selected_options: vec!["gpt-4-turbo".into(), "claude-3".into()],
            ..Default::default()
        }
    );
    assert_none!(app.stored_selection());
    assert_eq!(app.store().get("theme").unwrap().as_deref(), Some("dark"));
}

#[tokio::test]
async fn a_rejected_booking_keeps_the_fields_and_the_slot() {
    let app = spawn_app().await;
    app.seed_selection(r#"["gpt-4-turbo"]"#);

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"detail": "You already booked a consultation."})),
        )
        .expect(1)
        .mount(&app.booking_server)
        .await;

    let mut form = app.mounted_form();
    fill_valid(&mut form);
    let before = form.request().clone();
    let state = form.submit(&app.booking_client).await;

    assert_eq!(state, SubmissionState::Failed);
    assert_eq!(
        form.status().message(),
        Some("You already booked a consultation.")
    );
    assert_eq!(*form.request(), before);
    assert_eq!(app.stored_selection().as_deref(), Some(r#"["gpt-4-turbo"]"#));
}

#[tokio::test]
async fn a_server_that_never_answers_is_a_network_error() {
    let app = spawn_app().await;
    app.seed_selection(r#"["gpt-4-turbo"]"#);

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(180)),
        )
        .expect(1)
        .mount(&app.booking_server)
        .await;

    let mut form = app.mounted_form();
    fill_valid(&mut form);
    let before = form.request().clone();
    let state = form.submit(&app.booking_client).await;

    assert_eq!(state, SubmissionState::Failed);
    assert_eq!(form.status().message(), Some(NETWORK_ERROR_MESSAGE));
    assert_eq!(*form.request(), before);
    assert!(app.stored_selection().is_some());
}

#[tokio::test]
async fn a_success_without_a_json_body_is_a_network_error() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&app.booking_server)
        .await;

    let mut form = app.mounted_form();
    fill_valid(&mut form);
    let state = form.submit(&app.booking_client).await;

    assert_eq!(state, SubmissionState::Failed);
    assert_eq!(form.status().message(), Some(NETWORK_ERROR_MESSAGE));
    assert_eq!(form.request().name, "Ursula Le Guin");
}

#[tokio::test]
async fn an_invalid_form_never_reaches_the_server() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&app.booking_server)
        .await;

    let mut form = app.mounted_form();
    form.on_field_change(FormField::Name, "J");
    form.on_field_change(FormField::Email, "bad");
    form.on_field_change(FormField::Message, "short");
    let state = form.submit(&app.booking_client).await;

    assert_eq!(state, SubmissionState::Idle);
    assert_eq!(form.errors().len(), 3);
    assert!(form.errors().contains(ErrorField::Email));
}

#[tokio::test]
async fn a_malformed_slot_still_allows_a_booking() {
    let app = spawn_app().await;
    app.seed_selection("definitely not json");

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&app.booking_server)
        .await;

    let mut form = app.mounted_form();
    assert!(form.request().selected_options.is_empty());
    fill_valid(&mut form);
    let state = form.submit(&app.booking_client).await;

    assert_eq!(state, SubmissionState::Succeeded);
    assert_eq!(app.received_bookings().await[0]["selected_models"], json!([]));
}

#[tokio::test]
async fn a_booking_without_any_stored_selection_succeeds() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&app.booking_server)
        .await;

    let mut form = app.mounted_form();
    fill_valid(&mut form);

    assert_eq!(
        form.submit(&app.booking_client).await,
        SubmissionState::Succeeded
    );
    assert!(!app.store_path.exists());
}
