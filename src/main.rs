use std::process::ExitCode;

use anyhow::Context;
use consultation_booking::configuration::get_configuration;
use consultation_booking::form::BookingForm;
use consultation_booking::storage::SelectionBridge;
use consultation_booking::submission::SubmissionState;
use consultation_booking::telemetry::init_subscriber;
use consultation_booking::terminal::{run_form, status_printer, Terminal};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let configuration = get_configuration().context("Failed to read configuration.")?;
    init_subscriber(
        "consultation_booking".into(),
        "info".into(),
        std::io::stderr,
        &configuration.telemetry,
    )?;

    let booking_client = configuration
        .booking_api
        .client()
        .context("Failed to build the booking api client.")?;
    let bridge = SelectionBridge::new(configuration.storage.store());
    let mut form = BookingForm::new(bridge).with_change_hook(status_printer(std::io::stdout()));
    form.on_mount();

    let mut terminal = Terminal::new(std::io::stdin().lock(), std::io::stdout());
    let outcome = run_form(&mut form, &booking_client, &mut terminal).await?;

    Ok(match outcome {
        SubmissionState::Succeeded => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
