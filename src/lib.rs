pub mod booking_client;
pub mod configuration;
pub mod domain;
pub mod form;
pub mod storage;
pub mod submission;
pub mod telemetry;
pub mod terminal;
mod utils;
