pub mod configuration;
pub mod connectors;
pub mod forms;
mod helpers;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod startup;
pub mod telemetry;
