pub mod conf;
pub mod errors;
pub mod server;
pub mod services;
pub mod state;
pub mod telemetry;
