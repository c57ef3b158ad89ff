use config::{Config, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::prelude::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub http_port: u16,

    pub otlp_host: String,
    pub otlp_port: u16,
    pub use_telemetry: bool,
}

impl Settings {
    fn new() -> Result<Settings> {
        let conf = Config::builder()
            .set_default("http_port", 8000)?
            .set_default("otlp_host", "localhost")?
            .set_default("otlp_port", 4317)?
            .set_default("use_telemetry", false)?
            .add_source(Environment::default())
            .build()?;
        Ok(conf.try_deserialize()?)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("failed to load settings");
}
