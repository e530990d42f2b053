pub mod recommendations;
pub mod scoring;
pub mod statistics;
pub mod validation;

use crate::clients::predictor::PredictorClient;
use crate::config::Config;

/// Shared application state: configuration plus the remote predictor
/// client. No mutable state lives here; every assessment is computed
/// fresh from its request.
pub struct AppState {
    pub config: Config,
    pub predictor: PredictorClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let predictor = PredictorClient::new(&config.backend_url)?;
        Ok(Self { config, predictor })
    }
}
