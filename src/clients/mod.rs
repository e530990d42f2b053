pub mod predictor;

pub use predictor::PredictorClient;
