//! Google Imagen image generation over the REST `:predict` endpoint.

mod client;
mod dto;

pub use client::ImagenClient;
pub use dto::{PredictInstance, PredictParameters, PredictRequest, PredictResponse, Prediction};
