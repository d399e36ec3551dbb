use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::info;

use crate::model::errors::ModelError;
use crate::model::nutrients::Product;

pub mod config;
pub mod dataset;

pub use config::{load_profiles, load_weights};
use dataset::parse_products;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value at row {row}, field {field}: {value}")]
    InvalidValue {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub fn load_dataset(path: &Path) -> Result<Vec<Product>, InputError> {
    let reader = open_maybe_gz(path)?;
    let products = parse_products(reader)?;
    info!(path = %path.display(), n_products = products.len(), "dataset loaded");
    Ok(products)
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
