//! # Feature Dataset
//!
//! Loads the feature database the client-streaming demo samples its route from.
//!
//! The file is a JSON array of records shaped like:
//!
//! ```json
//! [{ "name": "Patriots Path, Mendham, NJ 07945, USA",
//!    "location": { "latitude": 407838351, "longitude": -746143763 } }]
//! ```
use routeguide_proto::{Feature, Point};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Record {
    location: Location,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Location {
    latitude: i32,
    longitude: i32,
}

impl From<Record> for Feature {
    fn from(record: Record) -> Self {
        Feature {
            name: record.name,
            location: Some(Point {
                latitude: record.location.latitude,
                longitude: record.location.longitude,
            }),
        }
    }
}

/// Errors that can occur while loading the feature dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read dataset '{}': '{source}'", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed dataset '{}': '{source}'", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the dataset at `path`.
pub fn load(path: &Path) -> Result<Vec<Feature>, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let features = parse(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = features.len(), "loaded feature dataset");

    Ok(features)
}

/// Parses raw dataset bytes, keeping the order of the records.
pub fn parse(bytes: &[u8]) -> Result<Vec<Feature>, serde_json::Error> {
    let records: Vec<Record> = serde_json::from_slice(bytes)?;
    Ok(records.into_iter().map(Feature::from).collect())
}
