//! # Demos
//!
//! One module per gRPC call shape. Every demo reports its progress to a [`crate::Console`]
//! as results arrive and returns what it observed, so callers can assert on more than the
//! printed lines.
//!
//! * [`unary`]: two concurrent `GetFeature` calls.
//! * [`server_stream`]: one `ListFeatures` call consumed until the server ends the stream.
//! * [`client_stream`]: a paced `RecordRoute` upload followed by one summary.
//! * [`bidi`]: a `RouteChat` exchange where sending and receiving run independently.
pub mod bidi;
pub mod client_stream;
pub mod server_stream;
pub mod unary;

use crate::dataset::LoadError;

/// Errors that end a demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("RouteGuide call failed: '{0}'")]
    Call(#[from] tonic::Status),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Cannot plan a route: the feature dataset is empty")]
    EmptyDataset,
}
