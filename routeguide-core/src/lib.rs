//! # RouteGuide Core
//!
//! `routeguide-core` drives a tour of the `routeguide.RouteGuide` gRPC service that exercises
//! every call shape gRPC offers, one after the other, over a single connection.
//!
//! ## Key Components
//!
//! * **[`RouteGuideConnection`]:** The connection handle. Opened once and shared by reference
//!   across every demo; each call clones the underlying tonic client, which multiplexes over
//!   the same channel.
//! * **[`demo`]:** One module per call shape: [`demo::unary`], [`demo::server_stream`],
//!   [`demo::client_stream`] and [`demo::bidi`].
//! * **[`Sequencer`]:** Runs the four demos strictly in order and halts on the first failure.
//! * **[`Console`]:** The line-oriented sink every demo reports progress to.
//!
//! ## Re-exports
//!
//! This crate re-exports the generated RouteGuide types as [`proto`] and `tonic` to ensure that
//! consumers use compatible versions of these underlying dependencies.
pub mod client;
pub mod console;
pub mod dataset;
pub mod demo;
pub mod report;
pub mod sequencer;
pub mod tour;

pub use client::{ClientConnectError, RouteGuideConnection};
pub use console::Console;
pub use demo::DemoError;
pub use sequencer::{SequenceError, Sequencer, Stage, Tour};
pub use tour::RouteGuideTour;

// Re-exports
pub use routeguide_proto as proto;
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
