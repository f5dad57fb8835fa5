//! # RouteGuide Proto
//!
//! Generated message types and gRPC stubs for the `routeguide.RouteGuide` service.
//!
//! The client half is what the tour talks to; the server half exists so tests can
//! run a scripted RouteGuide in-process without opening a socket.

pub mod pb {
    include!(concat!(env!("OUT_DIR"), "/routeguide.rs"));
}

pub use pb::route_guide_client::RouteGuideClient;
pub use pb::route_guide_server::{RouteGuide, RouteGuideServer};
pub use pb::{Feature, Point, Rectangle, RouteNote, RouteSummary};
