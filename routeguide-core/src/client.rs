//! # RouteGuide Connection
//!
//! This module implements the connection handle every demo talks through.
//!
//! A [`RouteGuideConnection`] is opened once (see [`RouteGuideConnection::connect`]) and then
//! lent out by shared reference. It exposes one method per RouteGuide RPC and hides the
//! `&mut self` requirement of the generated tonic client by cloning it per call, which is cheap
//! and lets several calls be in flight over the same channel at once.
//!
//! ## Example
//!
//! ```rust,no_run
//! use routeguide_core::RouteGuideConnection;
//! use routeguide_core::proto::Point;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let connection = RouteGuideConnection::connect("http://localhost:50051").await?;
//!
//! let feature = connection
//!     .get_feature(Point { latitude: 409146138, longitude: -746188906 })
//!     .await?;
//! # Ok(())
//! # }
//! ```
use crate::BoxError;
use futures_util::Stream;
use http_body::Body as HttpBody;
use routeguide_proto::{Feature, Point, Rectangle, RouteGuideClient, RouteNote, RouteSummary};
use tonic::{
    Status, Streaming,
    transport::{Channel, Endpoint},
};

/// Errors that can occur when connecting to a RouteGuide server.
#[derive(Debug, thiserror::Error)]
pub enum ClientConnectError {
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] tonic::transport::Error),
    #[error("Failed to connect to '{0}': {1}")]
    ConnectionFailed(String, #[source] tonic::transport::Error),
}

/// A client binding to one RouteGuide endpoint.
///
/// The generic parameter `S` is the underlying transport. It defaults to a plaintext
/// [`Channel`]; tests plug the generated server in directly.
#[derive(Debug, Clone)]
pub struct RouteGuideConnection<S = Channel> {
    client: RouteGuideClient<S>,
}

impl RouteGuideConnection<Channel> {
    /// Connects to a RouteGuide server over plaintext HTTP/2.
    ///
    /// # Arguments
    ///
    /// * `addr` - The server URI (e.g., `http://localhost:50051`).
    ///
    /// # Returns
    ///
    /// * `Ok(RouteGuideConnection)` - The connected handle.
    /// * `Err(ClientConnectError)` - If the URL is invalid or connection fails.
    pub async fn connect(addr: &str) -> Result<Self, ClientConnectError> {
        let endpoint = Endpoint::new(addr.to_string())
            .map_err(|e| ClientConnectError::InvalidUrl(addr.to_string(), e))?;

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| ClientConnectError::ConnectionFailed(addr.to_string(), e))?;

        tracing::debug!(%addr, "connected to RouteGuide server");

        Ok(Self::from_service(channel))
    }
}

impl<S> RouteGuideConnection<S>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Creates a connection from an existing Tonic service/channel.
    pub fn from_service(service: S) -> Self {
        Self {
            client: RouteGuideClient::new(service),
        }
    }

    /// Unary: obtains the feature at a given point.
    ///
    /// A feature with an empty name means there is nothing at that point.
    pub async fn get_feature(&self, point: Point) -> Result<Feature, Status> {
        let mut client = self.client.clone();
        let response = client.get_feature(point).await?;
        Ok(response.into_inner())
    }

    /// Server streaming: obtains every feature inside `rectangle`.
    ///
    /// The returned stream yields features as the server sends them.
    pub async fn list_features(&self, rectangle: Rectangle) -> Result<Streaming<Feature>, Status> {
        let mut client = self.client.clone();
        let response = client.list_features(rectangle).await?;
        Ok(response.into_inner())
    }

    /// Client streaming: sends the points of a traversed route and returns the server's summary.
    ///
    /// The outbound half is closed when `points` ends.
    pub async fn record_route(
        &self,
        points: impl Stream<Item = Point> + Send + 'static,
    ) -> Result<RouteSummary, Status> {
        let mut client = self.client.clone();
        let response = client.record_route(points).await?;
        Ok(response.into_inner())
    }

    /// Bidirectional streaming: exchanges route notes with the server.
    ///
    /// Outbound notes are taken from `notes` until it ends; inbound notes arrive on the
    /// returned stream independently of what has been sent.
    pub async fn route_chat(
        &self,
        notes: impl Stream<Item = RouteNote> + Send + 'static,
    ) -> Result<Streaming<RouteNote>, Status> {
        let mut client = self.client.clone();
        let response = client.route_chat(notes).await?;
        Ok(response.into_inner())
    }
}
