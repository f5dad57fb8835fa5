//! Client streaming demo: `RecordRoute` with a randomly sampled, paced route.
//!
//! The demo loads the feature dataset, samples [`ROUTE_LENGTH`] waypoints from it uniformly
//! with replacement, then sends the waypoints one at a time. After each send it sleeps for a
//! random pause to simulate travelling to the next point. Once the last pause is over the
//! outbound half is closed and the server's [`RouteSummary`] is awaited.
use super::DemoError;
use crate::{BoxError, Console, RouteGuideConnection, dataset, report};
use http_body::Body as HttpBody;
use rand::Rng;
use routeguide_proto::{Feature, Point, RouteSummary};
use std::{ops::RangeInclusive, path::Path, time::Duration};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// Number of points sent per route.
pub const ROUTE_LENGTH: usize = 10;

/// Bounds of the pause that follows every send, in milliseconds.
pub const PAUSE_MILLIS: RangeInclusive<u64> = 500..=1500;

/// A point on the planned route and the pause taken after reaching it.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub point: Point,
    pub pause: Duration,
}

/// What the client-streaming demo sent and what it got back.
#[derive(Debug, Clone)]
pub struct RouteReport {
    pub waypoints: Vec<Waypoint>,
    pub summary: RouteSummary,
}

/// Samples a route of [`ROUTE_LENGTH`] waypoints from `features`.
///
/// Points are drawn uniformly with replacement, so the same feature may be visited more than
/// once. Every waypoint carries a pause drawn uniformly from [`PAUSE_MILLIS`].
pub fn plan_route<R>(features: &[Feature], rng: &mut R) -> Result<Vec<Waypoint>, DemoError>
where
    R: Rng,
{
    if features.is_empty() {
        return Err(DemoError::EmptyDataset);
    }

    let waypoints = (0..ROUTE_LENGTH)
        .map(|_| {
            let feature = &features[rng.random_range(0..features.len())];
            Waypoint {
                point: feature.location.clone().unwrap_or_default(),
                pause: Duration::from_millis(rng.random_range(PAUSE_MILLIS)),
            }
        })
        .collect();

    Ok(waypoints)
}

/// Loads the dataset at `db_path`, plans a route and records it with the server.
///
/// Nothing is sent if the dataset cannot be loaded or is empty.
pub async fn run<S, R>(
    connection: &RouteGuideConnection<S>,
    console: &dyn Console,
    db_path: &Path,
    rng: &mut R,
) -> Result<RouteReport, DemoError>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
    R: Rng,
{
    console.section("RecordRoute");

    let features = dataset::load(db_path)?;
    let waypoints = plan_route(&features, rng)?;

    // A single slot keeps at most one point between us and the transport.
    let (tx, rx) = mpsc::channel(1);

    let send_points = async {
        for waypoint in &waypoints {
            console.line(&report::visiting_line(&waypoint.point));
            if tx.send(waypoint.point.clone()).await.is_err() {
                tracing::debug!("route stream closed by the transport");
                break;
            }
            tokio::time::sleep(waypoint.pause).await;
        }
        // Closing our half lets the server produce the summary.
        drop(tx);
        Ok::<_, DemoError>(())
    };

    let record = async {
        let summary = connection.record_route(ReceiverStream::new(rx)).await?;
        Ok::<_, DemoError>(summary)
    };

    let ((), summary) = tokio::try_join!(send_points, record)?;

    for line in report::summary_lines(&summary) {
        console.line(&line);
    }

    Ok(RouteReport { waypoints, summary })
}
