//! Unary demo: `GetFeature` against a point that has a feature and one that does not.
//!
//! Both calls are in flight at the same time. The demo completes once both have answered, or
//! as soon as either fails, without waiting for the other.
use super::DemoError;
use crate::{BoxError, Console, RouteGuideConnection, report};
use http_body::Body as HttpBody;
use routeguide_proto::{Feature, Point};

/// A point known to carry a feature.
pub const KNOWN_FEATURE: Point = Point {
    latitude: 409146138,
    longitude: -746188906,
};

/// A point known to carry nothing.
pub const EMPTY_SPOT: Point = Point {
    latitude: 0,
    longitude: 0,
};

/// Looks up [`KNOWN_FEATURE`] and [`EMPTY_SPOT`] concurrently.
///
/// Returns both features in that order.
pub async fn run<S>(
    connection: &RouteGuideConnection<S>,
    console: &dyn Console,
) -> Result<[Feature; 2], DemoError>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    console.section("GetFeature");

    let check = |point: Point| async move {
        tracing::debug!(?point, "requesting feature");
        let feature = connection.get_feature(point.clone()).await?;
        // Fall back to the requested point if the server left the location out.
        let at = feature.location.as_ref().unwrap_or(&point);
        console.line(&report::feature_line(&feature, at));
        Ok::<_, DemoError>(feature)
    };

    let (known, empty) = tokio::try_join!(check(KNOWN_FEATURE), check(EMPTY_SPOT))?;

    Ok([known, empty])
}
