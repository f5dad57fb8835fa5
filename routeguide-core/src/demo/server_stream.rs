//! Server streaming demo: `ListFeatures` over a fixed rectangle.
use super::DemoError;
use crate::{BoxError, Console, RouteGuideConnection, report};
use http_body::Body as HttpBody;
use routeguide_proto::{Point, Rectangle};

/// The area searched for features: 40..42 N, 75..73 W.
pub fn search_area() -> Rectangle {
    Rectangle {
        lo: Some(Point {
            latitude: 400000000,
            longitude: -750000000,
        }),
        hi: Some(Point {
            latitude: 420000000,
            longitude: -730000000,
        }),
    }
}

/// Lists the features inside [`search_area`], printing each one as it arrives.
///
/// Returns how many features the server sent before ending the stream. A status received
/// mid-stream aborts the demo with that status.
pub async fn run<S>(
    connection: &RouteGuideConnection<S>,
    console: &dyn Console,
) -> Result<usize, DemoError>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    console.section("ListFeatures");

    let rectangle = search_area();
    console.line(&report::search_line(&rectangle));

    let mut features = connection.list_features(rectangle).await?;
    let mut received = 0;

    while let Some(feature) = features.message().await? {
        let at = feature.location.clone().unwrap_or_default();
        console.line(&report::feature_line(&feature, &at));
        received += 1;
    }

    tracing::debug!(received, "feature stream ended");

    Ok(received)
}
