//! The RouteGuide tour: the four demos bound to one connection, one console and one dataset.
use crate::{
    BoxError, Console, DemoError, RouteGuideConnection, Tour,
    demo::{bidi, client_stream, server_stream, unary},
};
use http_body::Body as HttpBody;
use rand::Rng;
use std::path::PathBuf;

/// The four demos run against one connection.
///
/// The dataset at `db_path` is read by the client streaming demo only, and `rng` plans its route.
pub struct RouteGuideTour<'a, S, R> {
    connection: &'a RouteGuideConnection<S>,
    console: &'a dyn Console,
    db_path: PathBuf,
    rng: R,
}

impl<'a, S, R> RouteGuideTour<'a, S, R> {
    /// Binds the demos to a shared connection and console.
    pub fn new(
        connection: &'a RouteGuideConnection<S>,
        console: &'a dyn Console,
        db_path: impl Into<PathBuf>,
        rng: R,
    ) -> Self {
        Self {
            connection,
            console,
            db_path: db_path.into(),
            rng,
        }
    }
}

impl<S, R> Tour for RouteGuideTour<'_, S, R>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
    R: Rng,
{
    async fn unary(&mut self) -> Result<(), DemoError> {
        unary::run(self.connection, self.console).await?;
        Ok(())
    }

    async fn server_stream(&mut self) -> Result<(), DemoError> {
        server_stream::run(self.connection, self.console).await?;
        Ok(())
    }

    async fn client_stream(&mut self) -> Result<(), DemoError> {
        client_stream::run(self.connection, self.console, &self.db_path, &mut self.rng).await?;
        Ok(())
    }

    async fn bidi(&mut self) -> Result<(), DemoError> {
        bidi::run(self.connection, self.console).await?;
        Ok(())
    }
}
