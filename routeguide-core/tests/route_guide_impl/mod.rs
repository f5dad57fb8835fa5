#![allow(dead_code)]

use futures_util::Stream;
use routeguide_core::{Console, RouteGuideConnection};
use routeguide_proto::{
    Feature, Point, Rectangle, RouteGuide, RouteGuideServer, RouteNote, RouteSummary,
};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_stream::{StreamExt, wrappers::ReceiverStream};
use tonic::{Request, Response, Status, Streaming};

pub const DB_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/route_guide_db.json");

type ResponseStream<T> = Pin<Box<dyn Stream<Item = Result<T, Status>> + Send>>;

/// How the scripted server answers.
#[derive(Default)]
pub struct Script {
    /// Known features. `GetFeature` answers with the one at the requested point (or an unnamed
    /// feature), `ListFeatures` streams all of them.
    pub features: Vec<Feature>,
    /// `GetFeature` on this point fails with `UNAVAILABLE`.
    pub failing_point: Option<Point>,
    /// `GetFeature` on this point never answers.
    pub hanging_point: Option<Point>,
    /// `GetFeature` on a listed point answers only after the paired delay.
    pub lookup_delays: Vec<(Point, Duration)>,
    /// `ListFeatures` breaks with `DATA_LOSS` after this many features.
    pub list_failure_after: Option<usize>,
    /// Returned by `RecordRoute`, with `point_count` replaced by the number of points received.
    pub summary: RouteSummary,
    /// When set, `RouteChat` answers with these notes without reading the client's notes.
    /// Otherwise it echoes every note back.
    pub chat_replies: Option<Vec<RouteNote>>,
    /// `RouteChat` reads every note but never replies nor ends its half of the stream.
    pub chat_held_open: bool,
}

/// What the scripted server observed.
#[derive(Default)]
pub struct Journal {
    pub record_route_calls: usize,
    pub points: Vec<(Point, Instant)>,
    pub notes: Vec<RouteNote>,
}

pub struct ScriptedRouteGuide {
    script: Script,
    journal: Arc<Mutex<Journal>>,
}

/// Builds a connection whose transport is the scripted server itself, no socket involved.
pub fn connect(
    script: Script,
) -> (
    RouteGuideConnection<RouteGuideServer<ScriptedRouteGuide>>,
    Arc<Mutex<Journal>>,
) {
    let journal = Arc::new(Mutex::new(Journal::default()));
    let service = ScriptedRouteGuide {
        script,
        journal: journal.clone(),
    };

    (
        RouteGuideConnection::from_service(RouteGuideServer::new(service)),
        journal,
    )
}

pub fn feature(name: &str, latitude: i32, longitude: i32) -> Feature {
    Feature {
        name: name.to_string(),
        location: Some(Point {
            latitude,
            longitude,
        }),
    }
}

pub fn note(message: &str, latitude: i32, longitude: i32) -> RouteNote {
    RouteNote {
        location: Some(Point {
            latitude,
            longitude,
        }),
        message: message.to_string(),
    }
}

#[tonic::async_trait]
impl RouteGuide for ScriptedRouteGuide {
    type ListFeaturesStream = ResponseStream<Feature>;
    type RouteChatStream = ResponseStream<RouteNote>;

    async fn get_feature(&self, request: Request<Point>) -> Result<Response<Feature>, Status> {
        let point = request.into_inner();

        if self.script.hanging_point.as_ref() == Some(&point) {
            std::future::pending::<()>().await;
        }

        if let Some((_, delay)) = self.script.lookup_delays.iter().find(|(p, _)| *p == point) {
            tokio::time::sleep(*delay).await;
        }

        if self.script.failing_point.as_ref() == Some(&point) {
            return Err(Status::unavailable("feature lookup failed"));
        }

        let feature = self
            .script
            .features
            .iter()
            .find(|f| f.location.as_ref() == Some(&point))
            .cloned()
            .unwrap_or(Feature {
                name: String::new(),
                location: Some(point),
            });

        Ok(Response::new(feature))
    }

    async fn list_features(
        &self,
        _request: Request<Rectangle>,
    ) -> Result<Response<Self::ListFeaturesStream>, Status> {
        let mut items: Vec<Result<Feature, Status>> =
            self.script.features.iter().cloned().map(Ok).collect();

        if let Some(after) = self.script.list_failure_after {
            items.insert(after, Err(Status::data_loss("feature stream broken")));
        }

        Ok(Response::new(Box::pin(tokio_stream::iter(items))))
    }

    async fn record_route(
        &self,
        request: Request<Streaming<Point>>,
    ) -> Result<Response<RouteSummary>, Status> {
        self.journal.lock().unwrap().record_route_calls += 1;

        let mut points = request.into_inner();
        let mut point_count = 0;

        while let Some(point) = points.message().await? {
            self.journal
                .lock()
                .unwrap()
                .points
                .push((point, Instant::now()));
            point_count += 1;
        }

        Ok(Response::new(RouteSummary {
            point_count,
            ..self.script.summary.clone()
        }))
    }

    async fn route_chat(
        &self,
        request: Request<Streaming<RouteNote>>,
    ) -> Result<Response<Self::RouteChatStream>, Status> {
        if let Some(replies) = &self.script.chat_replies {
            let replies: Vec<Result<RouteNote, Status>> =
                replies.iter().cloned().map(Ok).collect();
            return Ok(Response::new(Box::pin(tokio_stream::iter(replies))));
        }

        let mut in_stream = request.into_inner();
        let journal = self.journal.clone();
        let (tx, rx) = mpsc::channel(4);

        if self.script.chat_held_open {
            tokio::spawn(async move {
                while let Some(Ok(note)) = in_stream.next().await {
                    journal.lock().unwrap().notes.push(note);
                }
                // Keeping the sender alive keeps the response stream open.
                let _tx = tx;
                std::future::pending::<()>().await;
            });
            return Ok(Response::new(Box::pin(ReceiverStream::new(rx))));
        }

        tokio::spawn(async move {
            while let Some(result) = in_stream.next().await {
                match result {
                    Ok(note) => {
                        journal.lock().unwrap().notes.push(note.clone());
                        if tx.send(Ok(note)).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(Err(e)).await;
                        break;
                    }
                }
            }
        });

        Ok(Response::new(Box::pin(ReceiverStream::new(rx))))
    }
}

/// Keeps every reported line so tests can assert on the output.
#[derive(Default)]
pub struct RecordingConsole {
    lines: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn count_starting_with(&self, prefix: &str) -> usize {
        self.lines()
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }

    pub fn position(&self, line: &str) -> Option<usize> {
        self.lines().iter().position(|l| l == line)
    }
}

impl Console for RecordingConsole {
    fn line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
