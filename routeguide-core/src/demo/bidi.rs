//! Bidirectional streaming demo: `RouteChat`.
//!
//! Two independent halves share the duplex stream and nothing else:
//!
//! * the producer writes [`outbound_notes`] in order, then closes the outbound half;
//! * the consumer prints every inbound note until the server ends the stream.
//!
//! Inbound notes are not assumed to answer outbound ones. The server ending its half is the
//! only thing that completes the demo.
use super::DemoError;
use crate::{BoxError, Console, RouteGuideConnection, report};
use http_body::Body as HttpBody;
use routeguide_proto::{Point, RouteNote};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

fn note(message: &str, latitude: i32, longitude: i32) -> RouteNote {
    RouteNote {
        location: Some(Point {
            latitude,
            longitude,
        }),
        message: message.to_string(),
    }
}

/// The notes sent during the chat. Two of them share `(0, 0)` on purpose, so a server
/// that replays notes left at the same location has something to replay.
pub fn outbound_notes() -> [RouteNote; 4] {
    [
        note("First message", 0, 0),
        note("Second message", 0, 1),
        note("Third message", 1, 0),
        note("Fourth message", 0, 0),
    ]
}

/// Runs the chat and returns how many notes the server sent.
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
    console.section("RouteChat");

    let notes = outbound_notes();
    // Room for every note, so the producer never waits on the consumer.
    let (tx, rx) = mpsc::channel(notes.len());

    let send_notes = async move {
        for note in notes {
            console.line(&report::sending_line(&note));
            if tx.send(note).await.is_err() {
                tracing::debug!("chat stream closed before all notes were sent");
                break;
            }
        }
    };

    let receive_notes = async {
        let mut inbound = connection.route_chat(ReceiverStream::new(rx)).await?;
        let mut received = 0;

        while let Some(note) = inbound.message().await? {
            console.line(&report::received_line(&note));
            received += 1;
        }

        tracing::debug!(received, "chat stream ended by the server");

        Ok::<_, DemoError>(received)
    };

    let ((), received) = tokio::join!(send_notes, receive_notes);

    received
}
