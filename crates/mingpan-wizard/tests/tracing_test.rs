//! Span fields emitted by wizard actions.

mod common;

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use mingpan_test_support::{RecordingGateway, fixtures};
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing::span::{Id, Record};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Collects every value later recorded into a span's `session_id` field.
#[derive(Clone, Default)]
struct SessionIdRecorder(Arc<Mutex<Vec<String>>>);

struct SessionIdVisitor(Option<String>);

impl Visit for SessionIdVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "session_id" {
            self.0 = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "session_id" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for SessionIdRecorder {
    fn on_record(&self, _span: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
        let mut visitor = SessionIdVisitor(None);
        values.record(&mut visitor);
        if let Some(session_id) = visitor.0 {
            self.0.lock().unwrap().push(session_id);
        }
    }
}

#[tokio::test]
async fn test_result_span_records_session_id_once_resolved() {
    // Arrange
    let recorder = SessionIdRecorder::default();
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::registry().with(recorder.clone()),
    );
    let gateway = Arc::new(RecordingGateway::new(vec![
        Ok(fixtures::chart_response_json("sess-traced", 1)),
        Ok(fixtures::result_json(1, 1)),
    ]));
    let (controller, view) = common::build_controller(gateway);
    common::fill_birth_form(&view);
    controller.submit_birth_data().await.unwrap();

    // Act
    controller.request_result().await.unwrap();

    // Assert
    assert_eq!(*recorder.0.lock().unwrap(), vec!["sess-traced".to_owned()]);
}

#[tokio::test]
async fn test_result_span_leaves_session_id_empty_without_session() {
    let recorder = SessionIdRecorder::default();
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::registry().with(recorder.clone()),
    );
    let (controller, _view) = common::build_controller(Arc::new(RecordingGateway::new(vec![])));

    let _ = controller.request_result().await;

    assert!(recorder.0.lock().unwrap().is_empty());
}
