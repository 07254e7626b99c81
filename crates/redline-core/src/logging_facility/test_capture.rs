//! In-memory event capture for asserting on engine logging in tests
//!
//! One capture is installed per test binary and shared by all of its tests,
//! so assertions should select events by an `op` name unique to the test.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::redline_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMPONENT, FIELD_ERR_CODE, FIELD_EVENT,
    FIELD_OP,
};

/// One recorded event: its level, target and every field rendered as text
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    /// Lifecycle marker: `start`, `end` or `end_error`
    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }
}

struct TextFields<'a>(&'a mut BTreeMap<String, String>);

impl Visit for TextFields<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    buffer: Buffer,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut TextFields(&mut fields));

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields,
        };
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(captured);
        }
    }
}

/// Read handle over the shared capture buffer
#[derive(Clone)]
pub struct TestCapture {
    buffer: Buffer,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.buffer
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events for one operation, in emission order
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op))
            .collect()
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// # Panics
    ///
    /// Panics unless an event with this op and lifecycle marker was captured.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events_for_op(op);
        assert!(
            events.iter().any(|e| e.event() == Some(event)),
            "no '{}' event for op '{}' (saw {:?})",
            event,
            op,
            events.iter().map(|e| e.event()).collect::<Vec<_>>()
        );
    }

    /// # Panics
    ///
    /// Panics unless the op logged `start` followed by `end`.
    pub fn assert_op_succeeded(&self, op: &str) {
        let markers: Vec<String> = self
            .events_for_op(op)
            .iter()
            .filter_map(|e| e.event().map(str::to_string))
            .collect();
        assert_eq!(markers, vec![EVENT_START, EVENT_END], "op '{}'", op);
    }

    /// # Panics
    ///
    /// Panics unless the op logged `start` followed by `end_error` carrying
    /// the given error code.
    pub fn assert_op_failed(&self, op: &str, err_code: &str) {
        let events = self.events_for_op(op);
        let markers: Vec<&str> = events.iter().filter_map(|e| e.event()).collect();
        assert_eq!(markers, vec![EVENT_START, EVENT_END_ERROR], "op '{}'", op);
        assert_eq!(events[1].field(FIELD_ERR_CODE), Some(err_code), "op '{}'", op);
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture subscriber on first use and return its handle
///
/// ```
/// use redline_core::log_op_start;
/// use redline_core::logging_facility::test_capture::init_test_capture;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let buffer = Buffer::default();
            tracing_subscriber::registry()
                .with(CaptureLayer {
                    buffer: buffer.clone(),
                })
                .init();
            TestCapture { buffer }
        })
        .clone()
}
