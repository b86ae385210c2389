#![cfg(feature = "tracing")]
//! Events emitted while a chain leaves or stays off the good path.
//!
//! - `debug`: default-value short-circuit, discarded or captured failure,
//!   caught panic
//! - `trace`: `Nothing` or a bad path passed through

use monadex::{Cause, Either, Maybe};
use rstest::rstest;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RecordedEvent {
    level: Level,
    message: String,
}

#[derive(Clone, Default)]
struct EventRecorder {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for EventRecorder {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        let mut visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut visitor);
        self.events.lock().unwrap().push(RecordedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
        });
    }
}

fn record_events<R>(action: impl FnOnce() -> R) -> (R, Vec<RecordedEvent>) {
    let recorder = EventRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, action);
    let events = recorder.events.lock().unwrap().clone();
    (result, events)
}

fn event(level: Level, message: &str) -> RecordedEvent {
    RecordedEvent {
        level,
        message: message.to_string(),
    }
}

// =============================================================================
// Maybe
// =============================================================================

#[rstest]
fn maybe_default_value_emits_debug_event() {
    let (result, events) = record_events(|| Maybe::wrap(0).bind(|n| n + 1));

    assert_eq!(result, Maybe::Nothing);
    assert_eq!(
        events,
        vec![event(
            Level::DEBUG,
            "Maybe bind short-circuited on a default value"
        )]
    );
}

#[rstest]
fn maybe_nothing_emits_trace_event() {
    let (_, events) = record_events(|| Maybe::<i32>::Nothing.bind(|n| n + 1));

    assert_eq!(
        events,
        vec![event(Level::TRACE, "Maybe bind passed Nothing through")]
    );
}

#[rstest]
fn maybe_discarded_failure_emits_debug_event() {
    let (result, events) = record_events(|| Maybe::wrap("x").try_bind(|text| text.parse::<i32>()));

    assert_eq!(result, Maybe::Nothing);
    assert_eq!(
        events,
        vec![event(Level::DEBUG, "Maybe::try_bind discarded a failure")]
    );
}

#[rstest]
fn maybe_caught_panic_emits_debug_event() {
    let (result, events) =
        record_events(|| Maybe::wrap(1).bind_catching(|_| -> i32 { panic!("boom") }));

    assert_eq!(result, Maybe::Nothing);
    assert_eq!(
        events,
        vec![event(Level::DEBUG, "Maybe::bind_catching discarded a panic")]
    );
}

#[rstest]
fn maybe_good_path_is_silent() {
    let (result, events) = record_events(|| Maybe::wrap(2).bind(|n| n * 3));

    assert_eq!(result, Maybe::Actual(6));
    assert!(events.is_empty());
}

// =============================================================================
// Either
// =============================================================================

#[rstest]
fn either_default_value_emits_debug_event() {
    let (result, events) = record_events(|| Either::<i32>::wrap(0).bind(|n| n + 1));

    assert!(result.is_bad_path());
    assert_eq!(
        events,
        vec![event(
            Level::DEBUG,
            "Either bind short-circuited on a default value"
        )]
    );
}

#[rstest]
fn either_bad_path_emits_trace_event() {
    let (_, events) =
        record_events(|| Either::<i32>::fail(Cause::msg("declined")).bind(|n| n + 1));

    assert_eq!(
        events,
        vec![event(Level::TRACE, "Either bind passed the cause through")]
    );
}

#[rstest]
fn either_captured_failure_emits_debug_event() {
    let (result, events) =
        record_events(|| Either::<&str>::wrap("x").try_bind(|text| text.parse::<i32>()));

    assert!(result.is_bad_path());
    assert_eq!(
        events,
        vec![event(Level::DEBUG, "Either::try_bind captured a failure")]
    );
}

#[rstest]
fn either_caught_panic_emits_debug_event() {
    let (result, events) = record_events(|| {
        Either::<i32>::wrap(1).bind_catching(|_| -> i32 { panic!("boom") })
    });

    assert!(result.is_bad_path());
    assert_eq!(
        events,
        vec![event(Level::DEBUG, "Either::bind_catching captured a panic")]
    );
}

#[rstest]
fn either_poisoned_chain_traces_every_later_bind() {
    let (_, events) = record_events(|| {
        Either::<i32>::wrap(0)
            .bind(|n| n + 1)
            .bind(|n| n + 1)
            .bind(|n| n + 1)
    });

    let levels: Vec<Level> = events.iter().map(|recorded| recorded.level).collect();
    assert_eq!(levels, vec![Level::DEBUG, Level::TRACE, Level::TRACE]);
}
