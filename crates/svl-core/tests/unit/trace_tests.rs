//! Unit tests for registry diagnostics

use std::rc::Rc;
use svl_core::{
    DEFAULT_TRACE_PREFIX, Hook, MemorySink, Registry, Slot, StderrSink, TraceEvent, TraceSink,
};

#[test]
fn test_registration_events() {
    let sink = MemorySink::new();
    let registry = Registry::with_sink(sink.clone());

    registry.provide(Slot::<String>::new(), "value".to_string());
    registry.provide_lazy(Slot::<u64>::new(), |_| Ok(1));
    registry.provide_hook(Hook::<bool>::new(), Vec::new());

    let events = sink.events();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0],
        TraceEvent::ValueProvided {
            type_name: "alloc::string::String",
            value_type: "alloc::string::String",
        }
    );
    assert_eq!(events[1], TraceEvent::LazyProvided { type_name: "u64" });
    assert_eq!(
        events[2],
        TraceEvent::HooksProvided {
            type_name: "bool",
            listeners: 0,
        }
    );
}

#[test]
fn test_event_lines() {
    let event = TraceEvent::SlotConfigured {
        type_name: "my_app::Db",
        value_type: "alloc::rc::Rc<my_app::Db>",
    };
    assert_eq!(
        event.to_string(),
        "[slot: my_app::Db] configured service of type alloc::rc::Rc<my_app::Db>"
    );
    assert_eq!(event.kind(), "slot_configured");
    assert_eq!(event.type_name(), "my_app::Db");

    let event = TraceEvent::LazyProvided { type_name: "u8" };
    assert_eq!(event.to_string(), "[slot: u8] inject lazy provider");
}

#[test]
fn test_failed_resolution_is_not_traced() {
    let sink = MemorySink::new();
    let registry = Registry::with_sink(sink.clone());
    let slot = Slot::<u8>::new();

    registry.provide_lazy(slot, |_| Err(svl_core::Error::construction("nope")));
    sink.clear();

    assert!(registry.resolve(slot).is_err());
    assert!(registry.resolve(Slot::<u16>::new()).is_err());
    assert!(sink.is_empty());
}

#[test]
fn test_memory_sink_clones_share_buffer() {
    let sink = MemorySink::new();
    let clone = sink.clone();

    clone.record(&TraceEvent::LazyProvided { type_name: "u8" });

    assert_eq!(sink.len(), 1);
    sink.clear();
    assert!(clone.is_empty());
}

#[test]
fn test_shared_sink_through_rc() {
    let sink = Rc::new(MemorySink::new());
    let registry = Registry::with_sink(Rc::clone(&sink));

    registry.provide(Slot::<u8>::new(), 1);

    assert_eq!(sink.len(), 1);
}

#[test]
fn test_stderr_sink_prefix() {
    assert_eq!(StderrSink::default().prefix(), DEFAULT_TRACE_PREFIX);
    assert_eq!(StderrSink::new("[app] ").prefix(), "[app] ");

    // Writing must not panic even without a reader.
    StderrSink::default().record(&TraceEvent::LazyProvided { type_name: "u8" });
}
