//! Registry bootstrap tests

use svl_core::{Error, Slot, TraceSink};
use svl_infrastructure::bootstrap::{build_registry, registry_options, trace_sink};
use svl_infrastructure::config::{RegistryConfig, TraceConfig, TraceSinkKind};

#[test]
fn test_default_config_builds_plain_registry() {
    let registry = build_registry(&RegistryConfig::default());
    assert!(!registry.options().detect_cycles);
    assert_eq!(registry.slot_count(), 0);
}

#[test]
fn test_detect_cycles_is_applied() {
    let config = RegistryConfig {
        detect_cycles: true,
        trace: TraceConfig {
            sink: TraceSinkKind::None,
            ..TraceConfig::default()
        },
    };
    assert!(registry_options(&config).detect_cycles);

    let registry = build_registry(&config);
    let slot = Slot::<u32>::new();
    registry.provide_lazy(slot, move |reg| reg.resolve(slot));

    assert!(matches!(
        registry.resolve(slot),
        Err(Error::CyclicDependency { .. })
    ));
}

#[test]
fn test_every_sink_kind_builds() {
    for sink in [
        TraceSinkKind::Tracing,
        TraceSinkKind::Stderr,
        TraceSinkKind::None,
    ] {
        let config = RegistryConfig {
            detect_cycles: false,
            trace: TraceConfig {
                sink,
                prefix: "[test] ".to_string(),
            },
        };
        let registry = build_registry(&config);
        let value = registry.provide(Slot::<u8>::new(), 3);
        assert_eq!(value, 3);

        // The sink itself must accept events of every kind.
        let sink = trace_sink(&config.trace);
        sink.record(&svl_core::TraceEvent::LazyProvided { type_name: "u8" });
    }
}
