//! Demo composition root
//!
//! A small application wired through the registry: a configuration value, a
//! logger built from it, a service built from both, and a router whose
//! routes are contributed through a hook.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::LazyLock;
use svl_core::{Error, Hook, Registry, Result, Slot, listener};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub foo: String,
}

/// Logger that prefixes every line with the configured value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixLogger {
    prefix: String,
}

impl PrefixLogger {
    pub fn new(prefix: String) -> Self {
        Self { prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn log(&self, message: &str) {
        tracing::info!("{}{message}", self.prefix);
    }
}

/// The service at the root of the demo graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleService {
    pub bar: String,
}

/// Routes collected while building the router
#[derive(Debug, Default)]
pub struct Router {
    routes: RefCell<Vec<String>>,
}

impl Router {
    /// Mount a route; duplicates are rejected
    pub fn mount(&self, route: &str) -> Result<()> {
        let mut routes = self.routes.borrow_mut();
        if routes.iter().any(|r| r == route) {
            return Err(Error::listener(format!("route {route} already mounted")));
        }
        routes.push(route.to_string());
        Ok(())
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.borrow().clone()
    }
}

pub static CONFIG_SLOT: LazyLock<Slot<Rc<AppConfig>>> = LazyLock::new(|| Slot::named("config"));
pub static LOGGER_SLOT: LazyLock<Slot<Rc<PrefixLogger>>> = LazyLock::new(|| Slot::named("logger"));
pub static SERVICE_SLOT: LazyLock<Slot<Rc<ExampleService>>> =
    LazyLock::new(|| Slot::named("example-service"));
pub static ROUTER_SLOT: LazyLock<Slot<Rc<Router>>> = LazyLock::new(|| Slot::named("router"));
pub static ROUTES_HOOK: LazyLock<Hook<Rc<Router>>> = LazyLock::new(|| Hook::named("routes"));

/// Register every demo service on `registry`
pub fn compose(registry: &Registry, foo: &str) {
    registry.provide(
        *CONFIG_SLOT,
        Rc::new(AppConfig {
            foo: foo.to_string(),
        }),
    );

    registry.provide_lazy(*LOGGER_SLOT, |reg| {
        let config = reg.resolve(*CONFIG_SLOT)?;
        Ok(Rc::new(PrefixLogger::new(format!(
            "[service foo={}] ",
            config.foo
        ))))
    });

    registry.provide_lazy(*SERVICE_SLOT, |reg| {
        let config = reg.resolve(*CONFIG_SLOT)?;
        let logger = reg.resolve(*LOGGER_SLOT)?;
        logger.log("creating the service");
        Ok(Rc::new(ExampleService {
            bar: format!("{} baz", config.foo),
        }))
    });

    // The router lets other modules mount routes through its hook.
    registry.provide_lazy(*ROUTER_SLOT, |reg| {
        let router = Rc::new(Router::default());
        reg.dispatch(*ROUTES_HOOK, Rc::clone(&router))?;
        Ok(router)
    });

    registry.provide_hook(
        *ROUTES_HOOK,
        vec![
            listener(|_, router: &Rc<Router>| router.mount("/health")),
            listener(|reg, router: &Rc<Router>| {
                let service = reg.resolve(*SERVICE_SLOT)?;
                router.mount(&format!("/service/{}", service.bar.replace(' ', "-")))
            }),
        ],
    );
}

/// What the demo built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub service: ExampleService,
    pub routes: Vec<String>,
}

/// Resolve the demo roots
///
/// # Errors
///
/// Propagates any resolution or listener failure.
pub fn run(registry: &Registry) -> Result<DemoReport> {
    let service = registry.resolve(*SERVICE_SLOT)?;
    let router = registry.resolve(*ROUTER_SLOT)?;
    Ok(DemoReport {
        service: (*service).clone(),
        routes: router.routes(),
    })
}
