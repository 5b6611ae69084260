//! Error handling types

use thiserror::Error;

/// Result type alias for registry operations and the callbacks they run
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service locator
///
/// Lazy constructors and hook listeners return this same type, and the
/// registry hands their errors back to the caller unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// A slot was resolved before anything was provided for it
    #[error("no injected value for type {type_name}{}", label_suffix(*label))]
    NotRegistered {
        /// Type label of the requested slot
        type_name: &'static str,
        /// Optional slot label
        label: Option<&'static str>,
    },

    /// A hook was dispatched before any listeners were provided for it
    #[error("no injected hooks for hook of type {type_name}{}", label_suffix(*label))]
    HookNotRegistered {
        /// Payload type label of the hook
        type_name: &'static str,
        /// Optional hook label
        label: Option<&'static str>,
    },

    /// A slot was requested again while it was still being constructed
    ///
    /// Only reported when cycle detection is enabled on the registry.
    #[error("cyclic dependency: {}", chain.join(" -> "))]
    CyclicDependency {
        /// Slots under construction, outermost first, ending with the repeated one
        chain: Vec<String>,
    },

    /// A lazy constructor failed
    #[error("construction error: {message}")]
    Construction {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A hook listener failed
    #[error("listener error: {message}")]
    Listener {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error (logging setup, bootstrap)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic error from external sources
    #[error("Generic error: {0}")]
    Generic(#[from] Box<dyn std::error::Error + Send + Sync>),
}

fn label_suffix(label: Option<&'static str>) -> String {
    label.map(|l| format!(" ({l})")).unwrap_or_default()
}

impl Error {
    /// Create a generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into().into())
    }

    /// Create a constructor failure
    pub fn construction<S: Into<String>>(message: S) -> Self {
        Self::Construction {
            message: message.into(),
            source: None,
        }
    }

    /// Create a constructor failure with source
    pub fn construction_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Construction {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a listener failure
    pub fn listener<S: Into<String>>(message: S) -> Self {
        Self::Listener {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// True for the two "nothing registered" variants
    pub fn is_not_registered(&self) -> bool {
        matches!(
            self,
            Self::NotRegistered { .. } | Self::HookNotRegistered { .. }
        )
    }
}
