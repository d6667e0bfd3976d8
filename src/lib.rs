//! `corrlog` - correlated logging facade.
//!
//! Every log call gets the same shape regardless of the backend behind it: a
//! message and/or an error, the calling function as channel, and a correlation id
//! that ties the entries of one operation together. The result of each call is a
//! [`LogOutcome`] instead of a bare flag.
//!
//! - The backend's gate is consulted before any formatting work.
//! - Error summaries are single-line, bounded, and include one level of source.
//! - Trace goes to the diagnostic channel only and never consults the backend.
//! - Logging never panics and never returns an error to the caller.
//!
//! # Example
//!
//! ```
//! use corrlog::backend::MemoryBackend;
//! use corrlog::{CorrelationId, Facade, LogOutcome, LogRequest};
//! use std::sync::Arc;
//!
//! let backend = Arc::new(MemoryBackend::new());
//! let facade = Facade::builder().backend(Arc::clone(&backend)).build();
//!
//! let operation = CorrelationId::new();
//! let outcome = corrlog::info!(facade, correlation = operation; "loading {} items", 3);
//! assert_eq!(outcome, LogOutcome::Emitted(operation));
//!
//! let err = std::io::Error::other("disk full");
//! let outcome = facade.error(LogRequest::new().message("save failed").error(&err));
//! assert!(outcome.is_emitted());
//!
//! assert_eq!(facade.debug("too chatty"), LogOutcome::SkippedBelowThreshold);
//! assert_eq!(backend.write_count(), 2);
//! ```
//!
//! # Features
//!
//! - `log`: adds [`backend::LogBackend`], forwarding to the `log` crate.

mod macros;

pub mod backend;
pub mod caller;
pub mod config;
pub mod correlation;
pub mod diagnostics;
mod error;
pub mod facade;
pub mod fmt;
pub mod level;
pub mod outcome;

pub use backend::{Backend, Channel, ChannelLevels};
pub use caller::{CallSite, CallerResolver, FunctionPathResolver, LocationResolver};
pub use config::Config;
pub use correlation::CorrelationId;
pub use diagnostics::{DiagnosticSink, DiagnosticTarget};
pub use error::Error;
pub use facade::{FALLBACK_CHANNEL, Facade, FacadeBuilder, LogRequest};
pub use level::{Level, ParseLevelError};
pub use outcome::{LogOutcome, OutcomeKind};
