//! Plotlang Log - structured logging with explicit logger handles
//!
//! Components receive an `Arc<Logger>` by parameter instead of relying on
//! ambient global state. Tests capture output through [`RingBufferSink`];
//! binaries attach [`StdoutSink`], [`StderrSink`] or [`FileSink`].

mod logger;
mod macros;
mod record;
mod ring;

pub use logger::{FileSink, Logger, LogSink, StderrSink, StdoutSink};
pub use record::{Level, Record};
pub use ring::RingBufferSink;
