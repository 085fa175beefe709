//! Logging macros

/// Log at Trace level
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)*)
    };
}

/// Log at Debug level
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)*)
    };
}

/// Log at Info level
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)*)
    };
}

/// Log at Warn level
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)*)
    };
}

/// Log at Error level
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)*)
    };
}

/// Shared implementation behind the level macros
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        // lazy evaluation: only format the message when the level is enabled
        if $logger.is_enabled($level) {
            let message = format!($($arg)*);
            $logger.log($level, module_path!(), message);
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Level, Logger, RingBufferSink};

    #[test]
    fn test_trace_macro() {
        let ring = RingBufferSink::new(100);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());

        trace!(logger, "test trace");
        trace!(logger, "formatted {}", "value");

        let records = ring.dump_records();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.level == Level::Trace));
    }

    #[test]
    fn test_level_filtering_in_macros() {
        let ring = RingBufferSink::new(100);
        let logger = Logger::new(Level::Warn).with_sink(ring.clone());

        // filtered out
        trace!(logger, "trace msg");
        debug!(logger, "debug msg");
        info!(logger, "info msg");

        // recorded
        warn!(logger, "warn msg");
        error!(logger, "error msg");

        let records = ring.dump_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Level::Warn);
        assert_eq!(records[1].level, Level::Error);
    }

    #[test]
    fn test_formatting() {
        let ring = RingBufferSink::new(100);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());

        let name = "draw";
        let count = 42;
        debug!(logger, "processing {}: count = {}", name, count);

        let records = ring.dump_records();
        assert!(records[0].message.contains("processing draw: count = 42"));
    }
}
