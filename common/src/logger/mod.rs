// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Logging, built on `slog`.
//!
//! Code that has a [Logger] at hand logs through the [log] macros. Code that
//! does not (conversions, trait impls) logs through [global_log], which writes
//! to whatever logger the caller installed with [scoped_global_logger] or
//! [create_app_logger].

pub use slog::{self, o, Drain, Key, Logger, Record, Serializer};
pub use slog_scope;

/// Logging macros that take an explicit logger as their first argument.
pub mod log {
    pub use slog::{crit, debug, error, info, trace, warn};
}

/// Logging macros that write to the current scoped global logger.
pub mod global_log {
    pub use crate::{
        __global_crit as crit, __global_debug as debug, __global_error as error,
        __global_info as info, __global_trace as trace, __global_warn as warn,
    };
}

/// Log at `crit` level to the scoped global logger.
#[doc(hidden)]
#[macro_export]
macro_rules! __global_crit {
    ($($args:tt)+) => {
        $crate::logger::slog::crit!($crate::logger::slog_scope::logger(), $($args)+)
    };
}

/// Log at `error` level to the scoped global logger.
#[doc(hidden)]
#[macro_export]
macro_rules! __global_error {
    ($($args:tt)+) => {
        $crate::logger::slog::error!($crate::logger::slog_scope::logger(), $($args)+)
    };
}

/// Log at `warn` level to the scoped global logger.
#[doc(hidden)]
#[macro_export]
macro_rules! __global_warn {
    ($($args:tt)+) => {
        $crate::logger::slog::warn!($crate::logger::slog_scope::logger(), $($args)+)
    };
}

/// Log at `info` level to the scoped global logger.
#[doc(hidden)]
#[macro_export]
macro_rules! __global_info {
    ($($args:tt)+) => {
        $crate::logger::slog::info!($crate::logger::slog_scope::logger(), $($args)+)
    };
}

/// Log at `debug` level to the scoped global logger.
#[doc(hidden)]
#[macro_export]
macro_rules! __global_debug {
    ($($args:tt)+) => {
        $crate::logger::slog::debug!($crate::logger::slog_scope::logger(), $($args)+)
    };
}

/// Log at `trace` level to the scoped global logger.
#[doc(hidden)]
#[macro_export]
macro_rules! __global_trace {
    ($($args:tt)+) => {
        $crate::logger::slog::trace!($crate::logger::slog_scope::logger(), $($args)+)
    };
}

/// Run `f` with `logger` installed as the scoped global logger, so that
/// [global_log] calls made inside `f` land on it.
pub fn scoped_global_logger<F, R>(logger: &Logger, f: F) -> R
where
    F: FnOnce(&Logger) -> R,
{
    slog_scope::scope(logger, || f(logger))
}

cfg_if::cfg_if! {
    if #[cfg(feature = "loggers")] {
        mod loggers;
        pub use loggers::*;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Capture(Arc<Mutex<Vec<String>>>);

    impl Drain for Capture {
        type Ok = ();
        type Err = slog::Never;

        fn log(&self, record: &Record, _: &slog::OwnedKVList) -> Result<(), slog::Never> {
            self.0.lock().unwrap().push(record.msg().to_string());
            Ok(())
        }
    }

    #[test]
    fn global_log_writes_to_scoped_logger() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::root(Capture(lines.clone()), o!());

        let answer = scoped_global_logger(&logger, |_| {
            global_log::warn!("scoped {}", 42);
            7
        });

        assert_eq!(answer, 7);
        assert_eq!(*lines.lock().unwrap(), ["scoped 42"]);
    }

    #[test]
    fn explicit_logger_macros() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::root(Capture(lines.clone()), o!());

        log::info!(logger, "first");
        log::error!(logger, "second"; "key" => "value");

        assert_eq!(*lines.lock().unwrap(), ["first", "second"]);
    }
}
