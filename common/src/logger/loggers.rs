// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Logger construction for binaries and tests.
//!
//! Configuration comes from the environment:
//! * `RUST_LOG` (or `TB_LOG`, used when `RUST_LOG` is unset) sets the filter,
//!   defaulting to `info`.
//! * `TB_LOG_STDERR=1` sends output to stderr instead of stdout.
//! * `TB_LOG_EXTRA_CONTEXT=k1=v1,k2=v2` adds key/values to every record.

use super::{o, Logger};
use chrono::Utc;
use slog::Drain;
use std::{env, io};

const STDOUT_CHANNEL_SIZE: usize = 100_000;
const STDERR_CHANNEL_SIZE: usize = 100_000;

fn custom_timestamp(io: &mut dyn io::Write) -> io::Result<()> {
    write!(io, "{}", Utc::now())
}

fn create_term_logger(
    decorator: slog_term::TermDecorator,
    thread_name: &str,
    chan_size: usize,
) -> slog::Fuse<slog_async::Async> {
    let drain = slog_envlogger::new(
        slog_term::FullFormat::new(decorator)
            .use_custom_timestamp(custom_timestamp)
            .build()
            .fuse(),
    );
    slog_async::Async::new(drain)
        .thread_name(thread_name.into())
        .chan_size(chan_size)
        .build()
        .fuse()
}

/// Split `k1=v1,k2=v2,` into pairs. A trailing comma is allowed.
fn parse_extra_context(src: &str) -> Result<Vec<(String, String)>, String> {
    src.split(',')
        .filter(|key_val| !key_val.is_empty())
        .map(|key_val| match key_val.split('=').collect::<Vec<_>>()[..] {
            [k, v] => Ok((k.to_string(), v.to_string())),
            _ => Err(format!("invalid TB_LOG_EXTRA_CONTEXT key/val: {key_val}")),
        })
        .collect()
}

/// Create the root logger, writing to stdout (or stderr when `TB_LOG_STDERR`
/// is `1`).
///
/// # Panics
///
/// If `TB_LOG_EXTRA_CONTEXT` is malformed.
pub fn create_root_logger() -> Logger {
    // Support TB_LOG in addition to RUST_LOG, so cargo's own logging is not
    // affected by `TB_LOG=trace cargo test`.
    if env::var("RUST_LOG").is_err() {
        let level = env::var("TB_LOG").unwrap_or_else(|_| "info".to_string());
        env::set_var("RUST_LOG", level);
    }

    let std_logger = if env::var("TB_LOG_STDERR") == Ok("1".to_string()) {
        create_term_logger(
            slog_term::TermDecorator::new().stderr().build(),
            "slog-stderr",
            STDERR_CHANNEL_SIZE,
        )
    } else {
        create_term_logger(
            slog_term::TermDecorator::new().stdout().build(),
            "slog-stdout",
            STDOUT_CHANNEL_SIZE,
        )
    };

    let mut root_logger = Logger::root(
        std_logger,
        o!("tb.src" => slog::FnValue(|record: &slog::Record| {
            format!("{}:{}", record.file(), record.line())
        })),
    );

    if let Ok(extra) = env::var("TB_LOG_EXTRA_CONTEXT") {
        let pairs = parse_extra_context(&extra).unwrap_or_else(|err| panic!("{}", err));
        for (k, v) in pairs {
            // slog keys are static; these live for the rest of the process.
            let k: &'static str = Box::leak(k.into_boxed_str());
            root_logger = root_logger.new(o!(k => v));
        }
    }

    root_logger
}

/// Create a logger for a test. Tests log to stderr unless `TB_LOG_STDERR` is
/// set to something else.
pub fn create_test_logger(test_name: String) -> Logger {
    if env::var("TB_LOG_STDERR").is_err() {
        env::set_var("TB_LOG_STDERR", "1");
    }
    create_root_logger().new(o!(
        "tb.test_name" => test_name,
    ))
}

/// Create an application logger, install it as the global logger and route
/// the `log` crate facade into it.
///
/// The returned guard must be held for as long as the global logger is in
/// use.
pub fn create_app_logger<T: slog::SendSyncRefUnwindSafeKV + 'static>(
    values: slog::OwnedKV<T>,
) -> (Logger, slog_scope::GlobalLoggerGuard) {
    let current_exe = env::current_exe()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "unknown".to_string());

    let app_logger = create_root_logger()
        .new(o!("tb.app" => current_exe.clone()))
        .new(values);
    let guard = slog_scope::set_global_logger(app_logger.clone());
    if let Err(err) = slog_stdlog::init() {
        slog::warn!(app_logger, "log facade already initialized: {}", err);
    }

    slog::info!(app_logger, "{} started", current_exe);
    (app_logger, guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_context_pairs() {
        assert_eq!(
            parse_extra_context("a=1,b=2,").unwrap(),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
        assert!(parse_extra_context("").unwrap().is_empty());
        assert!(parse_extra_context("a=1,b").is_err());
        assert!(parse_extra_context("a=1=2").is_err());
    }

    #[test]
    fn app_logger_is_installed_globally() {
        let (app_logger, guard) = create_app_logger(o!("tb.app_test" => "yes"));

        let global_keys = slog_scope::with_logger(|global| format!("{:?}", global.list()));
        assert_eq!(global_keys, format!("{:?}", app_logger.list()));
        assert!(global_keys.contains("tb.app"), "{global_keys}");
        assert!(global_keys.contains("tb.app_test"), "{global_keys}");

        // A second app logger only warns that the log facade is taken.
        drop(guard);
        let (_, _guard) = create_app_logger(o!());
    }
}
