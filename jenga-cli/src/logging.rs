//! Logger setup: a fern dispatch writing to stderr.
//!
//! The level comes from the `JENGA_LOG` environment variable (`error`,
//! `warn`, `info`, `debug`, `trace`); the default is `warn` so normal
//! runs emit nothing but the answer on stdout.

use log::LevelFilter;

pub fn init() {
    let level = match std::env::var("JENGA_LOG").as_deref() {
        Ok("error") => LevelFilter::Error,
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    };

    // apply() fails only if a logger is already installed.
    let _ = fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {}: {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr())
        .apply();
}
