//! Logging helpers for conditions that would otherwise be reported for every ray or every shape.

/// Logs at most once per call site, for the whole process.
///
/// Returns whether this invocation was the one that logged.
#[macro_export]
macro_rules! log_once {
    (target: $target:expr, $lvl:expr, $($arg:tt)+) => {{
        static ONCE: std::sync::Once = std::sync::Once::new();
        let mut first = false;
        ONCE.call_once(|| {
            first = true;
            log::log!(target: $target, $lvl, $($arg)+);
        });
        first
    }};
    ($lvl:expr, $($arg:tt)+) => ($crate::log_once!(target: module_path!(), $lvl, $($arg)+));
}

#[macro_export]
macro_rules! warn_once {
    (target: $target:expr, $($arg:tt)+) => (
        $crate::log_once!(target: $target, log::Level::Warn, $($arg)+)
    );
    ($($arg:tt)+) => ($crate::log_once!(log::Level::Warn, $($arg)+));
}

pub use log_once;
pub use warn_once;
