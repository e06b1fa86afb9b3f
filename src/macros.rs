//! Logging macros that fill in the calling function's name.
//!
//! ```
//! use axonops_logger::{log_warning, LoggerRegistry, SeverityLevel};
//!
//! fn check_disk(registry: &LoggerRegistry) {
//!     let logger = registry.provision("AxonOpsLogger", SeverityLevel::Info);
//!     // 2024-05-01 09:30:12,345 - AxonOpsLogger - WARNING - check_disk - disk usage high
//!     log_warning!(logger, "disk usage high");
//! }
//! # check_disk(&LoggerRegistry::new());
//! ```

/// Bare name of the enclosing function, e.g. `check_disk`.
///
/// Closures and async blocks report the function they are written in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let path = type_name_of(__here);
        $crate::format::short_function_name(path.strip_suffix("::__here").unwrap_or(path))
    }};
}

/// Emit through a handle at an explicit level.
#[macro_export]
macro_rules! log_at {
    ($handle:expr, $level:expr, $($arg:tt)+) => {
        $handle.log($level, $crate::function_name!(), ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($handle:expr, $($arg:tt)+) => {
        $crate::log_at!($handle, $crate::SeverityLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($handle:expr, $($arg:tt)+) => {
        $crate::log_at!($handle, $crate::SeverityLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($handle:expr, $($arg:tt)+) => {
        $crate::log_at!($handle, $crate::SeverityLevel::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($handle:expr, $($arg:tt)+) => {
        $crate::log_at!($handle, $crate::SeverityLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_critical {
    ($handle:expr, $($arg:tt)+) => {
        $crate::log_at!($handle, $crate::SeverityLevel::Critical, $($arg)+)
    };
}
