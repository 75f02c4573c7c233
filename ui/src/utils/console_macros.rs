//! Macros for properly formatted console logging.
//!
//! In the browser these write timestamped lines through `gloo_console`.
//! Native builds (unit tests) have no JS imports to call, so the same text is
//! forwarded to `tracing` instead.

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
    Debug,
}

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn emit(level: ConsoleLevel, message: String) {
    let line = format!("[{}] {}", js_sys::Date::now(), message);
    match level {
        ConsoleLevel::Info => gloo_console::info!(line),
        ConsoleLevel::Warn => gloo_console::warn!(line),
        ConsoleLevel::Error => gloo_console::error!(line),
        ConsoleLevel::Debug => gloo_console::debug!(line),
    }
}

#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: ConsoleLevel, message: String) {
    match level {
        ConsoleLevel::Info => tracing::info!("{}", message),
        ConsoleLevel::Warn => tracing::warn!("{}", message),
        ConsoleLevel::Error => tracing::error!("{}", message),
        ConsoleLevel::Debug => tracing::debug!("{}", message),
    }
}

#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::ConsoleLevel::Info, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::ConsoleLevel::Info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::ConsoleLevel::Warn, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::ConsoleLevel::Warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::ConsoleLevel::Error, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::ConsoleLevel::Error, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::ConsoleLevel::Debug, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::ConsoleLevel::Debug, format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_run_off_the_browser() {
        let field = "email";
        crate::console_info!("plain message");
        crate::console_info!("[Signup] field {} touched", field);
        crate::console_warn!("warn {}", 1);
        crate::console_error!("error {}", "x");
        crate::console_debug!("debug");
    }
}
