//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys::console`.
//! Native builds (tests, benches) drop them.
//!
//! Usage:
//! ```rust
//! use tiltbox_engine::console_log;
//!
//! let bodies = 3;
//! console_log!("spawned {} bodies", bodies);
//! ```

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_message: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}

/// `format!`-style info logging to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::logging::log(&format!($($arg)*))
    };
}

/// `format!`-style warning to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::logging::warn(&format!($($arg)*))
    };
}
