//! Console logging macros
//!
//! `web_sys::console` imports only exist inside a JS host. Off `wasm32`
//! (native unit tests) the macros still type-check their arguments but
//! emit nothing.

/// `println!`-style logging to `console.log`
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($t)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($t)*);
            }
        }
    }};
}

/// `println!`-style logging to `console.warn`
#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($t)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($t)*);
            }
        }
    }};
}
