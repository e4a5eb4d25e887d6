//! Browser glue shared by the page components.

pub mod speech;

/// Wall-clock milliseconds, used to stamp messages.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
