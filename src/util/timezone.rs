//! Ambient timezone detection.
//!
//! In the browser this is the IANA zone reported by `Intl.DateTimeFormat`.
//! Natively it is the `TZ` environment variable, falling back to `UTC`.

#[cfg(test)]
#[path = "timezone_test.rs"]
mod timezone_test;

pub const FALLBACK_TIMEZONE: &str = "UTC";

/// Detect the runtime's timezone name.
pub fn detect_timezone() -> String {
    #[cfg(feature = "csr")]
    {
        browser_timezone().unwrap_or_else(|| FALLBACK_TIMEZONE.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        normalize_zone(std::env::var("TZ").ok().as_deref())
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn normalize_zone(raw: Option<&str>) -> String {
    // POSIX allows a leading ':' for zoneinfo paths.
    raw.map(|z| z.trim().trim_start_matches(':'))
        .filter(|z| !z.is_empty())
        .map_or_else(|| FALLBACK_TIMEZONE.to_owned(), str::to_owned)
}

#[cfg(feature = "csr")]
fn browser_timezone() -> Option<String> {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    let options = format.resolved_options();
    js_sys::Reflect::get(&options, &wasm_bindgen::JsValue::from_str("timeZone"))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|z| !z.is_empty())
}
