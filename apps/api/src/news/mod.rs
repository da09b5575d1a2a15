// Industry News: keyword search against the news service.
// Failures never surface as errors; the view just shows nothing.

pub mod client;
pub mod handlers;
