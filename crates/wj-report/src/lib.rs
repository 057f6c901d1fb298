//! Report rendering.
//!
//! Turns the statistics object into one self-contained HTML artifact with
//! embedded CSS and JavaScript. No file I/O happens here; the caller decides
//! where the string goes.

pub mod html;

pub use html::render_report;
