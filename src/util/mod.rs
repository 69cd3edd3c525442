//! Browser glue: everything that touches `web_sys`.
//!
//! ERROR HANDLING
//! ==============
//! DOM lookups, storage access, and observer registration are all allowed
//! to fail silently. A missing element, denied storage, or absent `window`
//! degrades to a no-op; nothing in this module panics or surfaces errors
//! to the user. Non-browser builds get inert fallbacks so the crate
//! compiles and unit-tests natively.

pub mod dark_mode;
pub mod reveal;
pub mod scroll;
