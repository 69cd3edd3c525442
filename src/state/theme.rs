#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Resolve the theme flag at page load.
///
/// A previously persisted `"true"`/`"false"` wins outright. Anything else,
/// including a missing or malformed stored value, falls back to the
/// operating system's color-scheme preference.
pub fn initial_theme(stored: Option<&str>, prefers_dark: bool) -> bool {
    match stored {
        Some("true") => true,
        Some("false") => false,
        _ => prefers_dark,
    }
}

/// Flip the theme flag.
///
/// Persistence and the document class are handled by the root component's
/// sync effect, which runs on every value of the theme signal.
pub fn toggle(current: bool) -> bool {
    !current
}
