//! Locale resolution with fallback to the configured default.

/// Fallback locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Picks the effective locale for a request.
///
/// Returns `requested` when a translation exists for it, otherwise the
/// default locale. The default is returned even when no translation exists
/// for it either; callers render empty/placeholder values in that case.
/// Unknown locales are not an error.
pub fn resolve<'a>(requested: &'a str, available: &[&str], default: &'a str) -> &'a str {
    if available.contains(&requested) {
        requested
    } else {
        default
    }
}
