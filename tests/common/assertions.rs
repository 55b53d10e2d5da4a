//! Domain-specific assertion macros for showgrid harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that make it clear
//! which view property was violated.

/// Assert that a derived view lists exactly these titles, in order.
///
/// ```rust
/// assert_titles!(view, ["Zeta", "Alpha"]);
/// ```
#[macro_export]
macro_rules! assert_titles {
    ($view:expr, [$($name:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $view.iter().map(|r| r.show_name.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "derived view titles differ");
    }};
}

/// Assert that every record in a view has a title containing `needle`,
/// case-insensitively.
#[macro_export]
macro_rules! assert_all_match {
    ($view:expr, $needle:expr) => {{
        let needle = $needle.trim().to_lowercase();
        for record in $view.iter() {
            if !record.show_name.to_lowercase().contains(&needle) {
                panic!(
                    "assert_all_match! failed: {:?} does not contain {:?}",
                    record.show_name, needle
                );
            }
        }
    }};
}
