#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn no_color_flag_wins() {
    assert_eq!(resolve_color(false, true), ColorChoice::Never);
    // Even when force is also set, no-color takes precedence
    assert_eq!(resolve_color(true, true), ColorChoice::Never);
}

#[test]
fn color_flag_forces_color() {
    assert_eq!(resolve_color(true, false), ColorChoice::Always);
}

#[test]
fn severity_scheme_is_distinct() {
    assert_ne!(scheme::error(), scheme::warning());
}
