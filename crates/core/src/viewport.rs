/// Viewport width above which the desktop layout activates, in logical units.
pub const DESKTOP_BREAKPOINT: f32 = 1024.0;

/// Compile-time validation of the breakpoint constant.
const _: () = {
    assert!(DESKTOP_BREAKPOINT > 0.0);
};

/// Returns true when the viewport is wide enough for the desktop layout.
///
/// Strictly greater-than, matching the fixed 1024-unit threshold; there is no
/// hysteresis band, so a resize across the boundary flips the layout on the
/// next render.
pub fn is_desktop_width(width: f32) -> bool {
    width > DESKTOP_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(!is_desktop_width(DESKTOP_BREAKPOINT));
        assert!(is_desktop_width(DESKTOP_BREAKPOINT + 1.0));
        assert!(!is_desktop_width(640.0));
        assert!(is_desktop_width(1920.0));
    }
}
