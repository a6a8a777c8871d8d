//! Viewport-width detection for the responsive list renderings.
//!
//! The desktop table and the mobile card list show identical data; which
//! one renders is decided by viewport width at render time, not by device
//! capability sniffing.

/// Widths at or below this render the mobile card list.
pub const MOBILE_MAX_WIDTH_PX: u32 = 600;

/// Whether the current viewport should use the mobile rendering.
///
/// Server-side rendering always reports desktop; the hydrated client
/// re-evaluates on mount.
pub fn is_mobile() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window
            .match_media(&format!("(max-width: {MOBILE_MAX_WIDTH_PX}px)"))
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
