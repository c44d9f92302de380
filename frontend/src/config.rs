//! Configuration for the frontend application

use bookmark_shelf_shared::CarouselConfig;

/// Duration of the slide enter/exit transition, in ms. Must match the
/// keyframe timing in `index.html`.
pub const SLIDE_TRANSITION_MS: u32 = 500;

/// Duration of the snap back after a drag that did not page.
pub const SNAP_BACK_MS: u32 = 300;

/// Tunables of the bookmark carousel
pub fn carousel_config() -> CarouselConfig {
    CarouselConfig::default()
}
