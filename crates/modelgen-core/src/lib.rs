pub mod camera;
pub mod config;
pub mod constants;
pub mod lifecycle;
pub mod notification;
pub mod placement;
pub mod scene;
pub mod store;
pub mod tetrahedron;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use lifecycle::*;
pub use notification::*;
pub use placement::*;
pub use scene::*;
pub use store::*;

use instant::Instant;
use std::time::Duration;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

/// Time from `start` to `now`, zero if `now` is earlier.
#[inline]
pub fn elapsed_between(start: Instant, now: Instant) -> Duration {
    if now > start {
        now - start
    } else {
        Duration::ZERO
    }
}
