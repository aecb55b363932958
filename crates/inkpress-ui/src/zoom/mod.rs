//! The pointer-driven magnifier.
//!
//! `lens` holds the pure geometry and the input state machine;
//! `image_zoom` wires them to DOM events.

pub mod image_zoom;
pub mod lens;

pub use image_zoom::ImageZoom;
pub use lens::{
    background_percent, clamp_center, resolve, ContainerBounds, InputSource, LensFrame, LensState,
    Point,
};
