//! Lens geometry for the image magnifier.
//!
//! Everything here is pure arithmetic on bounds the component has already
//! measured. The component re-reads the container's bounding box on every
//! event (it may have scrolled or resized), translates the pointer into
//! container-local space, clamps the lens center so the lens stays inside
//! the image, and derives the background-position percentages that align
//! the magnified crop with the true pointer location.

/// A position in either viewport or container-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The image container's rectangle in viewport coordinates, read fresh per
/// interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// An unmounted or collapsed container cannot host a lens.
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Translate a viewport coordinate into container-local space.
    pub fn to_local(&self, viewport: Point) -> Point {
        Point::new(viewport.x - self.left, viewport.y - self.top)
    }
}

/// Everything the overlay needs to render one lens position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensFrame {
    /// Lens center in container-local coordinates.
    pub center: Point,
    /// Center as a percentage of container size, per axis.
    pub background_percent: Point,
}

/// Clamp a local position so a lens of the given radius stays inside a
/// `width` by `height` container. Containers smaller than the lens pin the
/// center to the midpoint of that axis.
pub fn clamp_center(local: Point, width: f64, height: f64, radius: f64) -> Point {
    Point::new(
        clamp_axis(local.x, width, radius),
        clamp_axis(local.y, height, radius),
    )
}

fn clamp_axis(value: f64, size: f64, radius: f64) -> f64 {
    if size <= radius * 2.0 {
        size / 2.0
    } else {
        value.clamp(radius, size - radius)
    }
}

/// Express a clamped center as a percentage of the container size.
pub fn background_percent(center: Point, width: f64, height: f64) -> Point {
    Point::new(center.x / width * 100.0, center.y / height * 100.0)
}

/// Derive a full lens frame from fresh bounds and a viewport pointer
/// position. `None` when the bounds are unmeasurable; the lens degrades
/// silently rather than erroring.
pub fn resolve(bounds: ContainerBounds, viewport: Point, lens_diameter: f64) -> Option<LensFrame> {
    if !bounds.is_measurable() {
        return None;
    }
    let local = bounds.to_local(viewport);
    let center = clamp_center(local, bounds.width, bounds.height, lens_diameter / 2.0);
    Some(LensFrame {
        center,
        background_percent: background_percent(center, bounds.width, bounds.height),
    })
}

/// Which input modality is driving the lens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Pointer,
    Touch,
}

/// The magnifier's interaction state.
///
/// Hover and touch share one machine: whichever modality engages first owns
/// the lens until it releases, and the other modality's events are ignored
/// meanwhile. Touch-start engages immediately at the first touch point; no
/// move event is needed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LensState {
    #[default]
    Idle,
    Active {
        source: InputSource,
        frame: LensFrame,
    },
}

impl LensState {
    /// Enter/touch-start. Ignored while the other modality is active.
    pub fn engage(&mut self, source: InputSource, frame: LensFrame) {
        if matches!(self, LensState::Idle) {
            *self = LensState::Active { source, frame };
        }
    }

    /// Move. Only the owning modality may reposition the lens; ignored when
    /// idle.
    pub fn track(&mut self, source: InputSource, frame: LensFrame) {
        if let LensState::Active {
            source: owner,
            frame: current,
        } = self
        {
            if *owner == source {
                *current = frame;
            }
        }
    }

    /// Leave/touch-end/touch-cancel. Only the owning modality may release.
    pub fn release(&mut self, source: InputSource) {
        if let LensState::Active { source: owner, .. } = self {
            if *owner == source {
                *self = LensState::Idle;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, LensState::Active { .. })
    }

    /// The current frame, if a lens is showing.
    pub fn frame(&self) -> Option<LensFrame> {
        match self {
            LensState::Idle => None,
            LensState::Active { frame, .. } => Some(*frame),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 400x300 container at viewport (100, 50), 150px lens: the worked
    // scenarios used throughout.
    fn bounds() -> ContainerBounds {
        ContainerBounds::new(100.0, 50.0, 400.0, 300.0)
    }

    const DIAMETER: f64 = 150.0;
    const RADIUS: f64 = 75.0;

    fn frame_at_local(x: f64, y: f64) -> LensFrame {
        resolve(bounds(), Point::new(100.0 + x, 50.0 + y), DIAMETER).unwrap()
    }

    #[test]
    fn test_interior_pointer_maps_to_local_coordinates() {
        // Strictly inside the clamp band, the center is the translated
        // pointer position.
        let frame = frame_at_local(200.0, 150.0);
        assert_eq!(frame.center, Point::new(200.0, 150.0));
        assert_eq!(frame.background_percent, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_corner_pointer_is_clamped() {
        let frame = frame_at_local(10.0, 10.0);
        assert_eq!(frame.center, Point::new(75.0, 75.0));
        assert_eq!(frame.background_percent, Point::new(18.75, 25.0));
    }

    #[test]
    fn test_lens_never_exceeds_container() {
        for &(x, y) in &[
            (-50.0, -50.0),
            (0.0, 0.0),
            (399.0, 1.0),
            (400.0, 300.0),
            (1000.0, 1000.0),
        ] {
            let frame = frame_at_local(x, y);
            assert!(frame.center.x >= RADIUS && frame.center.x <= 400.0 - RADIUS);
            assert!(frame.center.y >= RADIUS && frame.center.y <= 300.0 - RADIUS);
        }
    }

    #[test]
    fn test_background_percent_at_clamp_extremes() {
        // Leftmost/topmost clamp: center == radius.
        let frame = frame_at_local(0.0, 0.0);
        assert_eq!(frame.background_percent, Point::new(18.75, 25.0));

        // Rightmost/bottommost clamp: center == size - radius.
        let frame = frame_at_local(400.0, 300.0);
        assert_eq!(frame.center, Point::new(325.0, 225.0));
        assert_eq!(frame.background_percent, Point::new(81.25, 75.0));
    }

    #[test]
    fn test_container_smaller_than_lens_pins_midpoint() {
        let tiny = ContainerBounds::new(0.0, 0.0, 100.0, 100.0);
        let frame = resolve(tiny, Point::new(90.0, 5.0), DIAMETER).unwrap();
        assert_eq!(frame.center, Point::new(50.0, 50.0));
        assert_eq!(frame.background_percent, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_unmeasurable_bounds_resolve_to_none() {
        let unmounted = ContainerBounds::new(0.0, 0.0, 0.0, 0.0);
        assert!(resolve(unmounted, Point::new(10.0, 10.0), DIAMETER).is_none());
    }

    #[test]
    fn test_touch_start_engages_immediately() {
        let mut state = LensState::default();
        let frame = frame_at_local(10.0, 10.0);

        state.engage(InputSource::Touch, frame);
        assert!(state.is_active());
        assert_eq!(state.frame(), Some(frame));
    }

    #[test]
    fn test_release_deactivates() {
        let frame = frame_at_local(200.0, 150.0);

        let mut state = LensState::default();
        state.engage(InputSource::Pointer, frame);
        state.release(InputSource::Pointer);
        assert_eq!(state, LensState::Idle);

        let mut state = LensState::default();
        state.engage(InputSource::Touch, frame);
        state.release(InputSource::Touch);
        assert_eq!(state, LensState::Idle);
    }

    #[test]
    fn test_modalities_are_mutually_exclusive() {
        let pointer_frame = frame_at_local(200.0, 150.0);
        let touch_frame = frame_at_local(10.0, 10.0);

        let mut state = LensState::default();
        state.engage(InputSource::Pointer, pointer_frame);

        // A concurrent touch neither repositions nor releases the lens.
        state.engage(InputSource::Touch, touch_frame);
        state.track(InputSource::Touch, touch_frame);
        assert_eq!(state.frame(), Some(pointer_frame));
        state.release(InputSource::Touch);
        assert!(state.is_active());

        // The owner still releases normally.
        state.release(InputSource::Pointer);
        assert_eq!(state, LensState::Idle);
    }

    #[test]
    fn test_track_ignored_when_idle() {
        let mut state = LensState::default();
        state.track(InputSource::Pointer, frame_at_local(200.0, 150.0));
        assert_eq!(state, LensState::Idle);
    }

    #[test]
    fn test_track_repositions_owner() {
        let mut state = LensState::default();
        state.engage(InputSource::Pointer, frame_at_local(200.0, 150.0));
        let moved = frame_at_local(300.0, 100.0);
        state.track(InputSource::Pointer, moved);
        assert_eq!(state.frame(), Some(moved));
    }

    #[test]
    fn test_bounds_follow_scroll() {
        // Same viewport position, shifted bounds: the local point moves.
        let scrolled = ContainerBounds::new(100.0, -150.0, 400.0, 300.0);
        let frame = resolve(scrolled, Point::new(300.0, 100.0), DIAMETER).unwrap();
        assert_eq!(frame.center, Point::new(200.0, 225.0));
    }
}
