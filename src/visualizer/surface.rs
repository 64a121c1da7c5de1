//! Drawing-surface contract consumed by the animation engine.
//!
//! A host supplies something that implements [`Surface`]: it knows its
//! on-screen size, owns a backing buffer that can be resized, hands out an
//! immediate-mode [`DrawingContext`], and fires resize notifications to the
//! listeners registered on it.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at fraction `t` of the way from `self` to `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Straight RGB channels plus an opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Composite this colour over an opaque background.
    pub fn blend_over(self, background: (u8, u8, u8)) -> (u8, u8, u8) {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (fg as f64 * a + bg as f64 * (1.0 - a)).round().clamp(0.0, 255.0) as u8
        };
        (
            mix(self.r, background.0),
            mix(self.g, background.1),
            mix(self.b, background.2),
        )
    }
}

/// Immediate-mode 2D drawing operations.
pub trait DrawingContext {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeListenerId(u64);

/// A host drawing surface.
pub trait Surface {
    type Context: DrawingContext;

    /// Current on-screen size, in surface pixels.
    fn client_size(&self) -> SurfaceSize;

    /// Size of the backing pixel buffer the context draws into.
    fn buffer_size(&self) -> SurfaceSize;

    fn set_buffer_size(&mut self, size: SurfaceSize);

    /// The drawing context, or `None` when the host cannot provide one.
    fn context(&mut self) -> Option<&mut Self::Context>;

    fn add_resize_listener(&mut self) -> ResizeListenerId;

    /// Returns `false` when `id` was not registered.
    fn remove_resize_listener(&mut self, id: ResizeListenerId) -> bool;

    /// Consumes a pending resize notification for `id`.
    fn take_resize_notification(&mut self, id: ResizeListenerId) -> bool;
}

/// Listener bookkeeping shared by surface implementations.
#[derive(Debug, Default)]
pub struct ResizeListeners {
    next_id: u64,
    pending: HashMap<ResizeListenerId, bool>,
}

impl ResizeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self) -> ResizeListenerId {
        let id = ResizeListenerId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, false);
        id
    }

    pub fn remove(&mut self, id: ResizeListenerId) -> bool {
        self.pending.remove(&id).is_some()
    }

    pub fn notify_all(&mut self) {
        for flag in self.pending.values_mut() {
            *flag = true;
        }
    }

    pub fn take(&mut self, id: ResizeListenerId) -> bool {
        self.pending
            .get_mut(&id)
            .map(std::mem::take)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_interpolates_between_endpoints() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(10.0, 30.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(5.0, 20.0));
    }

    #[test]
    fn blend_over_respects_alpha_extremes() {
        let accent = Rgba::new(148, 129, 237, 1.0);
        assert_eq!(accent.blend_over((0, 0, 0)), (148, 129, 237));
        assert_eq!(accent.with_alpha(0.0).blend_over((10, 20, 30)), (10, 20, 30));
        assert_eq!(
            Rgba::new(200, 100, 0, 0.5).blend_over((0, 0, 0)),
            (100, 50, 0)
        );
    }

    #[test]
    fn resize_listeners_deliver_once_per_notification() {
        let mut listeners = ResizeListeners::new();
        let first = listeners.add();
        let second = listeners.add();
        assert_ne!(first, second);
        assert!(!listeners.take(first));

        listeners.notify_all();
        assert!(listeners.take(first));
        assert!(!listeners.take(first));
        assert!(listeners.take(second));
    }

    #[test]
    fn removed_listener_is_not_notified() {
        let mut listeners = ResizeListeners::new();
        let id = listeners.add();
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        listeners.notify_all();
        assert!(!listeners.take(id));
        assert!(listeners.is_empty());
    }
}
