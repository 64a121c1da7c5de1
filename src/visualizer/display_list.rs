//! Retained backing buffer: the draw commands issued since the last clear.

use super::surface::{DrawingContext, Point, Rgba, SurfaceSize};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
}

impl DrawCommand {
    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            DrawCommand::Line { from, to, .. } => (
                from.x.min(to.x),
                from.y.min(to.y),
                from.x.max(to.x),
                from.y.max(to.y),
            ),
            DrawCommand::Circle { center, radius, .. } => (
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    extent: SurfaceSize,
    clears: u64,
}

impl DisplayList {
    pub fn with_extent(extent: SurfaceSize) -> Self {
        Self {
            extent,
            ..Self::default()
        }
    }

    pub fn extent(&self) -> SurfaceSize {
        self.extent
    }

    /// Resizing a buffer discards its content.
    pub fn set_extent(&mut self, extent: SurfaceSize) {
        self.extent = extent;
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `clear_rect` calls received.
    pub fn clear_count(&self) -> u64 {
        self.clears
    }
}

impl DrawingContext for DisplayList {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.clears += 1;
        let (right, bottom) = (x + width, y + height);
        if x <= 0.0 && y <= 0.0 && right >= self.extent.width && bottom >= self.extent.height {
            self.commands.clear();
            return;
        }
        self.commands.retain(|command| {
            let (min_x, min_y, max_x, max_y) = command.bounds();
            !(min_x >= x && min_y >= y && max_x <= right && max_y <= bottom)
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENT: Rgba = Rgba::new(148, 129, 237, 1.0);

    #[test]
    fn partial_clear_removes_only_contained_commands() {
        let mut list = DisplayList::with_extent(SurfaceSize::new(400.0, 100.0));
        list.fill_circle(Point::new(10.0, 10.0), 2.0, ACCENT);
        list.stroke_line(Point::new(0.0, 0.0), Point::new(200.0, 5.0), ACCENT, 1.0);

        list.clear_rect(0.0, 0.0, 50.0, 50.0);

        assert_eq!(list.commands().len(), 1);
        assert!(matches!(list.commands()[0], DrawCommand::Line { .. }));
        assert_eq!(list.clear_count(), 1);
    }

    #[test]
    fn full_clear_empties_the_list() {
        let mut list = DisplayList::with_extent(SurfaceSize::new(100.0, 50.0));
        list.fill_circle(Point::new(1.0, 49.0), 6.0, ACCENT);
        list.stroke_line(Point::new(1.0, 1.0), Point::new(90.0, 40.0), ACCENT, 1.0);
        list.clear_rect(0.0, 0.0, 100.0, 50.0);
        assert!(list.commands().is_empty());
    }

    #[test]
    fn resizing_discards_content() {
        let mut list = DisplayList::with_extent(SurfaceSize::new(100.0, 50.0));
        list.fill_circle(Point::new(10.0, 10.0), 2.0, ACCENT);
        list.set_extent(SurfaceSize::new(200.0, 80.0));
        assert!(list.commands().is_empty());
        assert_eq!(list.extent(), SurfaceSize::new(200.0, 80.0));
    }
}
