//! Paints a [`DisplayList`] into a terminal area with braille dots.
//!
//! Surface coordinates grow downward; the ratatui canvas grows upward, so y
//! is flipped against the list's extent. Circles become a grid of point
//! samples, and translucent colours are blended over the pane background
//! before they reach the terminal.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::Widget;

use crate::utils::color::{quantize_color, ColorDepth};
use crate::visualizer::display_list::{DisplayList, DrawCommand};
use crate::visualizer::{Point, Rgba};

/// Spacing between samples when filling a circle, in surface pixels.
const FILL_STEP: f64 = 2.0;

pub struct NetworkCanvas<'a> {
    list: &'a DisplayList,
    background: (u8, u8, u8),
    background_color: Color,
    depth: ColorDepth,
}

enum Shape {
    Line(CanvasLine),
    Dots(Vec<(f64, f64)>, Color),
}

impl<'a> NetworkCanvas<'a> {
    pub fn new(list: &'a DisplayList, background_color: Color, depth: ColorDepth) -> Self {
        let background =
            crate::utils::color::color_to_rgb(background_color).unwrap_or((0, 0, 0));
        Self {
            list,
            background,
            background_color,
            depth,
        }
    }

    fn terminal_color(&self, color: Rgba) -> Color {
        let (r, g, b) = color.blend_over(self.background);
        quantize_color(Color::Rgb(r, g, b), self.depth)
    }

    fn shapes(&self) -> Vec<Shape> {
        let height = self.list.extent().height;
        let flip = |p: Point| (p.x, height - p.y);

        self.list
            .commands()
            .iter()
            .map(|command| match *command {
                DrawCommand::Line {
                    from, to, color, ..
                } => {
                    let (x1, y1) = flip(from);
                    let (x2, y2) = flip(to);
                    Shape::Line(CanvasLine::new(x1, y1, x2, y2, self.terminal_color(color)))
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    let dots = circle_samples(center, radius)
                        .into_iter()
                        .map(flip)
                        .collect();
                    Shape::Dots(dots, self.terminal_color(color))
                }
            })
            .collect()
    }
}

/// Centre plus every grid sample inside the disc.
fn circle_samples(center: Point, radius: f64) -> Vec<Point> {
    let mut samples = vec![center];
    if radius <= 0.0 {
        return samples;
    }
    let steps = (radius / FILL_STEP).ceil() as i32;
    for i in -steps..=steps {
        for j in -steps..=steps {
            if i == 0 && j == 0 {
                continue;
            }
            let dx = i as f64 * FILL_STEP;
            let dy = j as f64 * FILL_STEP;
            if dx * dx + dy * dy <= radius * radius {
                samples.push(Point::new(center.x + dx, center.y + dy));
            }
        }
    }
    samples
}

impl Widget for NetworkCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let extent = self.list.extent();
        if area.width == 0 || area.height == 0 || extent.is_empty() {
            return;
        }

        let shapes = self.shapes();
        Canvas::default()
            .marker(Marker::Braille)
            .background_color(self.background_color)
            .x_bounds([0.0, extent.width])
            .y_bounds([0.0, extent.height])
            .paint(|ctx| {
                for shape in &shapes {
                    match shape {
                        Shape::Line(line) => ctx.draw(line),
                        Shape::Dots(coords, color) => ctx.draw(&Points {
                            coords,
                            color: *color,
                        }),
                    }
                }
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualizer::{DrawingContext, SurfaceSize};

    fn painted_cells(buf: &Buffer) -> usize {
        buf.content
            .iter()
            .filter(|cell| cell.symbol() != " " && cell.symbol() != "\u{2800}")
            .count()
    }

    #[test]
    fn empty_list_paints_nothing() {
        let list = DisplayList::with_extent(SurfaceSize::new(80.0, 64.0));
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        NetworkCanvas::new(&list, Color::Black, ColorDepth::Truecolor).render(area, &mut buf);
        assert_eq!(painted_cells(&buf), 0);
    }

    #[test]
    fn line_and_circle_become_braille() {
        let mut list = DisplayList::with_extent(SurfaceSize::new(80.0, 64.0));
        list.stroke_line(
            Point::new(0.0, 0.0),
            Point::new(80.0, 64.0),
            Rgba::new(148, 129, 237, 0.2),
            1.0,
        );
        list.fill_circle(Point::new(40.0, 32.0), 4.0, Rgba::new(148, 129, 237, 1.0));

        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        NetworkCanvas::new(&list, Color::Black, ColorDepth::Truecolor).render(area, &mut buf);
        assert!(painted_cells(&buf) >= 4);
    }

    #[test]
    fn colours_are_blended_over_background() {
        let list = DisplayList::with_extent(SurfaceSize::new(8.0, 8.0));
        let canvas = NetworkCanvas::new(&list, Color::Rgb(0, 0, 0), ColorDepth::Truecolor);
        assert_eq!(
            canvas.terminal_color(Rgba::new(200, 100, 50, 0.5)),
            Color::Rgb(100, 50, 25)
        );
    }

    #[test]
    fn circle_samples_stay_inside_radius() {
        let center = Point::new(10.0, 10.0);
        let samples = circle_samples(center, 4.0);
        assert!(samples.len() > 1);
        for p in samples {
            let d = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert!(d <= 4.0 + f64::EPSILON);
        }
        assert_eq!(circle_samples(center, 0.0), vec![center]);
    }
}
