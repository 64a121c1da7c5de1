use ratatui::layout::Rect;

use super::display_list::DisplayList;
use super::surface::{ResizeListenerId, ResizeListeners, Surface, SurfaceSize};

/// How many virtual pixels a single terminal cell spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width: f64,
    pub height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 16.0,
        }
    }
}

/// A surface backed by a terminal area. The client size tracks whatever
/// rectangle the renderer last assigned, measured in virtual pixels.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    cell: CellMetrics,
    viewport: Rect,
    buffer: DisplayList,
    listeners: ResizeListeners,
}

impl TerminalSurface {
    pub fn new(cell: CellMetrics) -> Self {
        Self {
            cell,
            ..Self::default()
        }
    }

    /// Assigns the on-screen area. A change in size notifies resize listeners.
    pub fn set_viewport(&mut self, area: Rect) {
        let resized = area.width != self.viewport.width || area.height != self.viewport.height;
        self.viewport = area;
        if resized {
            self.listeners.notify_all();
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.buffer
    }

    pub fn cell_metrics(&self) -> CellMetrics {
        self.cell
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Surface for TerminalSurface {
    type Context = DisplayList;

    fn client_size(&self) -> SurfaceSize {
        SurfaceSize::new(
            self.viewport.width as f64 * self.cell.width,
            self.viewport.height as f64 * self.cell.height,
        )
    }

    fn buffer_size(&self) -> SurfaceSize {
        self.buffer.extent()
    }

    fn set_buffer_size(&mut self, size: SurfaceSize) {
        self.buffer.set_extent(size);
    }

    fn context(&mut self) -> Option<&mut DisplayList> {
        Some(&mut self.buffer)
    }

    fn add_resize_listener(&mut self) -> ResizeListenerId {
        self.listeners.add()
    }

    fn remove_resize_listener(&mut self, id: ResizeListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn take_resize_notification(&mut self, id: ResizeListenerId) -> bool {
        self.listeners.take(id)
    }
}
