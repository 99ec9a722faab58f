use super::Surface;
use crate::color::Color;
use softpipe_math::Point2;

/// A single recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    BeginPath,
    MoveTo(Point2),
    LineTo(Point2),
    ClosePath,
    Stroke { color: Color, line_width: f64 },
    Fill(Color),
}

/// A surface that paints nothing and remembers every call made on it.
///
/// Useful for inspecting what a frame would draw.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Change the reported size. The renderer will not notice until its
    /// viewport is refreshed.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill(_)))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count()
    }

    /// True when every `BeginPath` is followed by a `ClosePath` before the
    /// next `BeginPath`, and no path is left open.
    pub fn paths_balanced(&self) -> bool {
        let mut open = false;
        for c in &self.commands {
            match c {
                DrawCommand::BeginPath if open => return false,
                DrawCommand::BeginPath => open = true,
                DrawCommand::ClosePath if !open => return false,
                DrawCommand::ClosePath => open = false,
                _ => {}
            }
        }
        !open
    }

    /// Vertices of every painted path, in draw order, paired with the paint call.
    pub fn painted_paths(&self) -> Vec<(Vec<Point2>, DrawCommand)> {
        let mut out = Vec::new();
        let mut points = Vec::new();
        for c in &self.commands {
            match c {
                DrawCommand::BeginPath => points.clear(),
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => points.push(*p),
                DrawCommand::Stroke { .. } | DrawCommand::Fill(_) => {
                    out.push((points.clone(), c.clone()))
                }
                _ => {}
            }
        }
        out
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point2) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point2) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::Stroke { color, line_width });
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }
}
