//! Drawing surfaces.
//!
//! A [`Surface`] is the host's 2D drawing target: it can be cleared and can
//! paint closed polygonal paths. All coordinates are surface pixels with the
//! origin at the top-left corner and y growing downward.
//!
//! Paths are only ever built through a [`PathScope`], which pairs every
//! `begin_path` with a `close_path` even when a face is abandoned midway.

mod recording;
mod svg;

pub use recording::{DrawCommand, RecordingSurface};
pub use svg::SvgSurface;

use crate::color::Color;
use softpipe_math::Point2;

pub trait Surface {
    /// Current size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with `color`, discarding previous content.
    fn clear(&mut self, color: Color);

    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point2);

    fn line_to(&mut self, p: Point2);

    fn close_path(&mut self);

    /// Outline the current path.
    fn stroke(&mut self, color: Color, line_width: f64);

    /// Fill the current path.
    fn fill(&mut self, color: Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn clear(&mut self, color: Color) {
        (**self).clear(color)
    }

    fn begin_path(&mut self) {
        (**self).begin_path()
    }

    fn move_to(&mut self, p: Point2) {
        (**self).move_to(p)
    }

    fn line_to(&mut self, p: Point2) {
        (**self).line_to(p)
    }

    fn close_path(&mut self) {
        (**self).close_path()
    }

    fn stroke(&mut self, color: Color, line_width: f64) {
        (**self).stroke(color, line_width)
    }

    fn fill(&mut self, color: Color) {
        (**self).fill(color)
    }
}

/// An open path on a surface.
///
/// Created by [`PathScope::begin`]; finished by [`stroke`](PathScope::stroke)
/// or [`fill`](PathScope::fill). Dropping an unfinished scope closes the path
/// without painting it.
pub struct PathScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    closed: bool,
}

impl<'a, S: Surface + ?Sized> PathScope<'a, S> {
    pub fn begin(surface: &'a mut S) -> Self {
        surface.begin_path();
        Self {
            surface,
            closed: false,
        }
    }

    pub fn move_to(&mut self, p: Point2) {
        self.surface.move_to(p);
    }

    pub fn line_to(&mut self, p: Point2) {
        self.surface.line_to(p);
    }

    /// Move to the first point, then line through the rest.
    pub fn polygon(&mut self, points: &[Point2]) {
        if let Some((first, rest)) = points.split_first() {
            self.move_to(*first);
            for &p in rest {
                self.line_to(p);
            }
        }
    }

    pub fn stroke(mut self, color: Color, line_width: f64) {
        self.close();
        self.surface.stroke(color, line_width);
    }

    pub fn fill(mut self, color: Color) {
        self.close();
        self.surface.fill(color);
    }

    fn close(&mut self) {
        if !self.closed {
            self.surface.close_path();
            self.closed = true;
        }
    }
}

impl<S: Surface + ?Sized> Drop for PathScope<'_, S> {
    fn drop(&mut self) {
        self.close();
    }
}
