use super::Surface;
use crate::color::Color;
use softpipe_core::Result;
use softpipe_math::Point2;
use std::path::Path;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A surface that builds a standalone SVG document.
///
/// `clear` drops everything drawn so far, so the document always holds the
/// most recent frame.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    background: Option<Color>,
    elements: Vec<String>,
    path_data: String,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
            elements: Vec::new(),
            path_data: String::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Number of painted `<path>` elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = format!(
            "<svg xmlns=\"{SVG_NS}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        if let Some(bg) = self.background {
            out.push_str(&format!(
                "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
                bg.to_css()
            ));
        }
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_svg_string())?;
        Ok(())
    }

    fn push_segment(&mut self, cmd: char, p: Point2) {
        if !self.path_data.is_empty() {
            self.path_data.push(' ');
        }
        self.path_data.push_str(&format!("{}{:.2},{:.2}", cmd, p.x, p.y));
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.elements.clear();
        self.background = Some(color);
    }

    fn begin_path(&mut self) {
        self.path_data.clear();
    }

    fn move_to(&mut self, p: Point2) {
        self.push_segment('M', p);
    }

    fn line_to(&mut self, p: Point2) {
        self.push_segment('L', p);
    }

    fn close_path(&mut self) {
        if !self.path_data.is_empty() {
            self.path_data.push_str(" Z");
        }
    }

    fn stroke(&mut self, color: Color, line_width: f64) {
        let paint = format!(
            "fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\"",
            color.to_css(),
            line_width
        );
        self.elements.push(format!(
            "<path d=\"{}\" {paint} stroke-linejoin=\"round\"/>",
            self.path_data
        ));
    }

    fn fill(&mut self, color: Color) {
        self.elements.push(format!(
            "<path d=\"{}\" fill=\"{}\"/>",
            self.path_data,
            color.to_css()
        ));
    }
}
