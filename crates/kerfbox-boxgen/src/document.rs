//! SVG sink collecting the emitted contours.

use kerfbox_core::BoundingBox;
use std::fmt::Write as _;

/// Stroke style of every cut path
pub const CUT_STYLE: &str = "stroke:#000000;stroke-width:0.1;fill:none";

/// Label of the group holding all parts of one box
pub const BOX_GROUP_LABEL: &str = "Generic Box";

#[derive(Debug, Clone, PartialEq)]
pub struct EmittedPath {
    pub label: Option<String>,
    pub data: String,
    pub bbox: BoundingBox,
}

#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    paths: Vec<EmittedPath>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_path(&mut self, label: Option<String>, data: String, bbox: BoundingBox) {
        self.paths.push(EmittedPath { label, data, bbox });
    }

    pub fn paths(&self) -> &[EmittedPath] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn find(&self, label: &str) -> Option<&EmittedPath> {
        self.paths
            .iter()
            .find(|p| p.label.as_deref() == Some(label))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.paths.iter().filter_map(|p| p.label.as_deref()).collect()
    }

    /// Union of every emitted bounding box
    pub fn extent(&self) -> Option<BoundingBox> {
        self.paths
            .iter()
            .map(|p| p.bbox)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Standalone SVG document, millimeter units
    pub fn to_svg(&self) -> String {
        let extent = self
            .extent()
            .unwrap_or_else(|| BoundingBox::new(0.0, 0.0, 0.0, 0.0));
        let width = extent.width().max(1.0);
        let height = extent.height().max(1.0);

        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:inkscape=\"http://www.inkscape.org/namespaces/inkscape\" width=\"{:.3}mm\" height=\"{:.3}mm\" viewBox=\"{:.3} {:.3} {:.3} {:.3}\">",
            width, height, extent.min_x, extent.min_y, width, height
        );
        let _ = writeln!(
            svg,
            "  <g inkscape:label=\"{}\" inkscape:groupmode=\"layer\">",
            BOX_GROUP_LABEL
        );
        for path in &self.paths {
            match &path.label {
                Some(label) => {
                    let _ = writeln!(
                        svg,
                        "    <path id=\"{}\" style=\"{}\" d=\"{}\"/>",
                        escape_attr(label),
                        CUT_STYLE,
                        path.data.trim()
                    );
                }
                None => {
                    let _ = writeln!(
                        svg,
                        "    <path style=\"{}\" d=\"{}\"/>",
                        CUT_STYLE,
                        path.data.trim()
                    );
                }
            }
        }
        svg.push_str("  </g>\n</svg>\n");
        svg
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_renders() {
        let doc = SvgDocument::new();
        assert!(doc.is_empty());
        let svg = doc.to_svg();
        assert!(svg.contains("Generic Box"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_extent_is_union() {
        let mut doc = SvgDocument::new();
        doc.add_path(
            Some("A".to_string()),
            " M 0,0 L 10,0".to_string(),
            BoundingBox::new(0.0, 0.0, 10.0, 0.0),
        );
        doc.add_path(None, " M -5,3".to_string(), BoundingBox::new(-5.0, 3.0, -5.0, 3.0));
        assert_eq!(doc.extent(), Some(BoundingBox::new(-5.0, 0.0, 10.0, 3.0)));
        assert_eq!(doc.labels(), vec!["A"]);
        let svg = doc.to_svg();
        assert!(svg.contains("viewBox=\"-5.000 0.000 15.000 3.000\""));
        assert!(svg.contains("<path id=\"A\""));
    }
}
