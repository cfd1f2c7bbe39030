//! Saving the current drawing as an svg file.

use crate::draw::svg::Svg;
use crate::draw::{DrawScene, Scene};
use crate::editor::Editor;
use crate::periodic::{FitError, MIN_POINTS};
use log::info;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Title written into every exported document
pub const TITLE: &str = "Spline Drawing";

/// Description written into every exported document
pub const DESCRIPTION: &str = "Spline drawn with spline_drawer";

/// Size of the drawing area in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasSize {
            width: 600.0,
            height: 400.0,
        }
    }
}

/// Reasons an export failed
#[derive(Debug, Error)]
pub enum ExportError {
    /// There is no closed curve yet. Nothing was written.
    #[error("need at least 4 points to export, got {found}")]
    InsufficientPoints {
        /// Number of points at the time of the export
        found: usize,
    },

    /// Enough points, but they don't form a curve, e.g. two neighbours coincide. Nothing was written.
    #[error("no closed curve to export")]
    NoCurve(#[from] FitError),

    /// Writing the file failed
    #[error("failed to write svg")]
    Io(#[from] std::io::Error),
}

/// Renders the editor's current drawing as an svg document of the canvas' size.
///
/// Fails without rendering anything if there are fewer than 4 points or no curve can be fitted
/// through them. The dashed fallback is never exported.
pub fn render_svg(editor: &mut Editor, size: CanvasSize) -> Result<Svg, ExportError> {
    let found = editor.points().len();
    if found < MIN_POINTS {
        return Err(ExportError::InsufficientPoints { found });
    }
    if let Err(err) = editor.curve() {
        return Err(err.clone().into());
    }

    let mut svg = Svg::new(size.width, size.height);
    svg.title = Some(TITLE.to_string());
    svg.description = Some(DESCRIPTION.to_string());
    svg.add_scene(&Scene::from_editor(editor));
    Ok(svg)
}

/// Writes the editor's current drawing to `target` as an svg file.
///
/// With fewer than 4 points nothing is written and [`ExportError::InsufficientPoints`] returned,
/// with a degenerate configuration [`ExportError::NoCurve`].
pub fn export_svg(
    editor: &mut Editor,
    target: impl AsRef<Path>,
    size: CanvasSize,
) -> Result<(), ExportError> {
    let svg = render_svg(editor, size)?;
    let target = target.as_ref();
    fs::write(target, svg.to_string())?;
    info!("SVG saved to: {}", target.display());
    Ok(())
}
