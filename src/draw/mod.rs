//! Defines what gets drawn for an editing session and the [`DrawScene`] trait drawing contexts implement.
//!
//! The editor itself never draws anything.
//! It only hands out a [`Scene`] which a drawing context turns into pixels or, see [`svg`], into a document.
use crate::editor::Editor;
use crate::Point;

pub mod svg;

/// Radius of the circles marking control points
pub const MARKER_RADIUS: f64 = 3.0;

/// Width of the curve's stroke
pub const STROKE_WIDTH: f64 = 2.0;

/// The line drawn through the control points
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// The fitted curve as a closed path
    Closed(Vec<Point>),

    /// Too few or degenerate points: a dashed open polyline through the points themselves
    Dashed(Vec<Point>),
}

/// Everything needed to draw the current state of an [`Editor`]
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// The curve or its fallback
    pub outline: Outline,

    /// Centers of the control point markers
    pub markers: Vec<Point>,
}

impl Scene {
    /// Builds the scene for the editor's current points, refitting the curve if necessary.
    pub fn from_editor(editor: &mut Editor) -> Self {
        let markers = editor.points().points().to_vec();
        let outline = match editor.curve() {
            Ok(curve) => Outline::Closed(curve.samples().to_vec()),
            Err(_) => Outline::Dashed(markers.clone()),
        };
        Scene { outline, markers }
    }

    /// Whether the outline is the fitted curve
    pub fn is_closed(&self) -> bool {
        matches!(self.outline, Outline::Closed(_))
    }
}

/// Draw scenes on different "drawing contexts".
pub trait DrawScene {
    /// Add a scene to the drawing context.
    ///
    /// What this actually means depends on the context.
    /// A document will record it while a canvas might stroke it immediately.
    fn add_scene(&mut self, scene: &Scene);
}
