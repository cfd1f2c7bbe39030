//! Small document model to render scenes as svg.

use crate::draw::{DrawScene, Outline, Scene, MARKER_RADIUS, STROKE_WIDTH};
use crate::Point;
use std::fmt::{self, Display, Formatter};

/// `(min x, min y, width, height)`
pub type ViewBox = (f64, f64, f64, f64);

/// An svg document
pub struct Svg {
    /// Width of the document in user units
    pub width: f64,

    /// Height of the document in user units
    pub height: f64,

    /// The visible area
    pub view_box: ViewBox,

    /// Content of the `<title>` element
    pub title: Option<String>,

    /// Content of the `<desc>` element
    pub description: Option<String>,

    /// Elements in drawing order
    pub elements: Vec<Box<dyn Display>>,
}

impl Svg {
    /// Creates an empty document whose view box covers `width` x `height` starting at the origin
    pub fn new(width: f64, height: f64) -> Self {
        Svg {
            width,
            height,
            view_box: (0.0, 0.0, width, height),
            title: None,
            description: None,
            elements: Vec::new(),
        }
    }

    /// Appends an element
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }
}

impl Display for Svg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>")?;
        writeln!(
            f,
            "<svg width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\" version=\"1.2\" baseProfile=\"tiny\">",
            self.width,
            self.height,
            self.view_box.0,
            self.view_box.1,
            self.view_box.2,
            self.view_box.3
        )?;
        if let Some(title) = &self.title {
            writeln!(f, "<title>{}</title>", Escaped(title))?;
        }
        if let Some(description) = &self.description {
            writeln!(f, "<desc>{}</desc>", Escaped(description))?;
        }
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")
    }
}

/// Escapes the characters which may not appear in xml text
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                c => write!(f, "{}", c)?,
            }
        }
        Ok(())
    }
}

/// An outlined circle
pub struct Circle {
    /// Center of the circle
    pub center: Point,
    /// Radius of the circle
    pub radius: f64,
    /// Color of the outline
    pub stroke_color: &'static str,
    /// Width of the outline
    pub width: f64,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"/>",
            self.center.x, self.center.y, self.radius, self.stroke_color, self.width
        )
    }
}

/// A `<path>` element
pub struct Path {
    /// Color of the line
    pub stroke_color: &'static str,
    /// Color of the enclosed area
    pub fill_color: &'static str,
    /// Width of the line
    pub width: f64,
    /// Value of `stroke-dasharray`, a solid line if `None`
    pub dash_array: Option<&'static str>,
    /// The path's `d` attribute
    pub instructions: Vec<PathInstruction>,
}

impl Default for Path {
    fn default() -> Self {
        Path {
            stroke_color: "black",
            fill_color: "none",
            width: 1.0,
            dash_array: None,
            instructions: Vec::with_capacity(2),
        }
    }
}

impl Path {
    /// A path visiting all `points` in order
    pub fn polyline(points: &[Point], closed: bool) -> Self {
        let mut instructions = Vec::with_capacity(points.len() + 1);
        let mut points = points.iter();
        if let Some(first) = points.next() {
            instructions.push(PathInstruction::MoveTo(*first));
            instructions.extend(points.map(|p| PathInstruction::LineTo(*p)));
            if closed {
                instructions.push(PathInstruction::Close);
            }
        }
        Path {
            instructions,
            ..Default::default()
        }
    }
}

/// The absolute path commands used by this crate
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathInstruction {
    /// Start a new subpath
    MoveTo(Point),
    /// Straight line to a point
    LineTo(Point),
    /// Straight line back to the start of the subpath
    Close,
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<path stroke=\"{}\" fill=\"{}\" stroke-width=\"{}\"",
            self.stroke_color, self.fill_color, self.width
        )?;
        if let Some(dash_array) = self.dash_array {
            write!(f, " stroke-dasharray=\"{}\"", dash_array)?;
        }
        write!(f, " d=\"")?;
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match instruction {
                PathInstruction::MoveTo(p) => write!(f, "M {},{}", p.x, p.y),
                PathInstruction::LineTo(p) => write!(f, "L {},{}", p.x, p.y),
                PathInstruction::Close => write!(f, "Z"),
            }?
        }
        writeln!(f, "\"/>")
    }
}

impl DrawScene for Svg {
    fn add_scene(&mut self, scene: &Scene) {
        let path = match &scene.outline {
            Outline::Closed(curve) => Path::polyline(curve, true),
            Outline::Dashed(points) => Path {
                dash_array: Some("6,4"),
                ..Path::polyline(points, false)
            },
        };
        if !path.instructions.is_empty() {
            self.add_elem(Path {
                width: STROKE_WIDTH,
                ..path
            });
        }
        for &center in &scene.markers {
            self.add_elem(Circle {
                center,
                radius: MARKER_RADIUS,
                stroke_color: "black",
                width: STROKE_WIDTH,
            });
        }
    }
}
