use once_cell::sync::Lazy;
use spline_drawer::Point;

/// Points generated randomly around a circle, so neighbours never coincide
/// ```python
/// from math import cos, sin, pi
/// from random import random
/// for i in range(10):
///     r = 100 + (random()-0.5)*40
///     print(f"({r*cos(i*pi/5):.5f}, {r*sin(i*pi/5):.5f}),")
/// ```
pub static POINTS: [(f64, f64); 10] = [
    ( 108.31201,    0.00000),
    (  73.41928,   53.34208),
    (  27.59102,   84.91630),
    ( -33.74455,  103.85568),
    ( -94.83297,   68.90080),
    ( -87.02350,    0.00000),
    ( -93.95210,  -68.26044),
    ( -30.67293,  -94.40178),
    (  36.15834, -111.28347),
    (  91.01254,  -66.12486),
];

pub static SHAPES: Lazy<Shapes> = Lazy::new(Shapes::new);
#[allow(non_snake_case)]
pub struct Shapes {
    pub SQUARE: Vec<Point>,
    pub RING: Vec<Point>,
    pub LARGE: Vec<Point>,
}
impl Shapes {
    pub fn new() -> Shapes {
        let ring: Vec<Point> = POINTS.iter().map(|&(x, y)| Point::new(x, y)).collect();
        Shapes {
            SQUARE: vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            // Same ring traversed four times at increasing scale
            LARGE: (1..=4)
                .flat_map(|scale| ring.iter().map(move |p| p * (scale as f64)))
                .collect(),
            RING: ring,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec<Point>> {
        [&self.SQUARE, &self.RING, &self.LARGE].into_iter()
    }
}
