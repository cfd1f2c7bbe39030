#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod draw;
pub mod editor;
pub mod export;
pub mod insert;
pub mod periodic;
pub mod point_store;
pub mod segment;

/// A position in the drawing's coordinate space
pub type Point = nalgebra::Vector2<f64>;

pub use crate::editor::{EditState, Editor, EditorConfig, PointerAction};
pub use crate::insert::{find_insertion, Insertion};
pub use crate::periodic::{fit, FitError, PeriodicSpline, SampledCurve};
pub use crate::point_store::PointStore;

#[cfg(test)]
mod tests {
    use crate::draw::{Outline, Scene};
    use crate::export::{export_svg, render_svg, CanvasSize, ExportError, DESCRIPTION, TITLE};
    use crate::segment::{closest_point_on_segment, distance_to_segment};
    use crate::{find_insertion, fit, Editor, EditorConfig, FitError, PeriodicSpline, Point, PointStore};
    use approx::assert_relative_eq;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn square_curve() {
        let curve = fit(&square(), 100).unwrap();
        let samples = curve.samples();
        assert_relative_eq!(samples[0], samples[99], epsilon = 1e-9);

        // Rounded quadrilateral: never far from the square's outline
        for p in samples {
            let center_distance = (p - Point::new(5.0, 5.0)).norm();
            assert!(center_distance > 4.9 && center_distance < 7.2, "{:?}", p);
        }

        let insertion = find_insertion(&square(), &Point::new(5.0, 0.0), 10.0).unwrap();
        assert_eq!(insertion.index, 1);
        assert!((insertion.point - Point::new(5.0, 0.0)).norm() < 2.5);
    }

    #[test]
    fn triangle_falls_back_to_polyline() {
        let square = square();
        let triangle = &square[..3];
        assert_eq!(fit(triangle, 100), Err(FitError::TooFewPoints(3)));

        let mut editor = Editor::with_points(EditorConfig::default(), triangle.iter().copied().collect());
        let scene = Scene::from_editor(&mut editor);
        assert_eq!(scene.outline, Outline::Dashed(triangle.to_vec()));
        assert_eq!(scene.markers.len(), 3);
    }

    #[test]
    fn coincident_neighbours_fall_back_and_refuse_export() {
        let mut points = square();
        points.insert(2, Point::new(10.0, 0.0));
        let mut editor = Editor::with_points(EditorConfig::default(), points.iter().copied().collect());

        let scene = Scene::from_editor(&mut editor);
        assert_eq!(scene.outline, Outline::Dashed(points.clone()));
        assert_eq!(scene.markers.len(), 5);

        let target = std::env::temp_dir().join("spline_drawer_degenerate.svg");
        let _ = std::fs::remove_file(&target);
        match export_svg(&mut editor, &target, CanvasSize::default()) {
            Err(ExportError::NoCurve(FitError::Degenerate(_))) => {}
            other => panic!("unexpected result {:?}", other),
        }
        assert!(!target.exists());

        // Removing the duplicate restores the curve
        editor.pointer_down(Point::new(10.0, 0.0));
        editor.pointer_move(Point::new(12.0, 5.0));
        editor.pointer_up();
        assert!(Scene::from_editor(&mut editor).is_closed());
        assert!(render_svg(&mut editor, CanvasSize::default()).is_ok());
    }

    #[test]
    fn far_click() {
        assert_eq!(find_insertion(&square(), &Point::new(1000.0, 1000.0), 10.0), None);
    }

    #[test]
    fn undo_on_empty() {
        let mut store = PointStore::new();
        store.remove_last();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn drag_changes_curve_locally() {
        let mut editor = Editor::with_points(EditorConfig::default(), square().into_iter().collect());
        let before = PeriodicSpline::fit(editor.points().points()).unwrap();

        editor.pointer_down(Point::new(10.0, 10.0));
        editor.pointer_move(Point::new(50.0, 50.0));
        editor.pointer_up();

        let after = PeriodicSpline::fit(editor.points().points()).unwrap();
        let knots = after.knots().to_vec();
        assert_relative_eq!(after.evaluate(knots[2]), Point::new(50.0, 50.0), epsilon = 1e-9);

        // Still passes through the untouched points
        for (i, p) in square().iter().enumerate().filter(|&(i, _)| i != 2) {
            assert_relative_eq!(after.evaluate(knots[i]), *p, epsilon = 1e-9);
        }
        assert!((before.evaluate(0.5) - after.evaluate(knots[2])).norm() > 40.0);
        assert_ne!(editor.fit(), fit(&square(), 100));
    }

    #[test]
    fn insertion_adds_exactly_one_point() {
        let config = EditorConfig {
            pick_radius: 3.0,
            ..Default::default()
        };
        let mut editor = Editor::with_points(config, square().into_iter().collect());
        for click in [Point::new(5.0, -1.5), Point::new(11.5, 5.0), Point::new(300.0, 0.0)] {
            let len = editor.points().len();
            editor.pointer_down(click);
            editor.pointer_up();
            assert_eq!(editor.points().len(), len + 1);
        }
        editor.undo();
        assert_eq!(editor.points().len(), 6);
    }

    #[test]
    fn segment_laws() {
        let p = Point::new(-2.0, 7.0);
        let a = Point::new(1.0, 3.0);
        assert_relative_eq!(distance_to_segment(&p, &a, &a), 5.0);
        assert_eq!(closest_point_on_segment(&p, &a, &a), a);
    }

    #[test]
    fn export_requires_closed_curve() {
        let mut editor = Editor::with_points(EditorConfig::default(), square()[..2].iter().copied().collect());
        let target = std::env::temp_dir().join("spline_drawer_refused.svg");
        let _ = std::fs::remove_file(&target);
        match export_svg(&mut editor, &target, CanvasSize::default()) {
            Err(ExportError::InsufficientPoints { found: 2 }) => {}
            other => panic!("unexpected result {:?}", other),
        }
        assert!(!target.exists());
    }

    #[test]
    fn export_writes_document() {
        let mut editor = Editor::with_points(EditorConfig::default(), square().into_iter().collect());
        let document = render_svg(&mut editor, CanvasSize { width: 320.0, height: 240.0 })
            .unwrap()
            .to_string();
        assert!(document.contains("width=\"320\" height=\"240\" viewBox=\"0 0 320 240\""));
        assert!(document.contains(&format!("<title>{}</title>", TITLE)));
        assert!(document.contains(&format!("<desc>{}</desc>", DESCRIPTION)));
        assert_eq!(document.matches("<circle").count(), 4);
        assert_eq!(document.matches("<path").count(), 1);
        assert!(!document.contains("stroke-dasharray"));

        let target = std::env::temp_dir().join("spline_drawer_export.svg");
        export_svg(&mut editor, &target, CanvasSize { width: 320.0, height: 240.0 }).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), document);
        let _ = std::fs::remove_file(&target);
    }
}
