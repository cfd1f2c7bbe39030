//! The editing session turning pointer events into changes of the control points.

use crate::insert::{find_insertion_with_resolution, Insertion, HIT_TEST_RESOLUTION};
use crate::periodic::{self, FitError, SampledCurve, DEFAULT_RESOLUTION, MIN_POINTS};
use crate::point_store::PointStore;
use crate::Point;
use log::{debug, trace, warn};

/// Tunable distances and resolutions of an [`Editor`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorConfig {
    /// Manhattan distance below which a click grabs an existing point
    pub pick_radius: f64,

    /// Distance below which a click is considered to be on the curve
    pub insert_threshold: f64,

    /// Number of samples for the rendered curve
    pub display_resolution: usize,

    /// Number of samples when checking whether a click hit the curve
    pub hit_test_resolution: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            pick_radius: 10.0,
            insert_threshold: 10.0,
            display_resolution: DEFAULT_RESOLUTION,
            hit_test_resolution: HIT_TEST_RESOLUTION,
        }
    }
}

/// What the editor is currently doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditState {
    /// Waiting for the next click
    Idle,

    /// The point with this index follows the pointer
    Dragging(usize),
}

/// What a pointer down event did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerAction {
    /// Grabbed an existing point
    StartedDrag(usize),

    /// Inserted a new point on the curve
    Inserted(Insertion),

    /// Added a new point at the end
    Appended(Point),

    /// Nothing happened because a drag is still in progress or the position isn't finite
    Ignored,
}

/// Editing session for a single closed curve
#[derive(Clone, Debug)]
pub struct Editor {
    config: EditorConfig,
    points: PointStore,
    state: EditState,

    /// Incremented on every change to `points`
    generation: u64,

    /// Fit for the generation stored next to it
    cache: Option<(u64, Result<SampledCurve, FitError>)>,
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new(EditorConfig::default())
    }
}

impl Editor {
    /// Creates an idle editor without any points
    pub fn new(config: EditorConfig) -> Self {
        Editor {
            config,
            points: PointStore::new(),
            state: EditState::Idle,
            generation: 0,
            cache: None,
        }
    }

    /// Creates an idle editor starting with `points`
    pub fn with_points(config: EditorConfig, points: PointStore) -> Self {
        Editor {
            points,
            ..Editor::new(config)
        }
    }

    /// Handles the pointer being pressed at `pos`.
    ///
    /// Grabbing an existing point wins over inserting onto the curve which wins over appending.
    pub fn pointer_down(&mut self, pos: Point) -> PointerAction {
        if let EditState::Dragging(index) = self.state {
            debug!("Ignoring pointer down while dragging point {}", index);
            return PointerAction::Ignored;
        }
        if !pos.x.is_finite() || !pos.y.is_finite() {
            warn!("Ignoring pointer down at non finite position ({}, {})", pos.x, pos.y);
            return PointerAction::Ignored;
        }

        if let Some(index) = self.points.hit_test_point(&pos, self.config.pick_radius) {
            debug!("Start dragging point {}", index);
            self.state = EditState::Dragging(index);
            return PointerAction::StartedDrag(index);
        }

        let insertion = find_insertion_with_resolution(
            self.points.points(),
            &pos,
            self.config.insert_threshold,
            self.config.hit_test_resolution,
        );
        let action = match insertion {
            Some(insertion) => {
                debug!(
                    "Inserting ({}, {}) at index {}",
                    insertion.point.x, insertion.point.y, insertion.index
                );
                self.points.insert_at(insertion.index, insertion.point);
                PointerAction::Inserted(insertion)
            }
            None => {
                debug!("Appending ({}, {})", pos.x, pos.y);
                self.points.append(pos);
                PointerAction::Appended(pos)
            }
        };
        self.changed();
        action
    }

    /// Handles the pointer moving to `pos`. Only has an effect while dragging.
    pub fn pointer_move(&mut self, pos: Point) {
        if let EditState::Dragging(index) = self.state {
            self.points.move_to(index, pos);
            self.changed();
        }
    }

    /// Handles the pointer being released
    pub fn pointer_up(&mut self) {
        if let EditState::Dragging(index) = self.state {
            debug!("Stop dragging point {}", index);
        }
        self.state = EditState::Idle;
    }

    /// Removes the last point.
    ///
    /// A drag in progress is abandoned, since the dragged point might be the one removed.
    pub fn undo(&mut self) -> Option<Point> {
        self.state = EditState::Idle;
        let removed = self.points.remove_last();
        if removed.is_some() {
            debug!("Undo, {} points left", self.points.len());
            self.changed();
        }
        removed
    }

    fn changed(&mut self) {
        self.generation += 1;
    }

    /// The fitted curve for the current points, recomputed only if the points changed.
    ///
    /// Fails with fewer than 4 points or a degenerate configuration,
    /// in which case the points should be drawn as a plain polyline.
    pub fn curve(&mut self) -> Result<&SampledCurve, &FitError> {
        let generation = self.generation;
        let (_, result) = match self.cache.take() {
            Some(entry) if entry.0 == generation => self.cache.insert(entry),
            _ => {
                trace!("Refitting curve for generation {}", generation);
                let result = periodic::fit(self.points.points(), self.config.display_resolution);
                if let Err(err) = &result {
                    if self.points.len() >= MIN_POINTS {
                        warn!("Could not fit curve: {}", err);
                    }
                }
                self.cache.insert((generation, result))
            }
        };
        result.as_ref()
    }

    /// Fits the curve without touching the cache
    pub fn fit(&self) -> Result<SampledCurve, FitError> {
        periodic::fit(self.points.points(), self.config.display_resolution)
    }

    /// The control points
    pub fn points(&self) -> &PointStore {
        &self.points
    }

    /// The current state
    pub fn state(&self) -> EditState {
        self.state
    }

    /// The configuration
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Counter incremented on every change of the points
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
