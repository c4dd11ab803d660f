use std::collections::VecDeque;

use carousel::{DragEnd, DragUpdate};

/// Distance the pointer must travel before a press becomes a drag.
pub const DEFAULT_MINIMUM_DISTANCE: f32 = 10.0;

/// Per-millisecond velocity decay used to project momentum (a "normal" scroll deceleration).
pub const DEFAULT_DECELERATION_RATE: f32 = 0.998;

/// Only samples this recent contribute to the release velocity.
const VELOCITY_WINDOW_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    x: f32,
    t_ms: u64,
}

/// Turns raw horizontal pointer samples into carousel drag events.
///
/// Hosts without a native drag gesture feed it pointer down/move/up/cancel; it applies a small
/// activation distance and, on release, projects the pointer's recent velocity into the
/// predicted end location/translation that [`carousel::Carousel::drag_end`] classifies on.
#[derive(Clone, Debug)]
pub struct DragRecognizer {
    minimum_distance: f32,
    deceleration_rate: f32,
    start_x: Option<f32>,
    active: bool,
    samples: VecDeque<Sample>,
}

impl Default for DragRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DragRecognizer {
    pub fn new() -> Self {
        Self {
            minimum_distance: DEFAULT_MINIMUM_DISTANCE,
            deceleration_rate: DEFAULT_DECELERATION_RATE,
            start_x: None,
            active: false,
            samples: VecDeque::new(),
        }
    }

    pub fn with_minimum_distance(mut self, minimum_distance: f32) -> Self {
        self.minimum_distance = minimum_distance.max(0.0);
        self
    }

    /// Sets the per-millisecond velocity decay. Clamped to `[0, 0.9999]`.
    pub fn with_deceleration_rate(mut self, deceleration_rate: f32) -> Self {
        self.deceleration_rate = deceleration_rate.clamp(0.0, 0.9999);
        self
    }

    pub fn minimum_distance(&self) -> f32 {
        self.minimum_distance
    }

    pub fn deceleration_rate(&self) -> f32 {
        self.deceleration_rate
    }

    /// Whether a pointer is down (dragging or not).
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Whether the pointer travelled far enough to count as a drag.
    pub fn is_dragging(&self) -> bool {
        self.active
    }

    fn reset(&mut self) {
        self.start_x = None;
        self.active = false;
        self.samples.clear();
    }

    fn push_sample(&mut self, x: f32, t_ms: u64) {
        self.samples.push_back(Sample { x, t_ms });
        while let Some(front) = self.samples.front() {
            if t_ms.saturating_sub(front.t_ms) > VELOCITY_WINDOW_MS {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Current pointer velocity in px/ms, estimated over the last 100 ms of samples.
    pub fn velocity(&self) -> f32 {
        let (Some(first), Some(last)) = (self.samples.front(), self.samples.back()) else {
            return 0.0;
        };
        let dt = last.t_ms.saturating_sub(first.t_ms);
        if dt == 0 {
            return 0.0;
        }
        (last.x - first.x) / dt as f32
    }

    /// Distance a pointer moving at `velocity` (px/ms) travels before momentum decays.
    pub fn project(&self, velocity: f32) -> f32 {
        let r = self.deceleration_rate;
        velocity * r / (1.0 - r)
    }

    pub fn pointer_down(&mut self, x: f32, now_ms: u64) {
        self.reset();
        if !x.is_finite() {
            cwarn!(x, "DragRecognizer::pointer_down: ignoring non-finite location");
            return;
        }
        self.start_x = Some(x);
        self.push_sample(x, now_ms);
    }

    /// Records a pointer move. Returns an update once the drag is active.
    pub fn pointer_move(&mut self, x: f32, now_ms: u64) -> Option<DragUpdate> {
        let Some(start_x) = self.start_x else {
            cwarn!(x, "DragRecognizer::pointer_move without pointer_down");
            return None;
        };
        if !x.is_finite() {
            return None;
        }
        self.push_sample(x, now_ms);
        let translation_x = x - start_x;
        if !self.active {
            if translation_x.abs() < self.minimum_distance {
                return None;
            }
            ctrace!(start_x, translation_x, "DragRecognizer: drag began");
            self.active = true;
        }
        Some(DragUpdate { translation_x })
    }

    /// Records the release. Returns `None` when the press never became a drag (a tap).
    pub fn pointer_up(&mut self, x: f32, now_ms: u64) -> Option<DragEnd> {
        let start_x = self.start_x?;
        let x = if x.is_finite() {
            x
        } else {
            self.samples.back().map_or(start_x, |s| s.x)
        };
        self.push_sample(x, now_ms);
        let translation_x = x - start_x;
        if !self.active && translation_x.abs() < self.minimum_distance {
            self.reset();
            return None;
        }

        let velocity = self.velocity();
        let momentum = self.project(velocity);
        self.reset();
        cdebug!(
            translation_x,
            velocity,
            momentum,
            "DragRecognizer::pointer_up"
        );
        Some(DragEnd {
            translation_x,
            location_x: x,
            predicted_end_location_x: x + momentum,
            predicted_end_translation_x: translation_x + momentum,
        })
    }

    /// Drops the current press. Returns whether a drag was active.
    pub fn pointer_cancel(&mut self) -> bool {
        let was_active = self.active;
        self.reset();
        was_active
    }
}
