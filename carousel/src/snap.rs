//! Gesture resolution math: classification, rounding and clamping of snap targets.

use crate::{DragEnd, GestureKind};

/// Default distance between the predicted and actual end location below which a release is
/// treated as a slow drag rather than a swipe.
pub const DEFAULT_SPEED_THRESHOLD: f32 = 100.0;

/// The resolved target of a released drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapTarget {
    pub kind: GestureKind,
    pub raw_index: i64,
    pub index: usize,
    pub target_offset: f32,
}

/// Rounds to the nearest integer, with ties rounded away from zero (`2.5 -> 3`, `-2.5 -> -3`).
///
/// NaN maps to `0`; values outside the `i64` range saturate.
pub fn round_half_away_from_zero(x: f32) -> i64 {
    if x.is_nan() {
        return 0;
    }
    let whole = x.trunc();
    let frac = x - whole;
    let rounded = if frac >= 0.5 {
        whole + 1.0
    } else if frac <= -0.5 {
        whole - 1.0
    } else {
        whole
    };
    // `as` saturates for out-of-range floats.
    rounded as i64
}

/// Clamps a raw index into `[0, count - 1]`. Returns `0` for an empty collection.
pub fn clamp_index(raw: i64, count: usize) -> usize {
    if raw <= 0 || count == 0 {
        return 0;
    }
    let last = count - 1;
    usize::try_from(raw).map_or(last, |i| i.min(last))
}

/// The row offset at which `index` is centered: `-(index * item_width)`.
pub fn rest_offset(index: usize, item_width: f32) -> f32 {
    -(index as f32 * item_width)
}

/// Classifies a release by its momentum. Releases with non-finite predictions are slow drags.
pub fn classify(end: &DragEnd, speed_threshold: f32) -> GestureKind {
    if end.momentum() >= speed_threshold && end.predicted_end_translation_x.is_finite() {
        GestureKind::Swipe
    } else {
        GestureKind::Drag
    }
}

/// Resolves the snap target for a drag released at `offset_x`.
///
/// Slow drags snap to the item nearest to the live offset. Swipes project the offset by the
/// predicted end translation first.
pub fn resolve(
    offset_x: f32,
    end: &DragEnd,
    item_width: f32,
    count: usize,
    speed_threshold: f32,
) -> SnapTarget {
    let kind = classify(end, speed_threshold);
    let projected = match kind {
        GestureKind::Drag => offset_x,
        GestureKind::Swipe => end.predicted_end_translation_x + offset_x,
    };
    let raw_index = round_half_away_from_zero(projected / -item_width);
    let index = clamp_index(raw_index, count);
    SnapTarget {
        kind,
        raw_index,
        index,
        target_offset: rest_offset(index, item_width),
    }
}
