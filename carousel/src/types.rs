/// A live drag update, reported by the host on every pointer move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragUpdate {
    /// Horizontal displacement since the drag started.
    pub translation_x: f32,
}

/// The final state of a drag, reported by the host when the pointer is released.
///
/// The predicted values are a velocity-extrapolated projection of where the gesture would have
/// ended without further input. `carousel-adapter` ships a recognizer that computes them from raw
/// pointer samples for hosts that don't provide them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragEnd {
    /// Horizontal displacement since the drag started.
    pub translation_x: f32,
    /// Pointer location at release.
    pub location_x: f32,
    /// Projected pointer location after momentum.
    pub predicted_end_location_x: f32,
    /// Projected displacement after momentum.
    pub predicted_end_translation_x: f32,
}

impl DragEnd {
    /// Distance between the projected and the actual end location.
    pub fn momentum(&self) -> f32 {
        (self.predicted_end_location_x - self.location_x).abs()
    }
}

/// How a released drag was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureKind {
    /// Negligible momentum: snap to the item nearest to the live offset.
    Drag,
    /// Meaningful momentum: snap to the item nearest to the projected offset.
    Swipe,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// `current_index` when the drag started.
        anchor_index: usize,
        translation_x: f32,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// The outcome of a released drag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapResolution {
    pub kind: GestureKind,
    pub previous_index: usize,
    /// The rounded, unclamped target index.
    pub raw_index: i64,
    pub index: usize,
    /// The rest offset the snap animation settles on.
    pub target_offset: f32,
}

impl SnapResolution {
    pub fn changed(&self) -> bool {
        self.index != self.previous_index
    }
}

/// Viewport-space placement of a single item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayout {
    pub index: usize,
    /// Left edge, relative to the viewport (includes padding and the current offset).
    pub x: f32,
    pub width: f32,
}

impl ItemLayout {
    pub fn end(&self) -> f32 {
        self.x + self.width
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl ItemRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..self.end_index).contains(&index)
    }
}
