use std::sync::Arc;

use crate::snap::DEFAULT_SPEED_THRESHOLD;

/// A callback fired with the resolved index after every completed drag.
pub type OnIndexChangedCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// This type is cheap to clone: the callback is stored in an `Arc` so adapters can update a few
/// fields and call `Carousel::set_options` without reallocating closures.
pub struct CarouselOptions {
    pub count: usize,
    /// Layout width of every item, and the pixel-to-index ratio used when snapping.
    pub item_width: f32,
    /// The index shown before any gesture. Clamped to the item range.
    pub initial_index: usize,

    /// Releases whose predicted end location is closer than this to the actual end location are
    /// treated as slow drags; everything else is a swipe.
    pub speed_threshold: f32,

    /// Duration of the snap spring. `0` snaps instantly.
    pub snap_duration_ms: u64,

    /// Extra items emitted on each side of the visible range by
    /// `Carousel::for_each_visible_item`.
    pub overscan: usize,

    pub on_index_changed: Option<OnIndexChangedCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            item_width: self.item_width,
            initial_index: self.initial_index,
            speed_threshold: self.speed_threshold,
            snap_duration_ms: self.snap_duration_ms,
            overscan: self.overscan,
            on_index_changed: self.on_index_changed.clone(),
        }
    }
}

impl CarouselOptions {
    pub fn new(count: usize, item_width: f32) -> Self {
        Self {
            count,
            item_width,
            initial_index: 0,
            speed_threshold: DEFAULT_SPEED_THRESHOLD,
            snap_duration_ms: 550,
            overscan: 1,
            on_index_changed: None,
        }
    }

    /// Returns `false` when the configuration cannot be laid out (no items, or an item width
    /// that is not finite and positive). A carousel built from such options ignores gestures.
    pub fn is_valid(&self) -> bool {
        self.count > 0 && self.item_width.is_finite() && self.item_width > 0.0
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_speed_threshold(mut self, speed_threshold: f32) -> Self {
        self.speed_threshold = speed_threshold;
        self
    }

    pub fn with_snap_duration_ms(mut self, duration_ms: u64) -> Self {
        self.snap_duration_ms = duration_ms;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_on_index_changed(
        mut self,
        on_index_changed: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_changed = on_index_changed.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("item_width", &self.item_width)
            .field("initial_index", &self.initial_index)
            .field("speed_threshold", &self.speed_threshold)
            .field("snap_duration_ms", &self.snap_duration_ms)
            .field("overscan", &self.overscan)
            .finish_non_exhaustive()
    }
}
