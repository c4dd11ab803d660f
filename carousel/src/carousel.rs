use crate::snap;
use crate::{
    CarouselOptions, CarouselState, DragEnd, DragState, DragUpdate, ItemLayout, ItemRange,
    SnapResolution, Tween,
};

/// A headless, gesture-driven snapping carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or the item collection itself, only its `count`.
/// - Your adapter drives it by providing the viewport width, drag events and a clock.
/// - Rendering is exposed via iteration APIs (`for_each_item`, `for_each_visible_item`).
///
/// Drag lifecycle is a two-state machine (`Idle`, `Dragging`). Releasing a drag classifies it as
/// a slow drag or a swipe, resolves and clamps the target index, starts the snap animation and
/// notifies `on_index_changed`, all before `drag_end` returns.
///
/// For pointer-level gesture recognition and binding items to views, see the
/// `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    viewport_width: f32,
    current_index: usize,
    offset_x: f32,
    drag: DragState,
    tween: Option<Tween>,
}

impl Carousel {
    /// Creates a new carousel at rest on `options.initial_index` (clamped).
    pub fn new(options: CarouselOptions) -> Self {
        cdebug!(
            count = options.count,
            item_width = options.item_width,
            initial_index = options.initial_index,
            "Carousel::new"
        );
        let mut c = Self {
            options,
            viewport_width: 0.0,
            current_index: 0,
            offset_x: 0.0,
            drag: DragState::Idle,
            tween: None,
        };
        c.settle_on(c.options.initial_index);
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Any drag or snap animation in progress is dropped and the carousel is placed at rest on the
    /// current index, clamped to the new item count. This does not fire `on_index_changed`.
    pub fn set_options(&mut self, options: CarouselOptions) {
        self.options = options;
        ctrace!(
            count = self.options.count,
            item_width = self.options.item_width,
            "Carousel::set_options"
        );
        self.settle_on(self.current_index);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.update_options(|o| o.count = count);
    }

    fn settle_on(&mut self, index: usize) {
        self.drag = DragState::Idle;
        self.tween = None;
        if !self.is_enabled() {
            if self.options.count == 0 {
                cwarn!("Carousel: no items; gestures are ignored");
            } else {
                cwarn!(
                    item_width = self.options.item_width,
                    "Carousel: item width must be finite and positive; gestures are ignored"
                );
            }
            self.current_index = 0;
            self.offset_x = 0.0;
            return;
        }
        self.current_index = index.min(self.options.count - 1);
        self.offset_x = self.rest_offset(self.current_index);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn item_width(&self) -> f32 {
        self.options.item_width
    }

    /// Whether the carousel has something to lay out. Disabled carousels ignore gestures and emit
    /// no items.
    pub fn is_enabled(&self) -> bool {
        self.options.is_valid()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The horizontal translation applied to the row of items.
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Whether no drag or snap animation is in progress.
    pub fn is_at_rest(&self) -> bool {
        !self.is_dragging() && !self.is_animating()
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        // NaN fails the comparison and is treated as zero too.
        let width = if width > 0.0 && width.is_finite() {
            width
        } else {
            0.0
        };
        ctrace!(width, "Carousel::set_viewport_width");
        self.viewport_width = width;
    }

    /// Padding on each side of the row so that item 0 is centered at `offset_x == 0`.
    pub fn horizontal_padding(&self) -> f32 {
        (self.viewport_width - self.options.item_width) / 2.0
    }

    /// The offset at which `index` is centered.
    pub fn rest_offset(&self, index: usize) -> f32 {
        snap::rest_offset(index, self.options.item_width)
    }

    /// Starts a drag anchored on the current index.
    ///
    /// A running snap animation is cancelled. Calling this while already dragging is a no-op.
    pub fn drag_start(&mut self) {
        if !self.is_enabled() || self.is_dragging() {
            return;
        }
        ctrace!(anchor_index = self.current_index, "Carousel::drag_start");
        self.tween = None;
        self.drag = DragState::Dragging {
            anchor_index: self.current_index,
            translation_x: 0.0,
        };
    }

    /// Moves the row with the pointer. Starts a drag implicitly when idle.
    pub fn drag_update(&mut self, update: DragUpdate) {
        if !self.is_enabled() {
            return;
        }
        if !update.translation_x.is_finite() {
            cwarn!(
                translation_x = update.translation_x,
                "Carousel::drag_update: ignoring non-finite translation"
            );
            return;
        }
        self.drag_start();
        let DragState::Dragging { anchor_index, .. } = self.drag else {
            return;
        };
        self.drag = DragState::Dragging {
            anchor_index,
            translation_x: update.translation_x,
        };
        self.offset_x = update.translation_x + self.rest_offset(anchor_index);
    }

    /// Releases the drag: classifies it, snaps to the resolved index and notifies
    /// `on_index_changed`.
    ///
    /// The callback fires exactly once per completed drag, including when the index is unchanged.
    /// Returns `None` (and does not notify) when the carousel is disabled.
    pub fn drag_end(&mut self, end: DragEnd, now_ms: u64) -> Option<SnapResolution> {
        if !self.is_enabled() {
            return None;
        }
        if end.translation_x.is_finite() {
            self.drag_update(DragUpdate {
                translation_x: end.translation_x,
            });
        } else {
            self.drag_start();
        }

        let previous_index = self.current_index;
        let target = snap::resolve(
            self.offset_x,
            &end,
            self.options.item_width,
            self.options.count,
            self.options.speed_threshold,
        );
        cdebug!(
            kind = ?target.kind,
            offset_x = self.offset_x,
            momentum = end.momentum(),
            raw_index = target.raw_index,
            index = target.index,
            "Carousel::drag_end"
        );

        self.current_index = target.index;
        self.drag = DragState::Idle;
        self.start_snap(target.target_offset, now_ms);

        if let Some(cb) = &self.options.on_index_changed {
            cb(target.index);
        }

        Some(SnapResolution {
            kind: target.kind,
            previous_index,
            raw_index: target.raw_index,
            index: target.index,
            target_offset: target.target_offset,
        })
    }

    /// Handles a drag cancelled by the host (e.g. an interrupting system gesture).
    ///
    /// The current index is kept and the row animates back to its rest offset. No notification
    /// fires. Returns whether a drag was in progress.
    pub fn drag_cancel(&mut self, now_ms: u64) -> bool {
        if !self.is_dragging() {
            return false;
        }
        ctrace!(index = self.current_index, "Carousel::drag_cancel");
        self.drag = DragState::Idle;
        self.start_snap(self.rest_offset(self.current_index), now_ms);
        true
    }

    fn start_snap(&mut self, to: f32, now_ms: u64) {
        if self.options.snap_duration_ms == 0 || self.offset_x == to {
            self.tween = None;
            self.offset_x = to;
            return;
        }
        self.tween = Some(Tween::new(
            self.offset_x,
            to,
            now_ms,
            self.options.snap_duration_ms,
        ));
    }

    /// Advances the snap animation.
    ///
    /// Returns the new offset while an animation is running, `None` otherwise. The final tick lands
    /// exactly on the rest offset.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        self.offset_x = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.offset_x)
    }

    /// Jumps a running snap animation to its end.
    pub fn finish_animation(&mut self) {
        if let Some(tween) = self.tween.take() {
            self.offset_x = tween.to;
        }
    }

    /// Left edge of item `index` in viewport coordinates.
    pub fn item_x(&self, index: usize) -> Option<f32> {
        if !self.is_enabled() || index >= self.options.count {
            return None;
        }
        Some(self.horizontal_padding() + index as f32 * self.options.item_width + self.offset_x)
    }

    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        let x = self.item_x(index)?;
        Some(ItemLayout {
            index,
            x,
            width: self.options.item_width,
        })
    }

    /// The items intersecting `[0, viewport_width)` at the current offset.
    pub fn visible_range(&self) -> ItemRange {
        if !self.is_enabled() || self.viewport_width <= 0.0 {
            return ItemRange::default();
        }
        let w = self.options.item_width;
        let origin = self.horizontal_padding() + self.offset_x;
        let first = ((-origin) / w).floor();
        let last = ((self.viewport_width - origin) / w).ceil();
        let count = self.options.count as f32;
        // Float -> usize casts saturate, negative values land on 0.
        let start_index = first.clamp(0.0, count) as usize;
        let end_index = last.clamp(0.0, count) as usize;
        ItemRange {
            start_index,
            end_index: end_index.max(start_index),
        }
    }

    /// Calls `f` for every item, left to right.
    pub fn for_each_item(&self, mut f: impl FnMut(ItemLayout)) {
        if !self.is_enabled() {
            return;
        }
        for index in 0..self.options.count {
            if let Some(item) = self.item_layout(index) {
                f(item);
            }
        }
    }

    /// Calls `f` for the visible items plus `overscan` items on each side.
    pub fn for_each_visible_item(&self, mut f: impl FnMut(ItemLayout)) {
        let range = self.overscanned_range();
        for index in range.start_index..range.end_index {
            if let Some(item) = self.item_layout(index) {
                f(item);
            }
        }
    }

    pub fn overscanned_range(&self) -> ItemRange {
        let visible = self.visible_range();
        if visible.is_empty() {
            return visible;
        }
        ItemRange {
            start_index: visible.start_index.saturating_sub(self.options.overscan),
            end_index: visible
                .end_index
                .saturating_add(self.options.overscan)
                .min(self.options.count),
        }
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index,
            offset_x: self.offset_x,
            is_dragging: self.is_dragging(),
            is_animating: self.is_animating(),
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// The carousel lands at rest on `state.current_index` (clamped). `offset_x` is recomputed from
    /// the index rather than trusted, and no notification fires.
    pub fn restore_state(&mut self, state: CarouselState) {
        self.settle_on(state.current_index);
    }
}
