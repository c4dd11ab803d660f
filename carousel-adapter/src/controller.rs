use std::fmt;
use std::sync::Arc;

use carousel::{Carousel, CarouselOptions, SnapResolution};

use crate::DragRecognizer;

/// A function mapping one item to its visual representation.
pub type ContentFn<T, V> = Arc<dyn Fn(&T) -> V + Send + Sync>;

/// One laid-out item, ready to be drawn at `x` (viewport coordinates).
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem<V> {
    pub index: usize,
    pub x: f32,
    pub width: f32,
    pub view: V,
}

/// A framework-neutral controller that binds an item collection and a content function to a
/// `carousel::Carousel`.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_width` when layout changes
/// - `on_pointer_down` / `on_pointer_move` / `on_pointer_up` / `on_pointer_cancel` for input
/// - `tick(now_ms)` each frame/timer tick while a snap animation runs
///
/// and draw the output of `render` (or `render_visible`).
pub struct Controller<T, V> {
    items: Vec<T>,
    content: ContentFn<T, V>,
    c: Carousel,
    recognizer: DragRecognizer,
}

impl<T, V> Controller<T, V> {
    /// Creates a controller with default snapping behaviour.
    ///
    /// `on_index_changed` fires with the resolved index after every completed drag.
    pub fn new(
        items: Vec<T>,
        item_width: f32,
        content: impl Fn(&T) -> V + Send + Sync + 'static,
        on_index_changed: impl Fn(usize) + Send + Sync + 'static,
    ) -> Self {
        let options = CarouselOptions::new(items.len(), item_width)
            .with_on_index_changed(Some(on_index_changed));
        Self::with_options(items, options, content)
    }

    /// Creates a controller from explicit options. `options.count` is replaced by `items.len()`.
    pub fn with_options(
        items: Vec<T>,
        mut options: CarouselOptions,
        content: impl Fn(&T) -> V + Send + Sync + 'static,
    ) -> Self {
        options.count = items.len();
        Self {
            items,
            content: Arc::new(content),
            c: Carousel::new(options),
            recognizer: DragRecognizer::new(),
        }
    }

    pub fn with_recognizer(mut self, recognizer: DragRecognizer) -> Self {
        self.recognizer = recognizer;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the items. The current index is clamped to the new collection.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.recognizer.pointer_cancel();
        self.items = items;
        self.c.set_count(self.items.len());
    }

    pub fn current_index(&self) -> usize {
        self.c.current_index()
    }

    pub fn current_item(&self) -> Option<&T> {
        self.items.get(self.c.current_index())
    }

    pub fn carousel(&self) -> &Carousel {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.c
    }

    pub fn recognizer(&self) -> &DragRecognizer {
        &self.recognizer
    }

    pub fn into_parts(self) -> (Vec<T>, Carousel) {
        (self.items, self.c)
    }

    pub fn is_animating(&self) -> bool {
        self.c.is_animating()
    }

    pub fn on_viewport_width(&mut self, width: f32) {
        self.c.set_viewport_width(width);
    }

    pub fn on_pointer_down(&mut self, x: f32, now_ms: u64) {
        self.recognizer.pointer_down(x, now_ms);
    }

    /// Returns `true` when the row moved.
    pub fn on_pointer_move(&mut self, x: f32, now_ms: u64) -> bool {
        let Some(update) = self.recognizer.pointer_move(x, now_ms) else {
            return false;
        };
        self.c.drag_update(update);
        self.c.is_dragging()
    }

    /// Releases the pointer. Returns the snap resolution when the press was a drag.
    pub fn on_pointer_up(&mut self, x: f32, now_ms: u64) -> Option<SnapResolution> {
        let end = self.recognizer.pointer_up(x, now_ms)?;
        self.c.drag_end(end, now_ms)
    }

    /// Cancels the press (e.g. the host stole the gesture). The row animates back to rest.
    pub fn on_pointer_cancel(&mut self, now_ms: u64) -> bool {
        self.recognizer.pointer_cancel();
        self.c.drag_cancel(now_ms)
    }

    /// Advances the snap animation. Returns the new offset while animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.c.tick(now_ms)
    }

    /// Renders every item, left to right. `content` is called once per index.
    pub fn render(&self) -> Vec<RenderedItem<V>> {
        let mut out = Vec::with_capacity(self.items.len());
        self.c.for_each_item(|it| {
            if let Some(item) = self.items.get(it.index) {
                out.push(RenderedItem {
                    index: it.index,
                    x: it.x,
                    width: it.width,
                    view: (self.content)(item),
                });
            }
        });
        out
    }

    /// Renders only the visible items (plus overscan).
    pub fn render_visible(&self) -> Vec<RenderedItem<V>> {
        let mut out = Vec::new();
        self.c.for_each_visible_item(|it| {
            if let Some(item) = self.items.get(it.index) {
                out.push(RenderedItem {
                    index: it.index,
                    x: it.x,
                    width: it.width,
                    view: (self.content)(item),
                });
            }
        });
        out
    }
}

impl<T: Clone, V> Clone for Controller<T, V> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            content: Arc::clone(&self.content),
            c: self.c.clone(),
            recognizer: self.recognizer.clone(),
        }
    }
}

impl<T: fmt::Debug, V> fmt::Debug for Controller<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("items", &self.items)
            .field("carousel", &self.c)
            .field("recognizer", &self.recognizer)
            .finish_non_exhaustive()
    }
}
