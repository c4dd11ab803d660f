/// A lightweight, serializable snapshot of the carousel state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// This is useful for restoring the selected item across frames or sessions without coupling the
/// carousel to any specific UI framework. Restoring always lands at rest: an in-flight drag or
/// snap animation is not resumed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub current_index: usize,
    pub offset_x: f32,
    pub is_dragging: bool,
    pub is_animating: bool,
}
