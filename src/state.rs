#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CarouselState {
    #[default]
    Idle,      // Autoplaying (or empty), no pointer session open
    Dragging,  // A pointer session is open, autoplay suspended
    Settling,  // Pointer released, resolving the snap target in the same tick
}
