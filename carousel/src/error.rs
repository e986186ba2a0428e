/// Errors reported by [`crate::Carousel`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum CarouselError {
    #[error("the rendering surface holds no slides")]
    EmptySequence,

    #[error("slide width must be finite and positive, got {0}")]
    InvalidSlideWidth(f32),

    #[error("a transition is in flight; stop the carousel before changing the perspective")]
    TransitionInFlight,
}
