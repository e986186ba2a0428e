use crate::{AttachAt, ContainerStyle, Slide};

/// The host's rendering surface.
///
/// The surface owns the visual elements of the whole sequence; the engine only tells it which
/// slides are attached, in which order, and how each one is styled. The engine never reads
/// anything back besides [`Surface::slide_count`].
pub trait Surface {
    /// Length of the total sequence. Must not change for the lifetime of the carousel.
    fn slide_count(&self) -> usize;

    fn apply_container(&mut self, container: &ContainerStyle);

    /// Inserts `slide` at the front or the back of the rendered strip.
    ///
    /// The engine always attaches in an order that keeps the strip ascending by index.
    fn attach(&mut self, slide: &Slide, at: AttachAt);

    fn detach(&mut self, index: usize);

    /// Writes the visual state and geometry of an attached slide.
    fn update(&mut self, slide: &Slide);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn slide_count(&self) -> usize {
        (**self).slide_count()
    }

    fn apply_container(&mut self, container: &ContainerStyle) {
        (**self).apply_container(container);
    }

    fn attach(&mut self, slide: &Slide, at: AttachAt) {
        (**self).attach(slide, at);
    }

    fn detach(&mut self, index: usize) {
        (**self).detach(index);
    }

    fn update(&mut self, slide: &Slide) {
        (**self).update(slide);
    }
}
