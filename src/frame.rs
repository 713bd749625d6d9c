use crate::controller::CarouselSnapshot;
use crate::effect::Transition;
use crate::projector::{SlideContext, SlideTransform, Stage};

/// One gallery image with its transform for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedSlide<'a, I> {
    pub index: usize,
    pub image: &'a I,
    pub transform: SlideTransform,
}

impl<I> ProjectedSlide<'_, I> {
    pub fn visible(&self) -> bool {
        self.transform.visible
    }

    pub fn z_index(&self) -> i32 {
        self.transform.z_index
    }
}

/// Everything the renderer needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a, I> {
    /// Every image in gallery order; culled ones have `visible == false`.
    pub slides: Vec<ProjectedSlide<'a, I>>,
    pub stage: Stage,
    pub transition: Transition,
    /// Gallery position of the active image, for pagination dots.
    pub active_slot: Option<usize>,
}

impl<'a, I> Frame<'a, I> {
    pub fn empty() -> Self {
        Self {
            slides: Vec::new(),
            stage: Stage::FLAT,
            transition: Transition::INSTANT,
            active_slot: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = &ProjectedSlide<'a, I>> {
        self.slides.iter().filter(|s| s.visible())
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible().map(|s| s.index).collect()
    }

    /// Visible slides back to front. Equal z-indices keep gallery order.
    pub fn paint_order(&self) -> Vec<&ProjectedSlide<'a, I>> {
        let mut slides: Vec<_> = self.visible().collect();
        slides.sort_by_key(|s| s.z_index());
        slides
    }
}

/// Projects every image of the gallery for the given controller snapshot.
///
/// Pure: reads only its arguments. An empty gallery or a non-finite drag
/// yields an empty frame.
pub fn project<'a, I>(images: &'a [I], snapshot: &CarouselSnapshot) -> Frame<'a, I> {
    let total = images.len();
    if total == 0 || !snapshot.drag_fraction.is_finite() {
        return Frame::empty();
    }
    let projector = snapshot.effect.projector();
    let slides = images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let ctx = SlideContext {
                index,
                active_index: snapshot.active_index,
                drag_fraction: snapshot.drag_fraction,
                total,
                dragging: snapshot.dragging,
            };
            ProjectedSlide { index, image, transform: projector.project(&ctx) }
        })
        .collect();

    Frame {
        slides,
        stage: projector.stage(total),
        transition: snapshot.effect.transition(snapshot.dragging),
        active_slot: Some(snapshot.active_index.rem_euclid(total as i64) as usize),
    }
}
