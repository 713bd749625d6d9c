//! Carousel simulation engine for the effect playground.
//!
//! [`CarouselController`] owns the position of one carousel and reacts to
//! pointer drags and the autoplay clock. [`project`] turns a snapshot of it
//! into per-slide transforms for one of six layouts, without touching any
//! state. Rendering is left to the host.

pub mod constants;
pub mod controller;
pub mod drag;
pub mod effect;
pub mod effects;
pub mod frame;
pub mod geometry;
pub mod offset;
pub mod projector;
pub mod snippets;
pub mod state;

pub use controller::{CarouselController, CarouselSnapshot};
pub use drag::{DragSession, PointerEvent, PointerKind, Settle};
pub use effect::{Easing, Effect, ParseEffectError, Transition};
pub use frame::{Frame, ProjectedSlide, project};
pub use geometry::{ContainerRatio, ImageAspect, ParseRatioError, Size};
pub use offset::normalized_offset;
pub use projector::{LayoutProjector, SlideContext, SlideTransform, Stage, TransformOrigin};
pub use state::CarouselState;
