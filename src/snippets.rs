use crate::effect::Effect;

pub fn snippet(effect: Effect) -> &'static str {
    match effect {
        Effect::Cube => include_str!("../snippets/cube.tsx"),
        Effect::Stack => include_str!("../snippets/stack.tsx"),
        Effect::ZoomOut => include_str!("../snippets/zoom_out.tsx"),
        Effect::Standard => include_str!("../snippets/standard.tsx"),
        Effect::Multi => include_str!("../snippets/multiple.tsx"),
        Effect::Coverflow => include_str!("../snippets/coverflow.tsx"),
    }
}
