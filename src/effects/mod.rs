pub mod coverflow;
pub mod cube;
pub mod multi;
pub mod stack;
pub mod standard;
pub mod zoom_out;
