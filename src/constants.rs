pub type Millis = u64;

pub const WINDOW_WIDTH: i32 = 1280;            // Default playground window width
pub const WINDOW_HEIGHT: i32 = 800;            // Default playground window height
pub const FPS: u32 = 60;                       // Frames per second

pub const AUTOPLAY_MIN_MS: Millis = 500;       // Fastest autoplay interval
pub const AUTOPLAY_MAX_MS: Millis = 8000;      // Slowest autoplay interval
pub const AUTOPLAY_DEFAULT_MS: Millis = 4000;  // Interval used when none is given
pub const AUTOPLAY_STEP_MS: Millis = 100;      // Speed slider step

pub const FLICK_MAX_DURATION_MS: Millis = 300; // Drags shorter than this may flick
pub const FLICK_MIN_DISTANCE_PX: f64 = 40.0;   // ...if they travelled further than this

pub const FALLBACK_CARD_WIDTH: f64 = 300.0;    // Card width when the container is unmeasured

pub const TRANSITION_MS: Millis = 700;         // Eased settle for programmatic index changes
pub const STACK_TRANSITION_MS: Millis = 500;   // Stack settles a little faster

pub const CUBE_FACE_WIDTH: f64 = 280.0;        // Fixed cube face width (also its card width)
pub const CUBE_FACE_SPACING: f64 = 50.0;       // Gap between adjacent faces
pub const CUBE_MIN_SIDES: usize = 3;           // Never build a polygon with fewer sides
pub const CUBE_CULL_DEG: f64 = 110.0;          // Faces turned further than this are hidden
pub const CUBE_TILT_DEG: f64 = -2.0;           // Stage tilt around X
pub const CUBE_PERSPECTIVE: f64 = 2500.0;      // Perspective distance for the cube stage
pub const COVERFLOW_PERSPECTIVE: f64 = 1200.0; // Perspective distance for coverflow
pub const COVERFLOW_DEPTH_LAYERS: u8 = 5;      // Thickness planes stacked behind each cover
