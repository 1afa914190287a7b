pub mod content;
pub mod copy;
pub mod counter;
pub mod easing;
pub mod scene;
pub mod scroll;
pub mod state;
pub mod throttle;
pub mod trophy;

pub use copy::CopyFeedback;
pub use counter::CountUp;
pub use scene::SceneState;
pub use scroll::Viewport;
pub use state::{CopyTarget, PageState};
pub use trophy::{PlaybackCommand, Side};
