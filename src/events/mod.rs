pub mod pointer;
pub mod scroll;

pub use pointer::wire_copy_targets;
pub use scroll::{wire_resize, wire_scroll};
