//! SRT subtitle parsing, serialization and segment windowing.

pub mod compose;
pub mod parser;
pub mod types;
pub mod window;

pub use compose::compose;
pub use parser::{parse_srt, parse_srt_file};
pub use types::SubtitleCue;
pub use window::window_cues;
