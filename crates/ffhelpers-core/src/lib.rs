pub mod census;
pub mod config;
pub mod display;
pub mod launch;
pub mod locale;
pub mod log;
pub mod mode;
pub mod window;

pub use census::{CloseDecision, count_clients, decide, is_display_of};
pub use display::DisplayTarget;
pub use mode::{CloseMode, UtilMode};
pub use window::{HelperResult, Window};
