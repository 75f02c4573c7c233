pub mod alert_dialog;
pub mod loading_indicator;

pub use alert_dialog::*;
pub use loading_indicator::*;
