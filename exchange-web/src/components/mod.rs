//! UI Components

pub mod tab_bar;
pub mod update_prompt;

pub use tab_bar::TabBar;
pub use update_prompt::UpdatePrompt;
