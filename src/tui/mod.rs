//! Terminal User Interface module
//!
//! Full-screen greeting display: the animation centered on the alternate
//! screen with source, countdown and key hints around it.

mod app;
mod theme;
mod widgets;

pub use app::App;
pub use theme::Theme;
