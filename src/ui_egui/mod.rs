mod app;
pub mod confetti;
pub mod theme;
pub mod views;

pub use app::BirthdayApp;
