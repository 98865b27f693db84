mod persistence;
mod service;

pub use service::SettingsService;
