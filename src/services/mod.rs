// Service module exports

pub mod clock;
pub mod countdown;
pub mod effects;
pub mod notification;
pub mod settings;
