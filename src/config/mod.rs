//! Configuration resolution

mod settings;

pub use settings::Settings;
