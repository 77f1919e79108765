//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SpesePaths;
pub use settings::Settings;
