pub mod entry;
pub mod logging;
pub mod media;
pub mod provider;
pub mod providers;
pub mod settings;
