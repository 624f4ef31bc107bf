pub mod config;

pub use config::{LightConfig, SceneConfig};
