pub mod animate;
#[cfg(feature = "browser")]
pub mod browser;
pub mod config;
pub mod dom;
pub mod error;
pub mod location;
pub mod nav;
pub mod registry;
pub mod render;
