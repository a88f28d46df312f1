//! Domain data: configuration and the skin palette

pub mod config;
pub mod skins;
