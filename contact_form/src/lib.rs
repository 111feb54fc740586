pub mod commands;
pub mod environment;
pub mod events;
pub mod render;
