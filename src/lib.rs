pub mod assets;
pub mod config;
pub mod contact;
pub mod content;
pub mod demo;
pub mod logging;
pub mod nav;
pub mod render;
pub mod server;
