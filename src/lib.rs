pub mod assets;
pub mod compute;
pub mod config;
pub mod controls;
pub mod entities;
pub mod error;
pub mod pool;
pub mod scene;
