pub mod config;
pub mod create;
pub mod edit;
pub mod export;
pub mod logs;
pub mod scan;
pub mod show;
pub mod sprite;
