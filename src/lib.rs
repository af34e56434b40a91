pub mod commands;
pub mod error;
pub mod summary;
pub mod templates;
pub mod util;
pub mod yy;
