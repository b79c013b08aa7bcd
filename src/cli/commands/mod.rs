mod command_result;
pub mod context;
pub mod find;
pub mod helper;
pub mod init;
pub mod missing;
pub mod remove;
pub mod rename;
pub mod show;
pub mod sync;
pub mod trans;

pub use command_result::*;
