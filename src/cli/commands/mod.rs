pub mod build;
mod command_result;
pub mod init;
pub mod lookup;
pub mod update;

pub use command_result::*;
