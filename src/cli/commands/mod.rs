pub mod check_duplicates;
mod command_result;
pub mod find;
pub mod generate;
pub mod helper;
pub mod init;
pub mod scan;
pub mod validate;

pub use command_result::*;
