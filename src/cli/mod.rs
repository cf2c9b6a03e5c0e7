pub mod command;
pub mod pack;
