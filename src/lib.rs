pub mod install;
pub mod package;
pub mod runtime;
