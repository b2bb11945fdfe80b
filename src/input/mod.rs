pub mod command;
pub mod handler;

pub use command::Command;
pub use handler::handle_input;
