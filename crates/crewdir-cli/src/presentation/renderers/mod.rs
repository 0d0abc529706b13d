pub mod board;
pub mod console;

pub use board::{BoardEvent, BoardRenderer};
pub use console::ConsoleRenderer;
