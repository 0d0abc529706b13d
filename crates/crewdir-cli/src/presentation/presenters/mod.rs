pub mod board;
pub mod directory;

pub use board::build_board_view_model;
pub use directory::present_directory;
