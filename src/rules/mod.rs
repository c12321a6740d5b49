//! Win and tie evaluation for the board model.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_win;
