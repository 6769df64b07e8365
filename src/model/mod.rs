mod filter;
mod game;
mod match_item;
mod notification;
mod team;

pub use filter::*;
pub use game::*;
pub use match_item::*;
pub use notification::*;
pub use team::*;
