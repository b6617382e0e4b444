pub mod admin;
pub mod enter_raffle;
pub mod fulfill_draw;
pub mod start_draw;
pub mod views;

pub use admin::*;
pub use enter_raffle::*;
pub use fulfill_draw::*;
pub use start_draw::*;
pub use views::*;
