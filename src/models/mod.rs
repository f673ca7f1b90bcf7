pub mod seat;
pub mod review;

pub use seat::{Seat, SeatKind};
pub use review::{LikeResponse, LikeStatus};
