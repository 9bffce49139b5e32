pub use component::{LikeStar, LikeStarProps};
pub use handler::{message_id_of, LikeToggleHandler};
pub use star::{current_state, flip, toggle_like, StarIcon};

mod component;
mod handler;
mod star;
