use std::rc::Rc;

use crate::config::LikeConfig;

pub use self::http::LikeHttp;
pub use self::likes::LikeApi;

mod http;
mod likes;

pub fn likes(config: LikeConfig) -> Rc<dyn LikeApi> {
    Rc::new(LikeHttp::new(config))
}
