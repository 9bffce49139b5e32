use async_trait::async_trait;
use gloo_net::http::Response;

pub use likes::*;

use crate::error::{Error, Result};

mod likes;

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        if self.ok() {
            Ok(self)
        } else {
            Err(Error::Status {
                status: self.status(),
                status_text: self.status_text(),
            })
        }
    }
}
