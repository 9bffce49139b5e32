use async_trait::async_trait;
use gloo_net::http::Request;

use crate::api::likes::LikeApi;
use crate::config::LikeConfig;
use crate::error::Result;
use crate::model::like::LikeReq;
use crate::model::message::MessageId;

use super::RespStatus;

pub struct LikeHttp {
    config: LikeConfig,
}

impl LikeHttp {
    pub fn new(config: LikeConfig) -> Self {
        Self { config }
    }

    /// `POST {endpoint}/messages/{id}/likes` carrying the csrf token as json
    pub fn request(&self, message_id: &MessageId) -> Result<Request> {
        let request = LikeReq {
            csrf_token: self.config.csrf_token.clone(),
        };
        let request = Request::post(&self.config.likes_url(message_id)).json(&request)?;
        Ok(request)
    }
}

#[async_trait(?Send)]
impl LikeApi for LikeHttp {
    async fn toggle_like(&self, message_id: &MessageId) -> Result<()> {
        let request = self.request(message_id)?;
        log::debug!("toggle like: {}", request.url());
        request.send().await?.success().await?;
        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod test {
    use gloo_net::http::Method;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_request_carries_token() {
        let http = LikeHttp::new(LikeConfig::new("http://localhost:5001/api/", "tok"));

        let request = http.request(&MessageId::from(42)).unwrap();

        assert_eq!(request.url(), "http://localhost:5001/api/messages/42/likes");
        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.headers().get("content-type").as_deref(),
            Some("application/json")
        );
        assert_eq!(request.text().await.unwrap(), r#"{"csrf_token":"tok"}"#);
    }
}
