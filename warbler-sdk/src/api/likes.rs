use crate::error::Result;
use crate::model::message::MessageId;

#[async_trait::async_trait(?Send)]
pub trait LikeApi {
    /// like the message if the current user has not liked it yet, unlike it otherwise.
    /// the response body is not inspected
    async fn toggle_like(&self, message_id: &MessageId) -> Result<()>;
}
