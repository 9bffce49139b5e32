use log::error;
use web_sys::Element;

use warbler_sdk::api::LikeApi;
use warbler_sdk::error::Result;
use warbler_sdk::model::like::{LikeState, LIKED_CLASS};
use warbler_sdk::model::message::MessageId;

/// class list of a like control
pub trait StarIcon {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str) -> Result<()>;
    fn remove_class(&self, class: &str) -> Result<()>;
}

impl StarIcon for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<()> {
        self.class_list().add_1(class)?;
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        self.class_list().remove_1(class)?;
        Ok(())
    }
}

pub fn current_state(icon: &impl StarIcon) -> LikeState {
    LikeState::from_liked(icon.has_class(LIKED_CLASS))
}

/// swap the icon to the other state; afterwards exactly one of the two state classes is set
pub fn flip(icon: &impl StarIcon) -> LikeState {
    let current = current_state(icon);
    let next = current.toggle();
    // a malformed icon may carry both classes
    let swapped = icon
        .remove_class(current.class())
        .and_then(|_| icon.remove_class(next.class()))
        .and_then(|_| icon.add_class(next.class()));
    if let Err(err) = swapped {
        error!("flip like icon to {:?} failed: {}", next, err);
    }
    next
}

/// send the toggle request, then flip the icon whatever the outcome was
pub async fn toggle_like(
    api: &dyn LikeApi,
    icon: &impl StarIcon,
    message_id: &MessageId,
) -> LikeState {
    if let Err(err) = api.toggle_like(message_id).await {
        error!("toggle like of message {} failed: {}", message_id, err);
    }
    flip(icon)
}
