use log::{debug, error, info};
use yew::Callback;

use components::like::LikeToggleHandler;
use warbler_sdk::api;
use warbler_sdk::config::LikeConfig;
use warbler_sdk::model::like::LikeState;
use warbler_sdk::model::message::MessageId;

/// server rendered message list
const MESSAGES_CONTAINER_ID: &str = "messages";

fn main() {
    let config = match LikeConfig::from_document() {
        Ok(config) => config,
        Err(err) => {
            wasm_logger::init(wasm_logger::Config::default());
            error!("likes disabled: {}", err);
            return;
        }
    };
    wasm_logger::init(wasm_logger::Config::new(config.log_level));

    let Some(container) = utils::get_element_by_id(MESSAGES_CONTAINER_ID) else {
        debug!("no #{} on this page", MESSAGES_CONTAINER_ID);
        return;
    };

    let mut handler = LikeToggleHandler::new(api::likes(config)).on_toggle(Callback::from(
        |(message_id, state): (MessageId, LikeState)| {
            debug!("message {} toggled to {:?}", message_id, state);
        },
    ));
    handler.bind(&container);
    info!("like handler bound to #{}", MESSAGES_CONTAINER_ID);
    // the list lives as long as the page
    handler.forget();
}
