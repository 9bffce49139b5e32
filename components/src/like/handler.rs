use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};
use yew::Callback;

use warbler_sdk::api::LikeApi;
use warbler_sdk::error::{Error, Result};
use warbler_sdk::model::like::{LikeState, LIKE_CONTROL_SELECTOR};
use warbler_sdk::model::message::MessageId;

use super::star::toggle_like;

/// delegated click listener for the like controls of a message list.
///
/// one listener is registered on the container, the listener lives as long as the handler
pub struct LikeToggleHandler {
    api: Rc<dyn LikeApi>,
    on_toggle: Option<Callback<(MessageId, LikeState)>>,
    listener: Option<EventListener>,
}

impl LikeToggleHandler {
    pub fn new(api: Rc<dyn LikeApi>) -> Self {
        Self {
            api,
            on_toggle: None,
            listener: None,
        }
    }

    /// notified after every settled toggle
    pub fn on_toggle(mut self, callback: Callback<(MessageId, LikeState)>) -> Self {
        self.on_toggle = Some(callback);
        self
    }

    /// listen for clicks inside `container`, replacing any previous binding
    pub fn bind(&mut self, container: &Element) {
        let api = self.api.clone();
        let on_toggle = self.on_toggle.clone();
        let root = container.clone();
        let listener = EventListener::new_with_options(
            container,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| handle_click(event, &root, &api, &on_toggle),
        );
        self.listener = Some(listener);
    }

    pub fn unbind(&mut self) {
        self.listener = None;
    }

    pub fn is_bound(&self) -> bool {
        self.listener.is_some()
    }

    /// keep the listener registered until the page goes away
    pub fn forget(mut self) {
        if let Some(listener) = self.listener.take() {
            listener.forget();
        }
    }
}

fn handle_click(
    event: &Event,
    container: &Element,
    api: &Rc<dyn LikeApi>,
    on_toggle: &Option<Callback<(MessageId, LikeState)>>,
) {
    let Some(control) = event
        .target()
        .and_then(|target| utils::closest_within(&target, LIKE_CONTROL_SELECTOR, container))
    else {
        return;
    };
    event.prevent_default();

    let message_id = match message_id_of(&control) {
        Ok(id) => id,
        Err(err) => {
            warn!("ignore like click: {}", err);
            return;
        }
    };

    let api = api.clone();
    let on_toggle = on_toggle.clone();
    spawn_local(async move {
        let state = toggle_like(&*api, &control, &message_id).await;
        debug!("message {} is now {:?}", message_id, state);
        if let Some(on_toggle) = on_toggle {
            on_toggle.emit((message_id, state));
        }
    });
}

/// the `id` of the `<li>` owning the like control
pub fn message_id_of(control: &Element) -> Result<MessageId> {
    let item = utils::closest(control.as_ref(), "li").ok_or_else(|| {
        Error::InvalidMessageId("like control is not inside a message item".to_string())
    })?;
    item.id().parse()
}
