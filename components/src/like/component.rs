use std::rc::Rc;

use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use warbler_sdk::api;
use warbler_sdk::config::LikeConfig;
use warbler_sdk::model::like::{LikeState, LIKE_CONTROL_CLASS};
use warbler_sdk::model::message::MessageId;

#[derive(Properties, Clone, PartialEq)]
pub struct LikeStarProps {
    pub message_id: MessageId,
    #[prop_or_default]
    pub liked: bool,
    pub config: Rc<LikeConfig>,
}

struct StarState(LikeState);

enum StarAction {
    Toggle,
    /// the parent rendered a new `liked` prop
    Reset(LikeState),
}

impl Reducible for StarState {
    type Action = StarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StarAction::Toggle => Rc::new(Self(self.0.toggle())),
            StarAction::Reset(state) if state == self.0 => self,
            StarAction::Reset(state) => Rc::new(Self(state)),
        }
    }
}

/// like control for client rendered message lists
#[function_component(LikeStar)]
pub fn like_star(props: &LikeStarProps) -> Html {
    let liked = props.liked;
    let state = use_reducer(move || StarState(LikeState::from_liked(liked)));
    let api = use_memo(props.config.clone(), |config| api::likes((**config).clone()));

    {
        let state = state.dispatcher();
        use_effect_with(liked, move |liked| {
            state.dispatch(StarAction::Reset(LikeState::from_liked(*liked)));
        });
    }

    let onclick = {
        let state = state.dispatcher();
        let message_id = props.message_id.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            // an enclosing delegated handler must not toggle again
            event.stop_propagation();

            let state = state.clone();
            let api = (*api).clone();
            let message_id = message_id.clone();
            spawn_local(async move {
                if let Err(err) = api.toggle_like(&message_id).await {
                    error!("toggle like of message {} failed: {}", message_id, err);
                }
                state.dispatch(StarAction::Toggle);
            });
        })
    };

    html! {
        <i class={classes!(LIKE_CONTROL_CLASS, state.0.class())} {onclick}></i>
    }
}
