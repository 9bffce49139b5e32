use serde::{Deserialize, Serialize};
use yew::AttrValue;

/// class carried by every clickable like control
pub const LIKE_CONTROL_CLASS: &str = "messages-like";
/// selector used to resolve a like control from a click target
pub const LIKE_CONTROL_SELECTOR: &str = ".messages-like";
/// outline star
pub const UNLIKED_CLASS: &str = "bi-star";
/// filled star
pub const LIKED_CLASS: &str = "bi-star-fill";

/// visual state of a like control; the two classes are mutually exclusive
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikeState {
    #[default]
    Unliked,
    Liked,
}

impl LikeState {
    pub fn from_liked(liked: bool) -> Self {
        if liked {
            Self::Liked
        } else {
            Self::Unliked
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Unliked => Self::Liked,
            Self::Liked => Self::Unliked,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Unliked => UNLIKED_CLASS,
            Self::Liked => LIKED_CLASS,
        }
    }
}

/// body of `POST /messages/{id}/likes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeReq {
    pub csrf_token: AttrValue,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for state in [LikeState::Unliked, LikeState::Liked] {
            assert_ne!(state.toggle(), state);
            assert_eq!(state.toggle().toggle(), state);
        }
    }

    #[test]
    fn test_class() {
        assert_eq!(LikeState::default().class(), "bi-star");
        assert_eq!(LikeState::from_liked(true).class(), "bi-star-fill");
        assert_eq!(LikeState::from_liked(false), LikeState::Unliked);
    }

    #[test]
    fn test_like_req_body() {
        let req = LikeReq {
            csrf_token: AttrValue::from("tok"),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "csrf_token": "tok" })
        );
    }
}
