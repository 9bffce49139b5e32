use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yew::AttrValue;

use crate::error::Error;

/// identifier of a message item, taken from the `id` attribute of its `<li>`.
///
/// always a single url path segment: ascii alphanumerics, `-` and `_` only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageId(AttrValue);

impl MessageId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for MessageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::InvalidMessageId(s.to_string()));
        }
        Ok(Self(AttrValue::from(id.to_string())))
    }
}

impl TryFrom<String> for MessageId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MessageId> for String {
    fn from(value: MessageId) -> Self {
        value.0.to_string()
    }
}

impl From<i64> for MessageId {
    fn from(value: i64) -> Self {
        Self(AttrValue::from(value.to_string()))
    }
}

impl Display for MessageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_message_id() {
        assert_eq!("42".parse::<MessageId>().unwrap().as_str(), "42");
        assert_eq!(" 42\n".parse::<MessageId>().unwrap(), MessageId::from(42));
        assert_eq!("msg_a-1".parse::<MessageId>().unwrap().to_string(), "msg_a-1");
    }

    #[test]
    fn test_reject_unsafe_message_id() {
        for id in ["", "   ", "4/2", "../likes", "42?x=1", "a b", "日本"] {
            assert_eq!(
                id.parse::<MessageId>(),
                Err(Error::InvalidMessageId(id.to_string())),
                "{id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_message_id_serde() {
        let id: MessageId = serde_json::from_str("\"17\"").unwrap();
        assert_eq!(id, MessageId::from(17));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"17\"");
        assert!(serde_json::from_str::<MessageId>("\"1/7\"").is_err());
    }
}
