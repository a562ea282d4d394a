//! WhatsApp deep links.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Number the storefront receives orders on when none is configured.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "97400000000";

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// The messaging endpoint orders are handed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChannel {
    phone_number: String,
}

impl OrderChannel {
    /// Create a channel for an international number. Separators and a
    /// leading `+` are stripped; anything else must be a digit.
    pub fn new(phone_number: &str) -> Result<Self, CommerceError> {
        let digits: String = phone_number
            .chars()
            .filter(|c| !matches!(c, '+' | ' ' | '-' | '(' | ')'))
            .collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::Validation(format!(
                "invalid WhatsApp number: {phone_number}"
            )));
        }
        Ok(Self {
            phone_number: digits,
        })
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Build `https://wa.me/<number>?text=<encoded>` for a composed message.
    ///
    /// Refuses empty or whitespace-only messages.
    pub fn link(&self, message: &str) -> Result<String, CommerceError> {
        if message.trim().is_empty() {
            return Err(CommerceError::EmptyOrderMessage);
        }
        Ok(format!(
            "{}/{}?text={}",
            WHATSAPP_BASE_URL,
            self.phone_number,
            urlencoding::encode(message)
        ))
    }
}

impl Default for OrderChannel {
    fn default() -> Self {
        Self {
            phone_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_encodes_text() {
        let channel = OrderChannel::default();
        let url = channel.link("Hello,\nColor: Black & White").unwrap();
        assert_eq!(
            url,
            "https://wa.me/97400000000?text=Hello%2C%0AColor%3A%20Black%20%26%20White"
        );
    }

    #[test]
    fn test_link_encodes_non_ascii() {
        let url = OrderChannel::default().link("شكرًا").unwrap();
        assert!(url.starts_with("https://wa.me/97400000000?text=%D8%B4"));
        assert!(url.is_ascii());
    }

    #[test]
    fn test_empty_message_refused() {
        let channel = OrderChannel::default();
        assert!(matches!(channel.link(""), Err(CommerceError::EmptyOrderMessage)));
        assert!(matches!(channel.link(" \n"), Err(CommerceError::EmptyOrderMessage)));
    }

    #[test]
    fn test_number_normalized() {
        let channel = OrderChannel::new("+974 4400-9000").unwrap();
        assert_eq!(channel.phone_number(), "97444009000");
    }

    #[test]
    fn test_number_rejected() {
        assert!(OrderChannel::new("").is_err());
        assert!(OrderChannel::new("call me").is_err());
    }
}
