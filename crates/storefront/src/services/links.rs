//! Outbound contact links.
//!
//! WhatsApp is an alternative to the stored inquiry: the link opens a chat
//! with a pre-filled message and writes nothing to the store.

use crate::config::ContactConfig;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Pre-rendered `tel:`, `mailto:` and `wa.me` links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    phone_display: String,
    email: String,
    whatsapp_digits: String,
}

impl ContactLinks {
    #[must_use]
    pub fn new(contact: &ContactConfig) -> Self {
        Self {
            phone_display: contact.phone.clone(),
            email: contact.email.clone(),
            whatsapp_digits: contact
                .whatsapp_number
                .chars()
                .filter(char::is_ascii_digit)
                .collect(),
        }
    }

    /// The phone number as printed on the page.
    #[must_use]
    pub fn phone_display(&self) -> &str {
        &self.phone_display
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// `tel:` link with spaces removed, e.g. `tel:+919358303029`.
    #[must_use]
    pub fn tel(&self) -> String {
        let number: String = self
            .phone_display
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("tel:{number}")
    }

    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Chat link, optionally with a pre-filled message.
    #[must_use]
    pub fn whatsapp(&self, text: Option<&str>) -> String {
        match text {
            Some(text) => format!(
                "{WHATSAPP_BASE}/{}?text={}",
                self.whatsapp_digits,
                urlencoding::encode(text)
            ),
            None => format!("{WHATSAPP_BASE}/{}", self.whatsapp_digits),
        }
    }

    /// Chat link asking to order `product_name`.
    #[must_use]
    pub fn whatsapp_order(&self, product_name: &str) -> String {
        self.whatsapp(Some(&order_message(product_name)))
    }
}

/// The pre-filled order message for a product.
#[must_use]
pub fn order_message(product_name: &str) -> String {
    format!("Hi, I would like to order {product_name}. Please provide more details.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> ContactLinks {
        ContactLinks::new(&ContactConfig::default())
    }

    #[test]
    fn test_tel_strips_spaces() {
        assert_eq!(links().tel(), "tel:+919358303029");
    }

    #[test]
    fn test_mailto() {
        assert_eq!(links().mailto(), "mailto:pureangan@gmail.com");
    }

    #[test]
    fn test_whatsapp_without_text() {
        assert_eq!(links().whatsapp(None), "https://wa.me/919358303029");
    }

    #[test]
    fn test_whatsapp_order_link_is_encoded() {
        assert_eq!(
            links().whatsapp_order("A2 Desi Ghee"),
            "https://wa.me/919358303029?text=Hi%2C%20I%20would%20like%20to%20order%20A2%20Desi%20Ghee.%20Please%20provide%20more%20details."
        );
    }

    #[test]
    fn test_whatsapp_number_keeps_digits_only() {
        let links = ContactLinks::new(&ContactConfig {
            whatsapp_number: "+91 93583 03029".to_string(),
            ..ContactConfig::default()
        });
        assert_eq!(links.whatsapp(None), "https://wa.me/919358303029");
    }

    #[test]
    fn test_order_message() {
        assert_eq!(
            order_message("Vermicompost"),
            "Hi, I would like to order Vermicompost. Please provide more details."
        );
    }
}
