use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const CONTACT_SUBJECT: &str = "Portfolio Contact";
/// Send status falls back to idle after this many milliseconds.
pub const STATUS_RESET_MS: u64 = 3000;

/// Bytes `encodeURIComponent` escapes: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    fn body(&self) -> String {
        format!(
            "From: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

impl SendStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sending => "Sending...",
            Self::Sent => "Sent!",
            Self::Idle | Self::Error => "Send",
        }
    }

    pub fn is_busy(self) -> bool {
        self == Self::Sending
    }
}

/// Percent encodes like `encodeURIComponent`.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// `mailto:` link that opens the visitor's mail client with the form filled in.
pub fn mailto_link(to: &str, form: &ContactForm) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        encode_component(CONTACT_SUBJECT),
        encode_component(&form.body())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("1+1=2"), "1%2B1%3D2");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("q&a"), "q%26a");
    }

    #[test]
    fn test_encode_component_keeps_unreserved_marks() {
        assert_eq!(encode_component("Hi! (it's me)~*"), "Hi!%20(it's%20me)~*");
        assert_eq!(encode_component("a-b_c.d"), "a-b_c.d");
        assert_eq!(encode_component("駆動"), "%E9%A7%86%E5%8B%95");
    }

    #[test]
    fn test_mailto_link() {
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi there".to_string(),
        };
        assert_eq!(
            mailto_link("me@example.com", &form),
            "mailto:me@example.com?subject=Portfolio%20Contact\
             &body=From%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0AHi%20there"
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SendStatus::default().label(), "Send");
        assert_eq!(SendStatus::Sending.label(), "Sending...");
        assert_eq!(SendStatus::Sent.label(), "Sent!");
        assert_eq!(SendStatus::Error.label(), "Send");
        assert!(SendStatus::Sending.is_busy());
    }
}
