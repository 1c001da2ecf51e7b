use super::summary::{compose_summary, subject, DEFAULT_SIGNATURE};
use crate::session::{FormError, Session};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Gmail web compose endpoint
pub const COMPOSE_BASE_URL: &str = "https://mail.google.com/mail/?view=cm&fs=1";

/// Characters left unescaped by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Addresses keep their `@` readable
const ADDRESS: &AsciiSet = &URI_COMPONENT.remove(b'@');

/// Who receives the summary and how it is signed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub recipients: Vec<String>,
    /// Copy list; `None` copies everyone in `recipients`
    pub cc: Option<Vec<String>>,
    pub signature: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            recipients: Vec::new(),
            cc: None,
            signature: DEFAULT_SIGNATURE.to_string(),
        }
    }
}

/// A ready-to-open email draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    /// Build the draft for every saved entry of the session.
    ///
    /// Fails with [`FormError::NothingToSend`] when no entry is saved.
    pub fn from_session(session: &Session, settings: &MailSettings) -> Result<Self, FormError> {
        if !session.any_saved() {
            return Err(FormError::NothingToSend);
        }

        let cc = settings
            .cc
            .clone()
            .unwrap_or_else(|| settings.recipients.clone());

        Ok(Self {
            to: settings.recipients.clone(),
            cc,
            subject: subject(session.date()),
            body: compose_summary(
                session.date(),
                session.saved_entries(),
                &settings.signature,
            ),
        })
    }

    /// Web compose URL with every field prefilled
    pub fn compose_url(&self) -> String {
        format!(
            "{COMPOSE_BASE_URL}&to={}&cc={}&su={}&body={}",
            encode_addresses(&self.to),
            encode_addresses(&self.cc),
            utf8_percent_encode(&self.subject, URI_COMPONENT),
            utf8_percent_encode(&self.body, URI_COMPONENT),
        )
    }
}

fn encode_addresses(addresses: &[String]) -> String {
    addresses
        .iter()
        .map(|a| utf8_percent_encode(a.trim(), ADDRESS).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_component_matches_js_unreserved_set() {
        let encoded = utf8_percent_encode("a b&c=d/e?-_.!~*'()", URI_COMPONENT).to_string();
        assert_eq!(encoded, "a%20b%26c%3Dd%2Fe%3F-_.!~*'()");
    }

    #[test]
    fn test_multibyte_is_utf8_encoded() {
        let encoded = utf8_percent_encode("📅", URI_COMPONENT).to_string();
        assert_eq!(encoded, "%F0%9F%93%85");
    }

    #[test]
    fn test_encode_addresses_keeps_at_and_commas() {
        let addrs = vec!["a@x.io".to_string(), " b+tag@y.io ".to_string()];
        assert_eq!(encode_addresses(&addrs), "a@x.io,b%2Btag@y.io");
    }

    #[test]
    fn test_compose_url_layout() {
        let draft = MailDraft {
            to: vec!["a@x.io".to_string()],
            cc: vec!["b@x.io".to_string()],
            subject: "Hi there".to_string(),
            body: "line1\nline2".to_string(),
        };
        assert_eq!(
            draft.compose_url(),
            "https://mail.google.com/mail/?view=cm&fs=1&to=a@x.io&cc=b@x.io&su=Hi%20there&body=line1%0Aline2"
        );
    }
}
