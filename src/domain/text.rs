//! Display helpers for the customer view: message previews, referrer labels,
//! address lines and discount quantities.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::ports::Translator;

pub const MESSAGE_PREVIEW_LENGTH: usize = 75;
pub const EMPTY_COMPANY_PLACEHOLDER: &str = "--";

const FEATURE_DOMAIN: &str = "Admin.Orderscustomers.Feature";

static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]*);").unwrap());

// A `<` followed by a space is text ("1 < 2"), not a tag. Unterminated tags
// run to the end of the input.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|$)|<[a-zA-Z/!?][^>]*(?:>|$)").unwrap());

static URL_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://(?:[^@/?#]*@)?(\[[^\]]*\]|[^:/?#]*)").unwrap()
});

/// Decode HTML entities, except quotes which stay encoded.
pub fn decode_entities(input: &str) -> String {
    ENTITY
        .replace_all(input, |caps: &Captures| {
            let decoded = html_escape::decode_html_entities(&caps[0]);
            match decoded.as_ref() {
                "\"" | "'" => caps[0].to_string(),
                _ => decoded.into_owned(),
            }
        })
        .into_owned()
}

pub fn strip_tags(input: &str) -> String {
    TAG.replace_all(input, "").into_owned()
}

/// Plain-text preview of a support message, at most 75 characters long.
pub fn message_preview(raw: &str) -> String {
    strip_tags(&decode_entities(raw))
        .chars()
        .take(MESSAGE_PREVIEW_LENGTH)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStatus {
    Open,
    Closed,
    Pending1,
    Pending2,
    Other(String),
}

impl MessageStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "open" => MessageStatus::Open,
            "closed" => MessageStatus::Closed,
            "pending1" => MessageStatus::Pending1,
            "pending2" => MessageStatus::Pending2,
            other => MessageStatus::Other(other.to_string()),
        }
    }

    /// Display label; unknown codes are shown as they are stored.
    pub fn label(&self, translator: &dyn Translator) -> String {
        let message = match self {
            MessageStatus::Open => "Open",
            MessageStatus::Closed => "Closed",
            MessageStatus::Pending1 => "Pending 1",
            MessageStatus::Pending2 => "Pending 2",
            MessageStatus::Other(code) => return code.clone(),
        };
        translator.trans(message, FEATURE_DOMAIN)
    }
}

/// Host of a referrer URL with a leading `www.` removed.
///
/// Returns `None` when no referrer was recorded and an empty string when the
/// referrer has no recognisable host.
pub fn referrer_host(referer: Option<&str>) -> Option<String> {
    let referer = referer.map(str::trim).filter(|r| !r.is_empty())?;
    let host = URL_HOST
        .captures(referer)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or_default();
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

pub fn company_label(company: Option<&str>) -> String {
    match company {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => EMPTY_COMPANY_PLACEHOLDER.to_string(),
    }
}

pub fn full_address(address1: &str, address2: Option<&str>, postcode: Option<&str>, city: &str) -> String {
    format!(
        "{} {} {} {}",
        address1,
        address2.unwrap_or_default(),
        postcode.unwrap_or_default(),
        city
    )
}

/// Remaining uses of a cart rule for one customer. A rule whose global
/// quantity is exhausted has none left, whatever the per-user count says.
pub fn available_quantity(quantity: i32, quantity_for_user: i32) -> i32 {
    if quantity > 0 {
        quantity_for_user
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Translator for Upper {
        fn trans(&self, message: &str, _domain: &str) -> String {
            message.to_uppercase()
        }
    }

    #[test]
    fn preview_strips_tags_after_decoding() {
        assert_eq!(
            message_preview("<p>Hello &lt;b&gt;there&lt;/b&gt; &amp; welcome</p>"),
            "Hello there & welcome"
        );
    }

    #[test]
    fn preview_keeps_short_plain_text() {
        assert_eq!(message_preview("Where is my parcel?"), "Where is my parcel?");
        assert_eq!(message_preview(""), "");
    }

    #[test]
    fn preview_keeps_less_than_sign_in_text() {
        assert_eq!(message_preview("1 < 2"), "1 < 2");
    }

    #[test]
    fn preview_never_exceeds_limit() {
        let long = format!("<div>{}</div>", "é".repeat(200));
        let preview = message_preview(&long);
        assert_eq!(preview.chars().count(), MESSAGE_PREVIEW_LENGTH);

        let inputs = vec![
            "a".to_string(),
            "<b>bold</b>".to_string(),
            "x".repeat(75),
            "y".repeat(76),
            "&amp;".repeat(80),
        ];
        for raw in &inputs {
            assert!(message_preview(raw).chars().count() <= MESSAGE_PREVIEW_LENGTH);
        }
    }

    #[test]
    fn preview_drops_unterminated_tag_and_comments() {
        assert_eq!(message_preview("hi <!-- note --> there <a href="), "hi  there ");
    }

    #[test]
    fn quotes_stay_encoded() {
        assert_eq!(decode_entities("&quot;x&quot; &#39;y&#39;"), "&quot;x&quot; &#39;y&#39;");
        assert_eq!(decode_entities("&#8364; &#x41; &unknown;"), "€ A &unknown;");
    }

    #[test]
    fn accented_entities_are_decoded_before_truncating() {
        assert_eq!(
            message_preview("Caf&eacute; cr&egrave;me &agrave; emporter &ccedil;a"),
            "Café crème à emporter ça"
        );
        assert_eq!(decode_entities("&frac12; litre, 3 m&sup2;"), "½ litre, 3 m²");

        let encoded = "&eacute;".repeat(80);
        assert_eq!(message_preview(&encoded), "é".repeat(MESSAGE_PREVIEW_LENGTH));
    }

    #[test]
    fn known_statuses_are_translated() {
        assert_eq!(MessageStatus::from_code("open").label(&Upper), "OPEN");
        assert_eq!(MessageStatus::from_code("pending2").label(&Upper), "PENDING 2");
    }

    #[test]
    fn unknown_status_is_shown_verbatim() {
        let status = MessageStatus::from_code("escalated");
        assert_eq!(status, MessageStatus::Other("escalated".into()));
        assert_eq!(status.label(&Upper), "escalated");
    }

    #[test]
    fn referrer_host_drops_www() {
        assert_eq!(
            referrer_host(Some("https://www.google.com/search?q=shoes")).as_deref(),
            Some("google.com")
        );
        assert_eq!(
            referrer_host(Some("http://user@shop.example.org:8080/x")).as_deref(),
            Some("shop.example.org")
        );
    }

    #[test]
    fn missing_referrer_is_none_and_garbage_is_empty() {
        assert_eq!(referrer_host(None), None);
        assert_eq!(referrer_host(Some("")), None);
        assert_eq!(referrer_host(Some("not a url")).as_deref(), Some(""));
    }

    #[test]
    fn empty_company_gets_placeholder() {
        assert_eq!(company_label(None), "--");
        assert_eq!(company_label(Some("")), "--");
        assert_eq!(company_label(Some("Acme")), "Acme");
    }

    #[test]
    fn full_address_keeps_four_slots() {
        assert_eq!(
            full_address("1 Main St", None, Some("75001"), "Paris"),
            "1 Main St  75001 Paris"
        );
        assert_eq!(
            full_address("1 Main St", Some("Apt 4"), Some("75001"), "Paris"),
            "1 Main St Apt 4 75001 Paris"
        );
    }

    #[test]
    fn exhausted_rule_has_no_quantity() {
        assert_eq!(available_quantity(0, 3), 0);
        assert_eq!(available_quantity(-1, 3), 0);
        assert_eq!(available_quantity(10, 3), 3);
    }
}
