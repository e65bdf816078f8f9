//! Inbound seller submissions and their validation.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use crate::error::{SubmissionError, SubmissionResult};

/// Submission body as sent by the storefront, before validation.
///
/// Fields are kept as loose JSON so that validation (not deserialization)
/// decides what counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub vendor: Value,
    #[serde(default)]
    pub image_url: Value,
    /// `None` when the key is absent, `Some(Value::Null)` for an explicit `null`.
    #[serde(default, deserialize_with = "present")]
    pub seller_email: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl SubmissionRequest {
    /// Parse a raw request body.
    ///
    /// Anything that is not a JSON object (malformed bytes, arrays, scalars,
    /// an empty body) yields a request with no fields, which validation then
    /// rejects.
    pub fn from_slice(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// Price as given by the seller, forwarded upstream without normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Price {
    Amount(Number),
    Text(String),
}

impl Price {
    /// Accepts non-zero numbers and non-empty strings.
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(Self::Amount(n.clone())),
            Value::String(s) if !s.is_empty() => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

/// The `seller:<...>` tag value.
///
/// An omitted `seller_email` still produces a tag, rendered `seller:undefined`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SellerTag {
    Absent,
    Null,
    Given(String),
}

impl From<Option<Value>> for SellerTag {
    fn from(value: Option<Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(Value::String(s)) => Self::Given(s),
            Some(other) => Self::Given(other.to_string()),
        }
    }
}

impl core::fmt::Display for SellerTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Absent => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Given(s) => f.write_str(s),
        }
    }
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub title: String,
    pub description: Option<String>,
    pub price: Price,
    pub vendor: String,
    pub image_url: Option<String>,
    pub seller: SellerTag,
}

impl Submission {
    /// Validate a raw request.
    ///
    /// Required fields are checked in the order title, price, vendor; the
    /// first missing one is reported. Optional fields of an unexpected JSON
    /// type are treated as absent.
    pub fn validate(request: SubmissionRequest) -> SubmissionResult<Self> {
        let title = required_text(request.title, "title")?;
        let price = Price::from_json(&request.price).ok_or(SubmissionError::missing("price"))?;
        let vendor = required_text(request.vendor, "vendor")?;

        let description = match request.description {
            Value::String(s) => Some(s),
            _ => None,
        };
        let image_url = match request.image_url {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        };

        Ok(Self {
            title,
            description,
            price,
            vendor,
            image_url,
            seller: SellerTag::from(request.seller_email),
        })
    }
}

impl TryFrom<SubmissionRequest> for Submission {
    type Error = SubmissionError;

    fn try_from(request: SubmissionRequest) -> SubmissionResult<Self> {
        Self::validate(request)
    }
}

fn required_text(value: Value, field: &'static str) -> SubmissionResult<String> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(s),
        _ => Err(SubmissionError::missing(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> SubmissionRequest {
        SubmissionRequest::from_slice(body.to_string().as_bytes())
    }

    #[test]
    fn minimal_submission_validates() {
        let sub = Submission::validate(request(json!({
            "title": "Widget",
            "price": 9.99,
            "vendor": "Acme",
        })))
        .unwrap();

        assert_eq!(sub.title, "Widget");
        assert_eq!(sub.vendor, "Acme");
        assert_eq!(sub.price, Price::Amount(Number::from_f64(9.99).unwrap()));
        assert_eq!(sub.description, None);
        assert_eq!(sub.image_url, None);
        assert_eq!(sub.seller, SellerTag::Absent);
    }

    #[test]
    fn string_price_is_kept_verbatim() {
        let sub = Submission::validate(request(json!({
            "title": "Widget",
            "price": "12.50",
            "vendor": "Acme",
        })))
        .unwrap();
        assert_eq!(sub.price, Price::Text("12.50".to_string()));
    }

    #[test]
    fn falsy_required_fields_are_rejected() {
        let cases = [
            (json!({"price": 1, "vendor": "Acme"}), "title"),
            (json!({"title": "", "price": 1, "vendor": "Acme"}), "title"),
            (json!({"title": null, "price": 1, "vendor": "Acme"}), "title"),
            (json!({"title": "Widget", "vendor": "Acme"}), "price"),
            (json!({"title": "Widget", "price": 0, "vendor": "Acme"}), "price"),
            (json!({"title": "Widget", "price": 0.0, "vendor": "Acme"}), "price"),
            (json!({"title": "Widget", "price": "", "vendor": "Acme"}), "price"),
            (json!({"title": "Widget", "price": false, "vendor": "Acme"}), "price"),
            (json!({"title": "Widget", "price": 1}), "vendor"),
            (json!({"title": "Widget", "price": 1, "vendor": ""}), "vendor"),
        ];

        for (body, field) in cases {
            let err = Submission::validate(request(body.clone())).unwrap_err();
            assert_eq!(err, SubmissionError::MissingField(field), "body: {body}");
        }
    }

    #[test]
    fn title_is_reported_before_price_and_vendor() {
        let err = Submission::validate(request(json!({}))).unwrap_err();
        assert_eq!(err.field(), "title");
    }

    #[test]
    fn non_object_bodies_have_no_fields() {
        let bodies: [&[u8]; 4] = [b"not json", b"", br#"["Widget", null, 9.99, "Acme"]"#, b"42"];
        for body in bodies {
            assert_eq!(SubmissionRequest::from_slice(body), SubmissionRequest::default());
        }
    }

    #[test]
    fn optional_fields_of_wrong_type_are_dropped() {
        let sub = Submission::validate(request(json!({
            "title": "Widget",
            "price": 5,
            "vendor": "Acme",
            "description": 17,
            "image_url": "",
        })))
        .unwrap();
        assert_eq!(sub.description, None);
        assert_eq!(sub.image_url, None);
    }

    #[test]
    fn seller_tag_renders_like_the_storefront_expects() {
        assert_eq!(SellerTag::from(None).to_string(), "undefined");
        assert_eq!(SellerTag::from(Some(Value::Null)).to_string(), "null");
        assert_eq!(SellerTag::from(Some(json!("a@b.c"))).to_string(), "a@b.c");
        assert_eq!(SellerTag::from(Some(json!(42))).to_string(), "42");
    }

    #[test]
    fn explicit_null_seller_email_differs_from_absent() {
        let absent = request(json!({"title": "T", "price": 1, "vendor": "V"}));
        let null = request(json!({"title": "T", "price": 1, "vendor": "V", "seller_email": null}));
        assert_eq!(absent.seller_email, None);
        assert_eq!(null.seller_email, Some(Value::Null));
    }
}
