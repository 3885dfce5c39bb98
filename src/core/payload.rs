//! Waitlist request body
//!
//! Built from the form state plus the page environment (query string and
//! referrer) at the moment of submission.

use serde::{Deserialize, Serialize};

use super::form::FormState;

/// Fixed `source` tag sent with every signup
pub const SOURCE_LANDING_PAGE: &str = "landing_page";

/// Read-only page environment captured at submission time
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageContext {
    /// `location.search`, with or without the leading `?`
    pub query: String,
    /// `document.referrer`, empty when there is none
    pub referrer: String,
}

impl PageContext {
    pub fn new(query: impl Into<String>, referrer: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            referrer: referrer.into(),
        }
    }

    /// Read the current page's query string and referrer
    #[cfg(feature = "hydrate")]
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let query = window.location().search().unwrap_or_default();
        let referrer = window
            .document()
            .map(|document| document.referrer())
            .unwrap_or_default();
        Self { query, referrer }
    }

    /// Value of a query parameter, `None` when absent or empty
    pub fn query_param(&self, key: &str) -> Option<String> {
        let query = self.query.strip_prefix('?').unwrap_or(&self.query);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| non_empty(&v))
    }

    pub fn utm(&self) -> UtmParams {
        UtmParams {
            utm_source: self.query_param("utm_source"),
            utm_medium: self.query_param("utm_medium"),
            utm_campaign: self.query_param("utm_campaign"),
        }
    }

    pub fn referrer(&self) -> Option<String> {
        non_empty(&self.referrer)
    }
}

/// Campaign tracking fields from the page URL
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmParams {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
}

/// JSON body posted to the waitlist endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistPayload {
    pub email: String,
    pub role: Option<String>,
    pub company_size: Option<String>,
    pub pain_point: Option<String>,
    pub current_tools: Vec<String>,
    pub excitement_reason: Option<String>,
    pub source: String,
    #[serde(flatten)]
    pub utm: UtmParams,
    pub referrer: Option<String>,
}

impl WaitlistPayload {
    /// Assemble the request body. Empty optional fields become `null`.
    pub fn assemble(state: &FormState, page: &PageContext) -> Self {
        let fields = state.fields();
        Self {
            email: fields.email.clone(),
            role: non_empty(&fields.role),
            company_size: non_empty(&fields.company_size),
            pain_point: non_empty(&fields.pain_point),
            current_tools: state.selected_tools().iter().cloned().collect(),
            excitement_reason: non_empty(&fields.excitement_reason),
            source: SOURCE_LANDING_PAGE.to_string(),
            utm: page.utm(),
            referrer: page.referrer(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::Field;
    use serde_json::json;

    #[test]
    fn test_assemble_coerces_empty_and_reads_utm() {
        let mut state = FormState::new();
        state.set_field(Field::Email, "a@b.com");
        state.set_field(Field::Role, "");
        state.toggle_tool("x", true);
        state.toggle_tool("y", true);
        let page = PageContext::new("?utm_source=ads", "");

        let payload = WaitlistPayload::assemble(&state, &page);

        assert_eq!(payload.email, "a@b.com");
        assert_eq!(payload.role, None);
        assert_eq!(payload.current_tools, vec!["x", "y"]);
        assert_eq!(payload.utm.utm_source.as_deref(), Some("ads"));
        assert_eq!(payload.utm.utm_medium, None);
        assert_eq!(payload.utm.utm_campaign, None);
        assert_eq!(payload.referrer, None);
        assert_eq!(payload.source, "landing_page");
    }

    #[test]
    fn test_serialized_shape() {
        let mut state = FormState::new();
        state.set_field(Field::Email, "dev@st4ck.io");
        state.set_field(Field::CompanySize, "1-10");
        state.set_field(Field::ExcitementReason, "finally one place");
        let page = PageContext::new(
            "utm_source=newsletter&utm_medium=email&utm_campaign=launch",
            "https://news.ycombinator.com/",
        );

        let value = serde_json::to_value(WaitlistPayload::assemble(&state, &page)).unwrap();

        assert_eq!(
            value,
            json!({
                "email": "dev@st4ck.io",
                "role": null,
                "company_size": "1-10",
                "pain_point": null,
                "current_tools": [],
                "excitement_reason": "finally one place",
                "source": "landing_page",
                "utm_source": "newsletter",
                "utm_medium": "email",
                "utm_campaign": "launch",
                "referrer": "https://news.ycombinator.com/"
            })
        );
    }

    #[test]
    fn test_query_param_decoding() {
        let page = PageContext::new("?utm_campaign=spring%20sale&utm_source=&x=1", "");
        assert_eq!(page.query_param("utm_campaign").as_deref(), Some("spring sale"));
        assert_eq!(page.query_param("utm_source"), None);
        assert_eq!(page.query_param("missing"), None);
    }

    #[test]
    fn test_empty_page_context() {
        let page = PageContext::default();
        assert_eq!(page.utm(), UtmParams::default());
        assert_eq!(page.referrer(), None);
    }
}
