use super::{ContactError, Field, FormState, FORM_NAME, HONEYPOT_FIELD};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// A snapshot of the four fields taken when a submission starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    pub fn from_form(form: &FormState) -> ContactPayload {
        ContactPayload {
            name: form.name.clone(),
            email: form.email.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// The `application/x-www-form-urlencoded` body: form identifier, empty honeypot,
    /// then the fields
    pub fn encode(&self) -> String {
        let fixed = [("form-name", FORM_NAME), (HONEYPOT_FIELD, "")];
        let fields = Field::ALL.map(|f| (f.name(), self.value(f)));

        fixed
            .iter()
            .chain(fields.iter())
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Delivers a submission. Any error means the submission failed.
#[async_trait]
pub trait FormTransport: Send + Sync {
    async fn post(&self, payload: &ContactPayload) -> Result<(), ContactError>;
}

/// Posts the form to the root of the site, where the hosting platform picks it up
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(site_url: &str, timeout: Duration) -> Result<HttpTransport, ContactError> {
        let endpoint = Url::parse(site_url)
            .and_then(|url| url.join("/"))
            .map_err(|e| ContactError::InvalidSiteUrl {
                url: site_url.to_string(),
                reason: e.to_string(),
            })?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(HttpTransport { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FormTransport for HttpTransport {
    async fn post(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        debug!(endpoint = %self.endpoint, "posting contact form");
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(payload.encode())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContactError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_fixed_fields_first() {
        let payload = ContactPayload {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Hi & bye".into(),
            message: "Line one\nLine two".into(),
        };
        assert_eq!(
            payload.encode(),
            "form-name=contact&bot-field=&name=Ada%20Lovelace&email=ada%40example.com\
             &subject=Hi%20%26%20bye&message=Line%20one%0ALine%20two"
        );
    }

    #[test]
    fn posts_to_the_site_root() {
        let transport =
            HttpTransport::new("https://example.com/contact", Duration::from_secs(1)).unwrap();
        assert_eq!(transport.endpoint().as_str(), "https://example.com/");
    }

    #[test]
    fn rejects_unparseable_site_urls() {
        let err = HttpTransport::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ContactError::InvalidSiteUrl { .. }));
    }
}
