//! The site's contact form: four text fields, one form submission per submit, a status
//! that resets itself a few seconds after the outcome is known, and a `mailto:` link for
//! visitors who would rather use their own mail client.

mod controller;
mod mailto;
mod state;
mod transport;

pub use controller::ContactForm;
pub use mailto::*;
pub use state::*;
pub use transport::*;

use std::time::Duration;
use thiserror::Error;

/// Identifies the form to the hosting platform's form handler
pub const FORM_NAME: &str = "contact";
/// Spam trap; humans never see it so it is always submitted empty
pub const HONEYPOT_FIELD: &str = "bot-field";
/// How long `Success` or `Error` stays up before the form returns to `Idle`
pub const RESET_DELAY: Duration = Duration::from_secs(5);
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Failed to send message. Please try the email link below or try again later.";

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("form handler responded with status {0}")]
    Status(u16),

    #[error("invalid site URL {url:?}: {reason}")]
    InvalidSiteUrl { url: String, reason: String },

    #[error("failed to open {uri}: {source}")]
    Launch {
        uri: String,
        #[source]
        source: std::io::Error,
    },
}
