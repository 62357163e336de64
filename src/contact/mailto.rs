use super::ContactError;
use std::fmt;
use std::io;
use tracing::{error, info};

pub const CONTACT_ADDRESS: &str = "skaistha16@gmail.com";
pub const MAIL_SUBJECT: &str = "Portfolio Contact - Let's Connect!";
pub const MAIL_BODY: &str = "Hi Sachit,\n\nI found your portfolio and would like to connect with you.\n\nBest regards,\n[Your Name]";

/// A pre-filled message for the visitor's own mail client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    pub address: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    /// The link offered under the contact form
    pub fn portfolio() -> MailtoLink {
        MailtoLink {
            address: CONTACT_ADDRESS.to_string(),
            subject: MAIL_SUBJECT.to_string(),
            body: MAIL_BODY.to_string(),
        }
    }

    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.address,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

/// Percent-encodes like a browser's `encodeURIComponent`, which leaves `!'()*` alone
fn encode_component(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Hands a URI to whatever the platform uses to open it
pub trait Launcher {
    fn launch(&self, uri: &str) -> io::Result<()>;
}

/// Opens URIs with the desktop's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, uri: &str) -> io::Result<()> {
        open::that(uri)
    }
}

/// Builds the portfolio `mailto:` link and asks `launcher` to open it
pub fn email_fallback(launcher: &dyn Launcher) -> Result<MailtoLink, ContactError> {
    let link = MailtoLink::portfolio();
    let uri = link.to_uri();

    if let Err(source) = launcher.launch(&uri) {
        error!(error = %source, "could not open mail client");
        return Err(ContactError::Launch { uri, source });
    }
    info!(address = %link.address, "opened mail client");
    Ok(link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Launcher for Recorder {
        fn launch(&self, uri: &str) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no mail client"));
            }
            self.opened.borrow_mut().push(uri.to_string());
            Ok(())
        }
    }

    #[test]
    fn uri_matches_the_site_link() {
        assert_eq!(
            MailtoLink::portfolio().to_uri(),
            "mailto:skaistha16@gmail.com\
             ?subject=Portfolio%20Contact%20-%20Let's%20Connect!\
             &body=Hi%20Sachit%2C%0A%0AI%20found%20your%20portfolio%20and%20would%20like%20to%20connect%20with%20you.%0A%0ABest%20regards%2C%0A%5BYour%20Name%5D"
        );
    }

    #[test]
    fn launches_the_link_once() {
        let recorder = Recorder::default();
        let link = email_fallback(&recorder).unwrap();
        assert_eq!(*recorder.opened.borrow(), vec![link.to_uri()]);
    }

    #[test]
    fn launch_failures_are_reported() {
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        match email_fallback(&recorder) {
            Err(ContactError::Launch { uri, .. }) => assert!(uri.starts_with("mailto:")),
            other => panic!("expected a launch error, got {other:?}"),
        }
    }
}
