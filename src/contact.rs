use std::future::Future;

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Where the contact form ultimately delivers to, and the address shown to
/// the user when every channel is exhausted.
pub const CONTACT_EMAIL: &str = "alex@alexchen.dev";

const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";
// Placeholder until a real key is configured; the relay rejects it and the
// cascade moves on to the next channel.
const RELAY_ACCESS_KEY: &str = "YOUR_ACCESS_KEY";

const HOSTED_FORM_ENDPOINT: &str = "/";
const HOSTED_FORM_NAME: &str = "contact";

/// One submitted contact-form message. Immutable for the duration of a
/// single dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// All four fields are required before dispatch may begin.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Error, Debug, Clone)]
pub enum DeliveryError {
    #[error("couldn't reach {endpoint}")]
    Network { endpoint: String },
    #[error("{endpoint} rejected the message with status {status}")]
    Rejected { endpoint: String, status: u16 },
    #[error("{endpoint} returned a success status but no parseable JSON body")]
    MalformedResponse { endpoint: String },
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

/// One external mechanism for delivering a [`ContactMessage`].
pub trait Channel {
    /// Short name used in logs and in the aggregate outcome.
    fn name(&self) -> &'static str;

    fn send(&self, msg: &ContactMessage) -> impl Future<Output = Result<(), DeliveryError>>;
}

/// Aggregate result of one cascade run. Individual channel errors are
/// logged and swallowed; only this outcome is observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A channel confirmed delivery.
    Delivered { channel: &'static str },
    /// Every channel failed, but the user's mail client was opened with a
    /// pre-filled message. Treated as a success from the user's
    /// perspective even though delivery is unconfirmed.
    FallbackOpened,
    /// Every channel failed and the mail handler couldn't be opened
    /// either. The user must be pointed at [`CONTACT_EMAIL`] directly.
    Exhausted,
}

impl DispatchOutcome {
    /// Success paths clear the form; exhaustion leaves it intact.
    pub fn is_success(&self) -> bool {
        !matches!(self, DispatchOutcome::Exhausted)
    }
}

/// Attempts delivery through `channels` in declared order, one attempt per
/// channel, stopping at the first success. The order is deliberate: the
/// cheapest, most reliable channel wins by priority, never by race.
///
/// `open_mail_handler` receives a `mailto:` URL and reports whether the
/// platform accepted it; it is only invoked once every channel has failed,
/// so the cascade can never end in silence.
pub async fn dispatch<C, F>(
    channels: &[C],
    msg: &ContactMessage,
    open_mail_handler: F,
) -> DispatchOutcome
where
    C: Channel,
    F: FnOnce(&str) -> bool,
{
    for channel in channels {
        match channel.send(msg).await {
            Ok(()) => {
                return DispatchOutcome::Delivered {
                    channel: channel.name(),
                }
            }
            Err(err) => log::warn!("{} delivery failed: {err}", channel.name()),
        }
    }

    let url = mailto_url(CONTACT_EMAIL, msg);
    if open_mail_handler(&url) {
        DispatchOutcome::FallbackOpened
    } else {
        DispatchOutcome::Exhausted
    }
}

/// Builds the `mailto:` fallback URL with subject and a Name/Email/Message
/// body, each percent-encoded. Requires no network, so it is always
/// available as the cascade's terminal step.
pub fn mailto_url(to: &str, msg: &ContactMessage) -> String {
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        msg.name, msg.email, msg.message
    );
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(&msg.subject),
        urlencoding::encode(&body)
    )
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    to: &'a str,
}

/// JSON body for the hosted form-relay endpoint.
pub fn relay_body(access_key: &str, to: &str, msg: &ContactMessage) -> String {
    serde_json::to_string(&RelayPayload {
        access_key,
        name: &msg.name,
        email: &msg.email,
        subject: &msg.subject,
        message: &msg.message,
        to,
    })
    .expect("relay payload should serialize")
}

/// URL-encoded body for the static-site form handler: a `form-name`
/// discriminator plus the four message fields.
pub fn form_body(form_name: &str, msg: &ContactMessage) -> String {
    [
        ("form-name", form_name),
        ("name", &msg.name),
        ("email", &msg.email),
        ("subject", &msg.subject),
        ("message", &msg.message),
    ]
    .iter()
    .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
    .collect::<Vec<_>>()
    .join("&")
}

/// The site's delivery channels, fixed at configuration time. Not
/// user-editable at runtime.
#[derive(Debug, Clone)]
pub enum ChannelConfig {
    /// Hosted form-relay service taking a JSON payload.
    FormRelay {
        endpoint: &'static str,
        access_key: &'static str,
        to: &'static str,
    },
    /// Client-side email API library. Currently unconfigured, so this
    /// always fails; kept in the cascade so configuring it later is a
    /// one-line change.
    EmailApi,
    /// Static-site form handler, only meaningful when the site is hosted
    /// on a platform that intercepts form posts.
    HostedForm {
        endpoint: &'static str,
        form_name: &'static str,
    },
}

/// The cascade in priority order.
pub fn site_channels() -> Vec<ChannelConfig> {
    vec![
        ChannelConfig::FormRelay {
            endpoint: RELAY_ENDPOINT,
            access_key: RELAY_ACCESS_KEY,
            to: CONTACT_EMAIL,
        },
        ChannelConfig::EmailApi,
        ChannelConfig::HostedForm {
            endpoint: HOSTED_FORM_ENDPOINT,
            form_name: HOSTED_FORM_NAME,
        },
    ]
}

impl Channel for ChannelConfig {
    fn name(&self) -> &'static str {
        match self {
            ChannelConfig::FormRelay { .. } => "form-relay",
            ChannelConfig::EmailApi => "email-api",
            ChannelConfig::HostedForm { .. } => "hosted-form",
        }
    }

    fn send(&self, msg: &ContactMessage) -> impl Future<Output = Result<(), DeliveryError>> {
        async move {
            match self {
                ChannelConfig::FormRelay {
                    endpoint,
                    access_key,
                    to,
                } => {
                    let resp =
                        post(endpoint, "application/json", &relay_body(access_key, to, msg))
                            .await?;
                    // The relay signals acceptance with a JSON body; a 2xx
                    // without one is still a failure.
                    let parsed = resp.json().map_err(|_| DeliveryError::MalformedResponse {
                        endpoint: endpoint.to_string(),
                    })?;
                    JsFuture::from(parsed)
                        .await
                        .map_err(|_| DeliveryError::MalformedResponse {
                            endpoint: endpoint.to_string(),
                        })?;
                    Ok(())
                }
                ChannelConfig::EmailApi => Err(DeliveryError::NotConfigured("email API client")),
                ChannelConfig::HostedForm {
                    endpoint,
                    form_name,
                } => post(
                    endpoint,
                    "application/x-www-form-urlencoded",
                    &form_body(form_name, msg),
                )
                .await
                .map(|_| ()),
            }
        }
    }
}

async fn post(
    endpoint: &str,
    content_type: &str,
    body: &str,
) -> Result<web_sys::Response, DeliveryError> {
    let network = || DeliveryError::Network {
        endpoint: endpoint.to_string(),
    };

    let window = web_sys::window().ok_or_else(network)?;
    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body));
    let request =
        web_sys::Request::new_with_str_and_init(endpoint, &opts).map_err(|_| network())?;
    request
        .headers()
        .set("Content-Type", content_type)
        .map_err(|_| network())?;

    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| network())?;
    let resp: web_sys::Response = resp.dyn_into().map_err(|_| network())?;

    if resp.ok() {
        Ok(resp)
    } else {
        Err(DeliveryError::Rejected {
            endpoint: endpoint.to_string(),
            status: resp.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct Scripted {
        name: &'static str,
        succeeds: bool,
        attempts: Cell<u32>,
    }

    impl Scripted {
        fn new(name: &'static str, succeeds: bool) -> Self {
            Self {
                name,
                succeeds,
                attempts: Cell::new(0),
            }
        }
    }

    impl Channel for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        fn send(&self, _msg: &ContactMessage) -> impl Future<Output = Result<(), DeliveryError>> {
            self.attempts.set(self.attempts.get() + 1);
            let succeeds = self.succeeds;
            let name = self.name;
            async move {
                if succeeds {
                    Ok(())
                } else {
                    Err(DeliveryError::NotConfigured(name))
                }
            }
        }
    }

    fn msg() -> ContactMessage {
        ContactMessage {
            name: "Jamie Doe".to_string(),
            email: "jamie@example.com".to_string(),
            subject: "Project inquiry".to_string(),
            message: "Hello!\nLet's talk.".to_string(),
        }
    }

    #[test]
    fn first_success_stops_the_cascade() {
        let channels = [
            Scripted::new("first", false),
            Scripted::new("second", true),
            Scripted::new("third", true),
        ];

        let outcome = block_on(dispatch(&channels, &msg(), |_| {
            panic!("fallback should not be reached")
        }));

        assert_eq!(outcome, DispatchOutcome::Delivered { channel: "second" });
        assert_eq!(channels[0].attempts.get(), 1);
        assert_eq!(channels[1].attempts.get(), 1);
        // Priority order with early exit: the third channel is never tried.
        assert_eq!(channels[2].attempts.get(), 0);
    }

    #[test]
    fn exhausted_channels_fall_back_to_mailto() {
        let channels = [
            Scripted::new("first", false),
            Scripted::new("second", false),
            Scripted::new("third", false),
        ];
        let opened = Cell::new(None::<String>);

        let outcome = block_on(dispatch(&channels, &msg(), |url| {
            opened.set(Some(url.to_string()));
            true
        }));

        assert_eq!(outcome, DispatchOutcome::FallbackOpened);
        assert!(outcome.is_success());
        for channel in &channels {
            assert_eq!(channel.attempts.get(), 1);
        }
        let url = opened.take().expect("mail handler should be invoked");
        assert!(url.starts_with(&format!("mailto:{CONTACT_EMAIL}?subject=")));
    }

    #[test]
    fn empty_channel_list_still_reaches_the_fallback() {
        let channels: [Scripted; 0] = [];
        let opened = Cell::new(false);

        let outcome = block_on(dispatch(&channels, &msg(), |_| {
            opened.set(true);
            true
        }));

        assert_eq!(outcome, DispatchOutcome::FallbackOpened);
        assert!(opened.get());
    }

    #[test]
    fn unopenable_mail_handler_reports_exhaustion() {
        let channels = [Scripted::new("only", false)];

        let outcome = block_on(dispatch(&channels, &msg(), |_| false));

        assert_eq!(outcome, DispatchOutcome::Exhausted);
        assert!(!outcome.is_success());
    }

    #[test]
    fn delivered_and_fallback_are_success_paths() {
        assert!(DispatchOutcome::Delivered { channel: "x" }.is_success());
        assert!(DispatchOutcome::FallbackOpened.is_success());
        assert!(!DispatchOutcome::Exhausted.is_success());
    }

    #[test]
    fn message_completeness_requires_all_four_fields() {
        assert!(msg().is_complete());

        let mut blank_subject = msg();
        blank_subject.subject = "   ".to_string();
        assert!(!blank_subject.is_complete());

        assert!(!ContactMessage::default().is_complete());
    }

    #[test]
    fn mailto_url_percent_encodes_subject_and_body() {
        let url = mailto_url("alex@example.com", &msg());

        assert!(url.starts_with("mailto:alex@example.com?subject=Project%20inquiry&body="));
        // Newlines in the body survive as %0A.
        assert!(url.contains("%0A"));
        assert!(url.contains("Name%3A%20Jamie%20Doe"));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn relay_body_carries_all_wire_fields() {
        let body = relay_body("key-123", "alex@example.com", &msg());
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(value["access_key"], "key-123");
        assert_eq!(value["to"], "alex@example.com");
        assert_eq!(value["name"], "Jamie Doe");
        assert_eq!(value["email"], "jamie@example.com");
        assert_eq!(value["subject"], "Project inquiry");
        assert_eq!(value["message"], "Hello!\nLet's talk.");
    }

    #[test]
    fn form_body_is_urlencoded_with_form_name_first() {
        let body = form_body("contact", &msg());

        assert!(body.starts_with("form-name=contact&"));
        assert!(body.contains("name=Jamie%20Doe"));
        assert!(body.contains("email=jamie%40example.com"));
        assert!(body.contains("message=Hello%21%0ALet%27s%20talk."));
    }

    #[test]
    fn site_cascade_is_relay_then_email_api_then_hosted_form() {
        let channels = site_channels();
        let names = channels.iter().map(|c| c.name()).collect::<Vec<_>>();
        assert_eq!(names, ["form-relay", "email-api", "hosted-form"]);
    }
}
