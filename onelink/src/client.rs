use crate::credentials::Credentials;
use crate::error::Error;
use crate::result::DEFAULT_TRANSLATED_THRESHOLD;
use crate::types_rs::ServiceType;
use bon::bon;
use onelink_common::{HttpTransport, ReqwestTransport};
use serde::Deserialize;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;
use url::Url;

const SERVICE_DOMAIN: &str = "onelink-translations.com";
const DEFAULT_LANGUAGE: &str = "en";

/// Options that can come from a config file, see [`Client::with_options`].
///
/// ```toml
/// service_type = "tx+smt"
/// language = "es"
/// translated_threshold = 100
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClientOptions {
    pub service_type: Option<String>,
    pub language: Option<String>,
    pub translated_threshold: Option<u32>,
}

pub struct Client {
    pub(crate) credentials: Credentials,
    pub(crate) host: String,
    pub(crate) default_language: String,
    // shared callers may race set_service_type against a request
    pub(crate) service_type: Mutex<ServiceType>,
    pub(crate) translated_threshold: u32,
    pub(crate) transport: Arc<dyn HttpTransport>,
}

#[bon]
impl Client {
    #[builder]
    pub fn new(
        #[builder(into)] username: String,
        #[builder(into)] password: String,
        /// Account host, the part after the language in `{lang}-{host}.onelink-translations.com`.
        #[builder(into)]
        host: String,
        /// Default `otx_service`, `tx` when unset. Must be one of [`ServiceType::ALL`].
        #[builder(into)]
        service_type: Option<String>,
        /// Default target language, `en` when unset.
        #[builder(into)]
        language: Option<String>,
        #[builder(default = DEFAULT_TRANSLATED_THRESHOLD)] translated_threshold: u32,
        /// Used to build the default transport. Ignored when `transport` is set.
        http_client: Option<reqwest::Client>,
        transport: Option<Arc<dyn HttpTransport>>,
    ) -> Result<Self, Error> {
        let service_type = match service_type {
            Some(s) => parse_service_type(&s)?,
            None => ServiceType::default(),
        };
        let transport = transport.unwrap_or_else(|| match http_client {
            Some(c) => Arc::new(ReqwestTransport::with_client(c)),
            None => Arc::new(ReqwestTransport::new()),
        });

        Ok(Self {
            credentials: Credentials::new(username, password),
            host,
            default_language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned()),
            service_type: Mutex::new(service_type),
            translated_threshold,
            transport,
        })
    }

    /// Build a client with the default transport from deserialized [`ClientOptions`].
    pub fn with_options(
        username: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, Error> {
        Client::builder()
            .username(username)
            .password(password)
            .host(host)
            .maybe_service_type(options.service_type)
            .maybe_language(options.language)
            .maybe_translated_threshold(options.translated_threshold)
            .build()
    }
}

impl Client {
    /// Replace the default service type, returning the previous one.
    ///
    /// An unknown type leaves the current default in place.
    pub fn set_service_type(&self, new_type: &str) -> Result<ServiceType, Error> {
        let new_type = parse_service_type(new_type)?;
        let mut current = self
            .service_type
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(std::mem::replace(&mut *current, new_type))
    }

    pub fn service_type(&self) -> ServiceType {
        *self
            .service_type
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn translated_threshold(&self) -> u32 {
        self.translated_threshold
    }

    /// `https://{lang}-{host}.onelink-translations.com/OneLinkOTX/`
    ///
    /// The parsed url must point at exactly that host, so a language or host
    /// carrying `@`, `/`, `#`, `?` or a port cannot send the account elsewhere.
    pub fn endpoint_url(&self, lang: &str) -> Result<Url, Error> {
        let expected_host = format!("{}-{}.{}", lang, self.host, SERVICE_DOMAIN);
        let raw = format!("https://{expected_host}/OneLinkOTX/");
        let url = Url::parse(&raw).map_err(|e| {
            warn!(url = %raw, error = %e, "rejecting malformed service url");
            Error::Validation(format!("invalid service url `{raw}`: {e}"))
        })?;

        let same_host = url
            .host_str()
            .is_some_and(|h| h == expected_host.to_ascii_lowercase());
        if !same_host || url.port().is_some() || url.path() != "/OneLinkOTX/" {
            warn!(url = %raw, "rejecting service url pointing at another host");
            return Err(Error::Validation(format!(
                "invalid service url `{raw}`: language and host must form a single host name"
            )));
        }
        Ok(url)
    }
}

fn parse_service_type(s: &str) -> Result<ServiceType, Error> {
    s.parse::<ServiceType>().map_err(|e| {
        warn!(service_type = s, "rejecting unknown service type");
        Error::Configuration(format!("invalid service type: {e}"))
    })
}
