use crate::credentials::Credentials;
use crate::error::Error;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// region    --- validation tables
/// Value of the `otx_service` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServiceType {
    #[default]
    #[serde(rename = "tx")]
    Tx,
    #[serde(rename = "smt")]
    Smt,
    #[serde(rename = "wmt")]
    Wmt,
    #[serde(rename = "tx+smt")]
    TxSmt,
    #[serde(rename = "tx+wmt")]
    TxWmt,
    #[serde(rename = "parse")]
    Parse,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Tx,
        ServiceType::Smt,
        ServiceType::Wmt,
        ServiceType::TxSmt,
        ServiceType::TxWmt,
        ServiceType::Parse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Tx => "tx",
            ServiceType::Smt => "smt",
            ServiceType::Wmt => "wmt",
            ServiceType::TxSmt => "tx+smt",
            ServiceType::TxWmt => "tx+wmt",
            ServiceType::Parse => "parse",
        }
    }
}

/// Value of the `otx_mimetype` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MimeType {
    #[default]
    #[serde(rename = "text/html")]
    TextHtml,
    #[serde(rename = "text/xml")]
    TextXml,
    #[serde(rename = "text/javascript")]
    TextJavascript,
    #[serde(rename = "text/json")]
    TextJson,
    #[serde(rename = "text/plain")]
    TextPlain,
    #[serde(rename = "text/segment")]
    TextSegment,
    #[serde(rename = "application/json")]
    ApplicationJson,
}

impl MimeType {
    pub const ALL: [MimeType; 7] = [
        MimeType::TextHtml,
        MimeType::TextXml,
        MimeType::TextJavascript,
        MimeType::TextJson,
        MimeType::TextPlain,
        MimeType::TextSegment,
        MimeType::ApplicationJson,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::TextHtml => "text/html",
            MimeType::TextXml => "text/xml",
            MimeType::TextJavascript => "text/javascript",
            MimeType::TextJson => "text/json",
            MimeType::TextPlain => "text/plain",
            MimeType::TextSegment => "text/segment",
            MimeType::ApplicationJson => "application/json",
        }
    }
}

/// Returned by `FromStr` when a value is not in its table.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: `{value}`")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

// exact match only, no case folding or trimming
impl FromStr for ServiceType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "service type",
                value: s.to_owned(),
            })
    }
}

impl FromStr for MimeType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MimeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "mime type",
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ServiceType> for String {
    fn from(t: ServiceType) -> Self {
        t.as_str().to_owned()
    }
}

impl From<MimeType> for String {
    fn from(t: MimeType) -> Self {
        t.as_str().to_owned()
    }
}

pub fn is_valid_service_type(s: &str) -> bool {
    s.parse::<ServiceType>().is_ok()
}

pub fn is_valid_mime_type(s: &str) -> bool {
    s.parse::<MimeType>().is_ok()
}
// endregion --- validation tables

// region    --- request args
/// Per-call overlay merged over the client defaults. Set fields win.
///
/// Values stay as raw strings until the request is built, so an unknown value is
/// reported as [`Error::Validation`] right before sending instead of being
/// unrepresentable.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOverrides {
    #[builder(into)]
    pub mime_type: Option<String>,
    #[builder(into)]
    pub service_type: Option<String>,
}

/// The validated form sent to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestArgs {
    pub account: String,
    pub mime_type: MimeType,
    pub service_type: ServiceType,
    pub content: String,
}

impl RequestArgs {
    pub(crate) fn merge(
        credentials: &Credentials,
        default_service_type: ServiceType,
        content: String,
        overrides: &RequestOverrides,
    ) -> Result<Self, Error> {
        let mime_type = match overrides.mime_type.as_deref() {
            Some(s) => s
                .parse::<MimeType>()
                .map_err(|_| Error::Validation(format!("invalid mimetype specified: `{s}`")))?,
            None => MimeType::default(),
        };
        let service_type = match overrides.service_type.as_deref() {
            Some(s) => s.parse::<ServiceType>().map_err(|_| {
                Error::Validation(format!("invalid service type specified: `{s}`"))
            })?,
            None => default_service_type,
        };

        Ok(Self {
            account: credentials.account(),
            mime_type,
            service_type,
            content,
        })
    }

    /// The `otx_*` form fields in wire order.
    pub fn form_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("otx_account", self.account.as_str()),
            ("otx_mimetype", self.mime_type.as_str()),
            ("otx_service", self.service_type.as_str()),
            ("otx_content", self.content.as_str()),
        ]
    }
}
// endregion --- request args
