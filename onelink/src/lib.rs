#![doc = include_str!("../README.md")]

mod client;
pub mod credentials;
mod error;
mod result;
mod trans;
mod types_rs;

pub use client::{Client, ClientOptions};
pub use error::{Error, Result};
pub use result::{DEFAULT_TRANSLATED_THRESHOLD, TRANSLATION_PERCENT_HEADER, TranslationResult};
pub use types_rs::*;

pub use onelink_common::{HttpTransport, RawResponse, ReqwestTransport, helper};
