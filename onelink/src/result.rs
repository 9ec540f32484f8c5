//! Interpretation of one OneLink response.

use onelink_common::RawResponse;
use onelink_common::helper::header_str;
use reqwest::header::HeaderMap;
use std::fmt;

/// Response header carrying the translated share of the content, 0-100.
pub const TRANSLATION_PERCENT_HEADER: &str = "x-onelinktxpercent";

/// Percentage at or above which content counts as translated.
pub const DEFAULT_TRANSLATED_THRESHOLD: u32 = 97;

/// Immutable view over a single HTTP exchange with the service.
///
/// An HTTP error is not a Rust error here: a non-200 status or a
/// transport-unsuccessful exchange shows up as [`is_failure`](Self::is_failure).
#[derive(Debug, Clone)]
pub struct TranslationResult {
    raw: RawResponse,
    threshold: u32,
}

impl TranslationResult {
    pub fn new(raw: RawResponse) -> Self {
        Self::with_threshold(raw, DEFAULT_TRANSLATED_THRESHOLD)
    }

    /// Like [`new`](Self::new) with a different threshold for [`is_translated`](Self::is_translated).
    pub fn with_threshold(raw: RawResponse, threshold: u32) -> Self {
        Self { raw, threshold }
    }

    /// `true` only when the transport reported success and the status is exactly 200.
    pub fn is_successful(&self) -> bool {
        self.raw.success && self.raw.status_code == 200
    }

    pub fn is_failure(&self) -> bool {
        !self.is_successful()
    }

    pub fn status_code(&self) -> u16 {
        self.raw.status_code
    }

    /// Translated share reported by the service.
    ///
    /// Counted in segments, not words. A missing, empty or non-numeric header
    /// reads as 0.
    pub fn translation_percent(&self) -> u32 {
        header_str(&self.raw.headers, TRANSLATION_PERCENT_HEADER)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn is_translated(&self) -> bool {
        self.is_translated_at(self.threshold)
    }

    pub fn is_translated_at(&self, threshold: u32) -> bool {
        self.translation_percent() >= threshold
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// The body, or `None` when the service sent nothing back.
    pub fn data(&self) -> Option<&str> {
        if self.raw.body.is_empty() {
            None
        } else {
            Some(&self.raw.body)
        }
    }

    pub fn body(&self) -> &str {
        &self.raw.body
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.raw.headers
    }

    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    pub fn into_raw(self) -> RawResponse {
        self.raw
    }
}

impl fmt::Display for TranslationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw.body)
    }
}
