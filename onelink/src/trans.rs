use crate::client::Client;
use crate::error::Error;
use crate::result::TranslationResult;
use crate::types_rs::{MimeType, RequestArgs, RequestOverrides};
use tracing::{debug, warn};
use url::Url;

impl Client {
    /// Translate plain text.
    ///
    /// OTX ignores content that is not wrapped in markup, so the text is sent as
    /// `<p>{text}</p>`.
    pub async fn translate_text(
        &self,
        text: &str,
        lang: Option<&str>,
    ) -> Result<TranslationResult, Error> {
        self.translate_html(&format!("<p>{text}</p>"), lang).await
    }

    pub async fn translate_html(
        &self,
        html: &str,
        lang: Option<&str>,
    ) -> Result<TranslationResult, Error> {
        let overrides = RequestOverrides::builder()
            .mime_type(MimeType::TextHtml)
            .build();
        self.translate(html, lang, &overrides).await
    }

    /// Translate several pieces of text in one request.
    ///
    /// Each segment becomes `<div>{segment}</div>` and the lot is sent through
    /// [`translate_text`](Self::translate_text) as a single payload. The result
    /// holds one combined translation with no per-segment correlation. For keyed
    /// segments pass `map.values()`.
    pub async fn translate_segments<I>(
        &self,
        segments: I,
        lang: Option<&str>,
    ) -> Result<TranslationResult, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let text = join_segments(segments);
        self.translate_text(&text, lang).await
    }

    /// Generic request: resolve the language, merge `overrides` over the client
    /// defaults, validate, then send.
    ///
    /// `None` or an empty `lang` uses the client's default language.
    pub async fn translate(
        &self,
        text: &str,
        lang: Option<&str>,
        overrides: &RequestOverrides,
    ) -> Result<TranslationResult, Error> {
        let lang = self.resolve_language(lang)?;
        let args = RequestArgs::merge(
            &self.credentials,
            self.service_type(),
            text.to_owned(),
            overrides,
        )
        .inspect_err(|e| warn!(error = %e, "rejecting translation request"))?;
        let url = self.endpoint_url(lang)?;

        self.make_request(&url, &args).await
    }

    /// POST `args` to `url` and wrap whatever comes back.
    ///
    /// Only transport failures are errors. Any HTTP status yields a
    /// [`TranslationResult`].
    pub async fn make_request(
        &self,
        url: &Url,
        args: &RequestArgs,
    ) -> Result<TranslationResult, Error> {
        debug!(
            %url,
            mime_type = %args.mime_type,
            service_type = %args.service_type,
            content_len = args.content.len(),
            "sending translation request"
        );
        let raw = self.transport.post_form(url, &args.form_fields()).await?;

        let res = TranslationResult::with_threshold(raw, self.translated_threshold);
        debug!(
            status = res.status_code(),
            percent = res.translation_percent(),
            "translation response received"
        );
        Ok(res)
    }

    fn resolve_language<'a>(&'a self, lang: Option<&'a str>) -> Result<&'a str, Error> {
        let lang = match lang {
            Some(l) if !l.is_empty() => l,
            _ => self.default_language.as_str(),
        };
        if lang.is_empty() {
            warn!("rejecting translation request without a language");
            return Err(Error::Validation("no language specified".to_owned()));
        }
        Ok(lang)
    }
}

fn join_segments<I>(segments: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    segments
        .into_iter()
        .map(|s| format!("<div>{}</div>", s.as_ref()))
        .collect()
}
