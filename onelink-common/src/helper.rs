use crate::Error;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Build a [`HeaderMap`] from name/value pairs.
///
/// Header names are case-insensitive once inside the map, so `X-Foo` and `x-foo`
/// address the same entry.
pub fn into_header_map<I, K, V>(pairs: I) -> Result<HeaderMap, Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut map = HeaderMap::new();
    for (k, v) in pairs {
        let name = HeaderName::from_bytes(k.as_ref().as_bytes())
            .map_err(|e| Error::Other(Box::new(e)))?;
        let value =
            HeaderValue::from_str(v.as_ref()).map_err(|e| Error::Other(Box::new(e)))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Header value as text, `None` when missing or not visible ASCII.
pub fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name)?.to_str().ok()
}
