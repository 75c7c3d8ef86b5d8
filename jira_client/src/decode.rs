//! Turns raw response bodies into records.
//!
//! The caller picks the decoder per endpoint: REST resources are JSON, the
//! activity stream is Atom. Failures keep the offending bytes, see
//! [`JiraError::payload`].
use log::trace;
use quick_xml::{events::Event, Reader};
use serde::de::DeserializeOwned;

use crate::{JiraError, PayloadFormat, Result};

/// A record decoded from a whole XML document.
///
/// quick-xml does not look at the name of the root element, so it is checked
/// against `ROOT` before deserializing.
pub trait XmlDocument: DeserializeOwned {
    /// Local name of the document element, e.g. `feed`
    const ROOT: &'static str;
}

/// Decodes a JSON body. An empty body is read as `null`, so `Option<T>` and
/// `()` accept the empty answers of `DELETE` and friends.
///
/// # Errors
/// [`JiraError::Decode`] with the original bytes if the body does not match `D`.
pub fn decode_json<D>(payload: &[u8]) -> Result<D>
where
    D: DeserializeOwned,
{
    let data: &[u8] = if payload.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        payload
    };
    serde_json::from_slice::<D>(data).map_err(|e| {
        trace!("JSON decoding failed: {e}");
        JiraError::decode(PayloadFormat::Json, payload, e)
    })
}

/// Decodes an XML document, in practice an Atom feed.
///
/// # Errors
/// [`JiraError::Decode`] with the original bytes if the body is not UTF-8,
/// its root element is not [`XmlDocument::ROOT`] or it does not match `D`.
pub fn decode_xml<D>(payload: &[u8]) -> Result<D>
where
    D: XmlDocument,
{
    let text = std::str::from_utf8(payload)
        .map_err(|e| JiraError::decode(PayloadFormat::Xml, payload, e))?;
    match root_element(text) {
        Ok(Some(root)) if root == D::ROOT => {}
        Ok(Some(root)) => {
            return Err(JiraError::decode(
                PayloadFormat::Xml,
                payload,
                format!("expected a <{}> document, found <{root}>", D::ROOT),
            ))
        }
        Ok(None) => {
            return Err(JiraError::decode(
                PayloadFormat::Xml,
                payload,
                format!("expected a <{}> document, found no element", D::ROOT),
            ))
        }
        Err(e) => return Err(JiraError::decode(PayloadFormat::Xml, payload, e)),
    }
    quick_xml::de::from_str::<D>(text).map_err(|e| {
        trace!("XML decoding failed: {e}");
        JiraError::decode(PayloadFormat::Xml, payload, e)
    })
}

/// Local name of the first element of `text`
fn root_element(text: &str) -> std::result::Result<Option<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned()))
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}
