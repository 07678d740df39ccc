// SPDX-FileCopyrightText: 2026 The insiight contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use serde_json::{ser::PrettyFormatter, Deserializer, Serializer};
use std::borrow::Cow;

/// Re-indent a JSON document with two spaces.
///
/// The document is streamed token by token, so member order and repeated keys
/// survive. Anything that does not parse as JSON is handed back unchanged.
pub fn pretty_json(bytes: &[u8]) -> Cow<'_, [u8]> {
    match reindent(bytes) {
        Ok(pretty) => Cow::Owned(pretty),
        Err(err) => {
            log::warn!("response is not valid JSON ({}), printing it as is", err);
            Cow::Borrowed(bytes)
        }
    }
}

fn reindent(bytes: &[u8]) -> serde_json::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(bytes.len() * 2);
    let mut de = Deserializer::from_slice(bytes);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"  "));
    serde_transcode::transcode(&mut de, &mut ser)?;
    de.end()?;
    Ok(out)
}
