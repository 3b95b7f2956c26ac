//! Single-fragment loading with multi-encoding tolerance.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use encoding_rs::Encoding;

use super::types::{
    FragmentError,
    FragmentMap,
};

/// Candidate encodings, tried in order.
///
/// Translation fragments are contributed by hand and occasionally arrive
/// GBK-encoded instead of UTF-8; a candidate is accepted only if it decodes
/// without errors and the decoded text parses as a JSON object.
static CANDIDATE_ENCODINGS: [&Encoding; 2] = [encoding_rs::UTF_8, encoding_rs::GBK];

/// Load one translation fragment from `path`.
///
/// # Errors
/// - [`FragmentError::NotFound`] when the file does not exist
/// - [`FragmentError::Io`] when the file cannot be read
/// - [`FragmentError::Parse`] when no candidate encoding yields a JSON object
pub fn load_fragment(path: &Path) -> Result<FragmentMap, FragmentError> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            FragmentError::NotFound { path: path.to_path_buf() }
        } else {
            FragmentError::Io { path: path.to_path_buf(), source }
        }
    })?;

    for encoding in CANDIDATE_ENCODINGS {
        let (text, _, had_errors) = encoding.decode(&bytes);
        if had_errors {
            tracing::debug!(
                path = %path.display(),
                encoding = encoding.name(),
                "Fragment does not decode under candidate encoding"
            );
            continue;
        }

        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(serde_json::Value::Object(map)) => return Ok(map),
            Ok(_) => {
                // Decoded fine but the document is not a mapping; no other
                // encoding will change that.
                break;
            }
            Err(error) => {
                tracing::debug!(
                    path = %path.display(),
                    encoding = encoding.name(),
                    %error,
                    "Fragment does not parse under candidate encoding"
                );
            }
        }
    }

    Err(FragmentError::Parse { path: path.to_path_buf() })
}
