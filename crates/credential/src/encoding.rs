use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Encode bytes as an unpadded base64url segment.
pub(crate) fn encode_segment(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode an unpadded base64url segment.
///
/// Padding, the standard alphabet and non-zero trailing bits are all
/// rejected, so every byte string has exactly one accepted encoding.
pub(crate) fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD.decode(segment).ok()
}

/// Split a credential into its header, payload and signature segments.
pub(crate) fn split_segments(credential: &str) -> Option<(&str, &str, &str)> {
    let mut segments = credential.split('.');
    let header = segments.next()?;
    let payload = segments.next()?;
    let signature = segments.next()?;

    if segments.next().is_some() {
        return None;
    }
    if header.is_empty() || payload.is_empty() || signature.is_empty() {
        return None;
    }
    Some((header, payload, signature))
}
