use crate::error::LivestatusError;

/// Validates the fixed16 header and returns the payload after it.
///
/// Only the 3-character status code at the front of the header is
/// inspected; the rest of the 16 bytes is length padding this client never
/// uses, since it reads the socket to end-of-stream instead. On a non-`200`
/// status the error message is the raw remainder after position 16 of the
/// full response text, trailing padding included.
pub(crate) fn validate(raw: &str) -> Result<&str, LivestatusError> {
    if raw.is_empty() {
        return Err(LivestatusError::EmptyResponse);
    }

    let body = raw.char_indices().nth(16).map_or("", |(i, _)| &raw[i..]);
    if raw.starts_with("200") {
        Ok(body)
    } else {
        Err(LivestatusError::Protocol(body.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_yields_payload() {
        let raw = "200             [[\"a\",\"b\"],[1,2]]";

        let payload = validate(raw).unwrap();
        assert_eq!(payload, "[[\"a\",\"b\"],[1,2]]");
    }

    #[test]
    fn error_status_reports_body() {
        let raw = "404          16\ntable not found";

        let err = validate(raw).unwrap_err();
        match err {
            LivestatusError::Protocol(msg) => assert!(msg.contains("table not found")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_response_never_parses_a_header() {
        assert!(matches!(validate(""), Err(LivestatusError::EmptyResponse)));
    }

    #[test]
    fn header_only_ok_response_has_empty_payload() {
        assert_eq!(validate("200             ").unwrap(), "");
    }

    #[test]
    fn truncated_error_response_has_empty_message() {
        let err = validate("502").unwrap_err();
        match err {
            LivestatusError::Protocol(msg) => assert_eq!(msg, ""),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
