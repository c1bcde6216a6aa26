use monostate::MustBeBool;

use crate::prelude::*;

/// Telegram bot API [response][1].
///
/// [1]: https://core.telegram.org/bots/api#making-requests
#[derive(Debug, Deserialize)]
#[must_use]
#[serde(untagged)]
pub enum Response<T> {
    Ok {
        #[allow(dead_code)]
        ok: MustBeBool<true>,

        result: T,
    },

    Err {
        #[allow(dead_code)]
        ok: MustBeBool<false>,

        #[serde(default)]
        description: String,

        #[serde(default)]
        error_code: i64,

        #[serde(default)]
        parameters: Option<ResponseParameters>,
    },
}

/// [Additional error details][1], which may help to automatically handle the error.
///
/// [1]: https://core.telegram.org/bots/api#responseparameters
#[derive(Debug, Default, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with the specified identifier.
    #[serde(default)]
    pub migrate_to_chat_id: Option<i64>,

    /// In case of exceeding flood control, the number of seconds left to wait before the request
    /// can be repeated.
    #[serde(default)]
    pub retry_after: Option<u64>,
}

impl<T> From<Response<T>> for Result<T> {
    fn from(response: Response<T>) -> Self {
        match response {
            Response::Ok { result, .. } => Ok(result),
            Response::Err { description, error_code, parameters, .. } => {
                Err(classify(error_code, description, parameters.unwrap_or_default()))
            }
        }
    }
}

/// Map the API error onto the error taxonomy.
///
/// The API answers `404` to both unknown methods and malformed tokens, the caller tells them
/// apart by whether the token has been proven valid before.
pub fn classify(error_code: i64, description: String, parameters: ResponseParameters) -> Error {
    if let Some(retry_after_secs) = parameters.retry_after {
        return Error::TooManyRequests { retry_after_secs };
    }
    if let Some(new_chat_id) = parameters.migrate_to_chat_id {
        return Error::ChatMigrated { new_chat_id };
    }
    match error_code {
        400 => Error::BadRequest(description),
        401 => Error::InvalidToken(description),
        404 => Error::EndpointNotFound(description),
        403 => Error::Forbidden(description),
        409 => Error::Conflict(description),
        _ => Error::Api { error_code, description },
    }
}

/// Parse the raw HTTP response into the method result.
///
/// A body which is not an API envelope is reported by its HTTP status.
pub fn parse(status: u16, body: &[u8]) -> Result<Value> {
    match serde_json::from_slice::<Response<Value>>(body) {
        Ok(response) => response.into(),
        Err(error) if (200..300).contains(&status) => Err(error.into()),
        Err(_) => match status {
            401 => Err(Error::InvalidToken(format!("HTTP {status}"))),
            404 => Err(Error::EndpointNotFound(format!("HTTP {status}"))),
            _ => Err(Error::Network(format!("HTTP {status}: {}", String::from_utf8_lossy(body)))),
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn response_ok() -> Result {
        // language=json
        let response: Response<u32> = serde_json::from_str(r#"{"ok": true, "result": 42}"#)?;
        match response {
            Response::Ok { result, .. } => {
                assert_eq!(result, 42);
            }
            Response::Err { .. } => unreachable!(),
        }
        Ok(())
    }

    #[test]
    fn parse_ok() -> Result {
        // language=json
        let result = parse(200, br#"{"ok": true, "result": {"id": 1}}"#)?;
        assert_eq!(result, json!({"id": 1}));
        Ok(())
    }

    #[test]
    fn too_many_requests_ok() {
        // language=json
        let body = br#"{"ok": false, "error_code": 429, "description": "Too Many Requests: retry after 5", "parameters": {"retry_after": 5}}"#;
        assert!(matches!(parse(429, body), Err(Error::TooManyRequests { retry_after_secs: 5 })));
    }

    #[test]
    fn chat_migrated_ok() {
        // language=json
        let body = br#"{"ok": false, "error_code": 400, "description": "Bad Request: group chat was upgraded", "parameters": {"migrate_to_chat_id": -1001}}"#;
        assert!(matches!(parse(400, body), Err(Error::ChatMigrated { new_chat_id: -1001 })));
    }

    #[test]
    fn classification_ok() {
        let cases: [(i64, fn(&Error) -> bool); 6] = [
            (400, |error| matches!(error, Error::BadRequest(_))),
            (401, |error| matches!(error, Error::InvalidToken(_))),
            (403, |error| matches!(error, Error::Forbidden(_))),
            (404, |error| matches!(error, Error::EndpointNotFound(_))),
            (409, |error| matches!(error, Error::Conflict(_))),
            (502, |error| matches!(error, Error::Api { error_code: 502, .. })),
        ];
        for (error_code, check) in cases {
            let error = classify(error_code, "oops".to_owned(), ResponseParameters::default());
            assert!(check(&error), "{error_code}: {error:?}");
        }
    }

    #[test]
    fn parse_html_error_page_ok() {
        assert!(matches!(parse(502, b"<html>Bad Gateway</html>"), Err(Error::Network(_))));
        assert!(matches!(parse(404, b"Not Found"), Err(Error::EndpointNotFound(_))));
        assert!(matches!(parse(200, b"not json"), Err(Error::Json(_))));
    }
}
