use std::fmt;

use derivative::Derivative;
use serde::Serialize;

/// A struct to hold the used API key.
///
/// The key is redacted in [`Debug`] output so it never ends up in the logs.
#[derive(Derivative, Clone, PartialEq, Eq, Serialize)]
#[derivative(Debug)]
#[serde(transparent)]
pub struct UsedApiKey {
    #[derivative(Debug(format_with = "redact"))]
    pub value: String,
}

fn redact(_: &String, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("<redacted>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_the_key() {
        let used_api_key = UsedApiKey {
            value: "my-api-key".to_string(),
        };

        let debug = format!("{used_api_key:?}");

        assert!(!debug.contains("my-api-key"));
        assert_eq!(debug, "UsedApiKey { value: <redacted> }");
    }

    #[test]
    fn serializes_as_the_bare_key() {
        let used_api_key = UsedApiKey {
            value: "my-api-key".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&used_api_key).unwrap(),
            r#""my-api-key""#
        );
    }
}
