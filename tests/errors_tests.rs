use std::error::Error as _;
use std::path::PathBuf;

#[test]
fn test_error_enum_display_messages() {
    use api_design_util::errors::{ConfigError, HomeError, ValidationError};

    let h1 = HomeError::ApiError {
        status_code: 500,
        message: "Server blew up".to_string(),
    };
    assert!(h1.to_string().contains("500"));
    assert!(h1.to_string().contains("Server blew up"));

    let h2 = HomeError::UrlError("nope".to_string());
    assert_eq!(h2.to_string(), "Invalid base URL: nope");

    let c1 = ConfigError::MissingApiKey {
        path: PathBuf::from("/home/u/.config/home-cli/config.toml"),
    };
    assert_eq!(
        c1.to_string(),
        "API key not found in /home/u/.config/home-cli/config.toml"
    );

    let v1 = ValidationError::ApiPath("empty".to_string());
    assert!(v1.to_string().contains("API path validation failed"));
}

#[test]
fn test_serde_json_error_keeps_source() {
    use api_design_util::errors::HomeError;

    let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let expected = json_err.to_string();
    let err: HomeError = json_err.into();

    assert!(matches!(err, HomeError::DecodeError(_)));
    assert_eq!(err.to_string(), "Failed to decode JSON response");
    assert_eq!(err.source().map(|s| s.to_string()), Some(expected));
}
