use http::{HeaderMap, Uri};
use session_auth::{AuthConfig, Transport};

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Decides whether the session cookie gets the `Secure` attribute.
///
/// A reverse proxy's `X-Forwarded-Proto` wins, then the request URI scheme,
/// then `AuthConfig::secure_cookie`.
pub fn request_transport(headers: &HeaderMap, uri: &Uri, config: &AuthConfig) -> Transport {
    let forwarded = headers
        .get(X_FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|proto| !proto.is_empty());

    if let Some(proto) = forwarded {
        return Transport::from_scheme(proto);
    }
    if let Some(scheme) = uri.scheme_str() {
        return Transport::from_scheme(scheme);
    }
    Transport::from(config.secure_cookie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn config(secure: bool) -> AuthConfig {
        AuthConfig::new("transport-test").with_secure_cookie(secure)
    }

    #[test]
    fn test_forwarded_proto_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_PROTO, HeaderValue::from_static("https"));
        let uri: Uri = "http://example.com/login".parse().unwrap();
        assert_eq!(
            request_transport(&headers, &uri, &config(false)),
            Transport::Secure
        );

        headers.insert(X_FORWARDED_PROTO, HeaderValue::from_static("http, https"));
        assert_eq!(
            request_transport(&headers, &uri, &config(true)),
            Transport::Plain
        );
    }

    #[test]
    fn test_uri_scheme_then_config() {
        let headers = HeaderMap::new();
        let absolute: Uri = "https://example.com/login".parse().unwrap();
        assert_eq!(
            request_transport(&headers, &absolute, &config(false)),
            Transport::Secure
        );

        let relative: Uri = "/login".parse().unwrap();
        assert_eq!(
            request_transport(&headers, &relative, &config(false)),
            Transport::Plain
        );
        assert_eq!(
            request_transport(&headers, &relative, &config(true)),
            Transport::Secure
        );
    }
}
