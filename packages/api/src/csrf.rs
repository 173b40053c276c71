//! CSRF token mirroring.
//!
//! The server sets an `XSRF-TOKEN` cookie that script can read; every
//! state-changing request must echo its (URI-decoded) value back in the
//! `X-XSRF-TOKEN` header. Where the cookie is read from depends on the
//! platform, so it sits behind [`CsrfSource`].

use percent_encoding::percent_decode_str;
use reqwest::Method;

pub const CSRF_COOKIE: &str = "XSRF-TOKEN";
pub const CSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Supplies the current CSRF token, if the server has issued one.
pub trait CsrfSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Never supplies a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCsrf;

impl CsrfSource for NoCsrf {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Whether requests with this method must carry the CSRF header.
pub fn requires_csrf(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Find `name` in a `a=b; c=d` cookie string.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split("; ").find_map(|row| {
        row.strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
            .map(|value| value.split('=').next().unwrap_or(value))
    })
}

/// Percent-decode a cookie value. Invalid UTF-8 leaves the raw value.
pub fn decode_token(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

fn token_from_header(cookies: &str) -> Option<String> {
    cookie_value(cookies, CSRF_COOKIE)
        .filter(|v| !v.is_empty())
        .map(decode_token)
}

/// Reads `document.cookie` in the browser.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookies;

#[cfg(target_arch = "wasm32")]
impl CsrfSource for DocumentCookies {
    fn token(&self) -> Option<String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let html: web_sys::HtmlDocument = document.dyn_into().ok()?;
        let cookies = html.cookie().ok()?;
        token_from_header(&cookies)
    }
}

/// Reads the reqwest cookie jar shared with the HTTP client.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct JarCookies {
    jar: std::sync::Arc<reqwest::cookie::Jar>,
    url: reqwest::Url,
}

#[cfg(not(target_arch = "wasm32"))]
impl JarCookies {
    pub fn new(jar: std::sync::Arc<reqwest::cookie::Jar>, url: reqwest::Url) -> Self {
        Self { jar, url }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CsrfSource for JarCookies {
    fn token(&self) -> Option<String> {
        use reqwest::cookie::CookieStore;

        let header = self.jar.cookies(&self.url)?;
        let cookies = header.to_str().ok()?;
        token_from_header(cookies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_finds_named_entry() {
        let cookies = "theme=dark; XSRF-TOKEN=abc123; lang=en";
        assert_eq!(cookie_value(cookies, "XSRF-TOKEN"), Some("abc123"));
        assert_eq!(cookie_value(cookies, "lang"), Some("en"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn test_cookie_value_requires_exact_name() {
        assert_eq!(cookie_value("XSRF-TOKEN-OLD=zzz", "XSRF-TOKEN"), None);
        assert_eq!(cookie_value("MY-XSRF-TOKEN=zzz", "XSRF-TOKEN"), None);
    }

    #[test]
    fn test_cookie_value_stops_at_padding() {
        // Only the part before a second '=' is the value, matching how the
        // browser-side lookup splits on '='.
        assert_eq!(cookie_value("XSRF-TOKEN=abc=; x=1", "XSRF-TOKEN"), Some("abc"));
    }

    #[test]
    fn test_decode_token() {
        assert_eq!(decode_token("a%2Bb%3D%3D"), "a+b==");
        assert_eq!(decode_token("plain"), "plain");
        assert_eq!(decode_token("%FF%FE"), "%FF%FE");
    }

    #[test]
    fn test_requires_csrf() {
        assert!(!requires_csrf(&Method::GET));
        assert!(!requires_csrf(&Method::HEAD));
        assert!(!requires_csrf(&Method::OPTIONS));
        assert!(requires_csrf(&Method::POST));
        assert!(requires_csrf(&Method::DELETE));
        assert!(requires_csrf(&Method::PUT));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        assert_eq!(token_from_header("XSRF-TOKEN=; a=b"), None);
        assert_eq!(
            token_from_header("XSRF-TOKEN=x%2Fy"),
            Some("x/y".to_string())
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_jar_cookies_reads_token_for_url() {
        let jar = std::sync::Arc::new(reqwest::cookie::Jar::default());
        let url: reqwest::Url = "http://localhost:8080/".parse().unwrap();
        jar.add_cookie_str("XSRF-TOKEN=t%3D1; Path=/", &url);
        let source = JarCookies::new(jar, url);
        assert_eq!(source.token(), Some("t=1".to_string()));
    }
}
