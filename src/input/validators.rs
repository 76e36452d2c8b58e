use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

// U+FEFF counts as whitespace here, as it does for browser form input.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}]+@[^\s\x{FEFF}]+\.[^\s\x{FEFF}]+$")
        .expect("email pattern is valid")
});

pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "gif", "png"];

pub fn required(message: impl Into<String>) -> Validator {
    let msg = message.into();
    Box::new(move |value: &str| {
        if is_blank(value) {
            Err(msg.clone())
        } else {
            Ok(())
        }
    })
}

/// Structural check only: something, `@`, something, `.`, something, with no
/// whitespace anywhere.
pub fn email(message: impl Into<String>) -> Validator {
    custom(|value| EMAIL_PATTERN.is_match(value), message)
}

/// Absolute URL whose path ends in one of [`IMAGE_EXTENSIONS`], case-insensitive.
pub fn image_url(message: impl Into<String>) -> Validator {
    custom(is_image_url, message)
}

pub fn custom<F>(f: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let msg = message.into();
    Box::new(
        move |value: &str| {
            if f(value) { Ok(()) } else { Err(msg.clone()) }
        },
    )
}

pub fn is_blank(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn is_image_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    let path = url.path().to_ascii_lowercase();
    let Some((_, extension)) = path.rsplit_once('.') else {
        return false;
    };
    IMAGE_EXTENSIONS.contains(&extension)
}
