///
/// Username of the profile being viewed.
///
/// Mirrors the backend's username rules: up to 150 alphanumerics or `@ . + - _`.
/// Alphanumerics include non-ASCII letters, so the name still has to be
/// percent-encoded before it goes into a url.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUsername(String);

impl ProfileUsername {
    pub fn parse(value: String) -> Result<ProfileUsername, String> {
        let has_valid_characters = value
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));

        if validator::validate_length(&value, Some(1), Some(150), None) && has_valid_characters {
            Ok(Self(value))
        } else {
            Err(format!("{} is not a valid user name!", value))
        }
    }
}

impl AsRef<str> for ProfileUsername {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProfileUsername {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
