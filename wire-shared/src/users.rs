///
/// The part of a user the profile page needs to render a visit link.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserReference {
    pub username: String,
}
