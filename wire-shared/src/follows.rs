use crate::UserId;

///
/// Edge returned by `/following/{username}`: the profile user follows `following_id`.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FollowingEdge {
    pub following_id: UserId,
}

///
/// Edge returned by `/followers/{username}`: `follower_id` follows the profile user.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FollowerEdge {
    pub follower_id: UserId,
}

///
/// Follow edges seen from the profile user, yielding the id of the other party.
///
pub trait FollowEdge {
    fn other_user_id(&self) -> UserId;
}

impl FollowEdge for FollowingEdge {
    fn other_user_id(&self) -> UserId {
        self.following_id
    }
}

impl FollowEdge for FollowerEdge {
    fn other_user_id(&self) -> UserId {
        self.follower_id
    }
}

///
/// Body of `{success: false, message}` answers on the follow endpoints.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

///
/// The follow endpoints answer either with a list of edges or with a failure object.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum FollowListing<T> {
    Edges(Vec<T>),
    Failure(FailureResponse),
}

impl<T: FollowEdge> FollowListing<T> {
    pub fn user_ids(&self) -> Vec<UserId> {
        match self {
            FollowListing::Edges(edges) => edges.iter().map(FollowEdge::other_user_id).collect(),
            FollowListing::Failure(_) => Vec::new(),
        }
    }
}
