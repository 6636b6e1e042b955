use wire_shared::{
    error_chain_fmt,
    follows::{FollowEdge, FollowListing},
};

use crate::{
    backend::{BackendError, WireApi},
    domain::users::ProfileUsername,
    markup::{self, ButtonStyle},
    page::{ListSection, ProfilePage, SectionId},
};

///
/// Why a section was left in its loading state.
///
#[derive(thiserror::Error)]
pub enum LoadError {
    /// The backend answered `{success: false, message}`.
    #[error("Backend rejected the request: {0}")]
    Rejected(String),
    #[error("Backend answered with an object instead of a list")]
    UnexpectedPayload,
    #[error(transparent)]
    BackendFailed(#[from] BackendError),
}

impl std::fmt::Debug for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

///
/// Fills the list sections of a [`ProfilePage`] from a [`WireApi`].
///
pub struct ProfileLoader<'a, A: WireApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: WireApi + ?Sized> ProfileLoader<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    ///
    /// Run the four load flows concurrently.
    ///
    /// Every flow owns exactly one section. A failing flow is logged and leaves its
    /// section loading; the others are unaffected.
    ///
    #[tracing::instrument(name = "Load profile page", skip(self, page), fields(username = %page.username))]
    pub async fn load(&self, page: &mut ProfilePage) {
        let ProfilePage {
            username,
            messages,
            recommended_users,
            following,
            followers,
        } = page;
        let username = &*username;

        let (messages, recommended_users, following, followers) = futures::join!(
            self.load_messages(username, messages),
            self.load_recommended_users(username, recommended_users),
            self.load_follows(username, following),
            self.load_followers(username, followers)
        );

        report(SectionId::Messages, messages);
        report(SectionId::RecommendedUsers, recommended_users);
        report(SectionId::Following, following);
        report(SectionId::Followers, followers);
    }

    ///
    /// Run the flow that fills `section`, logging its failure.
    ///
    pub async fn load_section(&self, username: &ProfileUsername, section: &mut ListSection) {
        let id = section.id();

        let result = match id {
            SectionId::Messages => self.load_messages(username, section).await,
            SectionId::RecommendedUsers => self.load_recommended_users(username, section).await,
            SectionId::Following => self.load_follows(username, section).await,
            SectionId::Followers => self.load_followers(username, section).await,
        };

        report(id, result);
    }

    #[tracing::instrument(name = "Load messages", skip(self, section))]
    pub async fn load_messages(
        &self,
        username: &ProfileUsername,
        section: &mut ListSection,
    ) -> Result<(), LoadError> {
        let messages = self.api.messages(username).await?;

        let rows = if messages.is_empty() {
            vec![SectionId::Messages.placeholder()]
        } else {
            messages.iter().map(markup::message_row).collect()
        };

        section.replace_rows(rows);

        Ok(())
    }

    #[tracing::instrument(name = "Load recommended users", skip(self, section))]
    pub async fn load_recommended_users(
        &self,
        username: &ProfileUsername,
        section: &mut ListSection,
    ) -> Result<(), LoadError> {
        let users = self.api.recommended_users(username).await?;

        let rows = if users.is_empty() {
            vec![SectionId::RecommendedUsers.placeholder()]
        } else {
            users
                .iter()
                .map(|user| markup::user_row(&user.username, "visit", ButtonStyle::Primary))
                .collect()
        };

        section.replace_rows(rows);

        Ok(())
    }

    #[tracing::instrument(name = "Load followed users", skip(self, section))]
    pub async fn load_follows(
        &self,
        username: &ProfileUsername,
        section: &mut ListSection,
    ) -> Result<(), LoadError> {
        let listing = self.api.following(username).await?;

        self.render_follow_listing(listing, section, ButtonStyle::Primary)
            .await
    }

    #[tracing::instrument(name = "Load followers", skip(self, section))]
    pub async fn load_followers(
        &self,
        username: &ProfileUsername,
        section: &mut ListSection,
    ) -> Result<(), LoadError> {
        let listing = self.api.followers(username).await?;

        self.render_follow_listing(listing, section, ButtonStyle::Default)
            .await
    }

    ///
    /// Resolve the other party of every edge and render one row per user.
    ///
    async fn render_follow_listing<E: FollowEdge>(
        &self,
        listing: FollowListing<E>,
        section: &mut ListSection,
        style: ButtonStyle,
    ) -> Result<(), LoadError> {
        if let FollowListing::Failure(failure) = &listing {
            return Err(if failure.success {
                LoadError::UnexpectedPayload
            } else {
                LoadError::Rejected(failure.message.clone())
            });
        }

        let user_ids = listing.user_ids();

        let rows = if user_ids.is_empty() {
            vec![section.id().placeholder()]
        } else {
            self.api
                .users(&user_ids)
                .await?
                .iter()
                .map(|user| markup::user_row(&user.username, "visit", style))
                .collect()
        };

        section.replace_rows(rows);

        Ok(())
    }
}

fn report(section: SectionId, result: Result<(), LoadError>) {
    match result {
        Ok(()) => {}
        Err(LoadError::Rejected(reason)) => {
            tracing::warn!(section = %section, reason = %reason, "Backend rejected profile section request");
        }
        Err(e) => {
            tracing::error!(section = %section, error = ?e, "Failed to load profile section");
        }
    }
}
