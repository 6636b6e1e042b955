use std::str::FromStr;

use crate::{domain::users::ProfileUsername, markup};

///
/// The four list sections of a profile page.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Messages,
    RecommendedUsers,
    Following,
    Followers,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Messages => "messages",
            SectionId::RecommendedUsers => "recommended-users",
            SectionId::Following => "following",
            SectionId::Followers => "followers",
        }
    }

    pub fn header_id(&self) -> String {
        format!("{}-header", self.as_str())
    }

    pub fn list_id(&self) -> String {
        format!("{}-list", self.as_str())
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Messages => "Wires",
            SectionId::RecommendedUsers => "Who to follow",
            SectionId::Following => "Following",
            SectionId::Followers => "Followers",
        }
    }

    ///
    /// Row shown in place of an empty result.
    ///
    pub fn placeholder(&self) -> String {
        match self {
            SectionId::Messages => {
                "<li class='list-group-item'>This user has not created any wires</li>".to_string()
            }
            SectionId::RecommendedUsers => {
                markup::placeholder_row("There are no users to recommend at this time")
            }
            SectionId::Following => markup::placeholder_row("This user is not following anyone"),
            SectionId::Followers => {
                markup::placeholder_row("This user does not have any followers")
            }
        }
    }

    fn list_class(&self) -> &'static str {
        match self {
            SectionId::Messages => "list-group user-wires",
            _ => "list-group",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "messages" => Ok(Self::Messages),
            "recommended-users" => Ok(Self::RecommendedUsers),
            "following" => Ok(Self::Following),
            "followers" => Ok(Self::Followers),
            other => Err(format!("Unknown profile section {:?}!", other)),
        }
    }
}

///
/// A header followed by rows, with a loading indicator until the first rows arrive.
///
#[derive(Debug, Clone)]
pub struct ListSection {
    id: SectionId,
    rows: Vec<String>,
    loading: bool,
}

impl ListSection {
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            rows: Vec::new(),
            loading: true,
        }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    ///
    /// Drop every row after the header and the loading indicator, then insert `rows`.
    ///
    pub fn replace_rows(&mut self, rows: Vec<String>) {
        self.rows = rows;
        self.loading = false;
    }

    pub fn render(&self) -> String {
        let mut html = format!(
            "<ul id='{}' class='{}'><li id='{}' class='list-group-item active'>{}</li>",
            self.id.list_id(),
            self.id.list_class(),
            self.id.header_id(),
            self.id.title(),
        );

        if self.loading {
            html.push_str(&markup::loader_row());
        }

        for row in &self.rows {
            html.push_str(row);
        }

        html.push_str("</ul>");
        html
    }
}

///
/// In-memory profile page: the viewed username plus one list section per load flow.
///
#[derive(Debug, Clone)]
pub struct ProfilePage {
    pub username: ProfileUsername,
    pub messages: ListSection,
    pub recommended_users: ListSection,
    pub following: ListSection,
    pub followers: ListSection,
}

impl ProfilePage {
    pub fn new(username: ProfileUsername) -> Self {
        Self {
            username,
            messages: ListSection::new(SectionId::Messages),
            recommended_users: ListSection::new(SectionId::RecommendedUsers),
            following: ListSection::new(SectionId::Following),
            followers: ListSection::new(SectionId::Followers),
        }
    }

    pub fn section(&self, id: SectionId) -> &ListSection {
        match id {
            SectionId::Messages => &self.messages,
            SectionId::RecommendedUsers => &self.recommended_users,
            SectionId::Following => &self.following,
            SectionId::Followers => &self.followers,
        }
    }

    pub fn render(&self) -> String {
        let username = markup::escape_html(self.username.as_ref());

        format!(
            "<!DOCTYPE html>\
             <html lang='en'>\
             <head><meta charset='utf-8'><title>{username} | Wire</title></head>\
             <body>\
             <script>var jsUsername = '{username}';</script>\
             <div class='container'><div class='row'>\
             <div class='col-md-8'><h2>{username}</h2>{messages}</div>\
             <div class='col-md-4'>{recommended_users}{following}{followers}</div>\
             </div></div>\
             </body>\
             </html>",
            username = username,
            messages = self.messages.render(),
            recommended_users = self.recommended_users.render(),
            following = self.following.render(),
            followers = self.followers.render(),
        )
    }
}
