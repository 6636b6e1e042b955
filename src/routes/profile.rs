use actix_http::StatusCode;
use actix_web::{http::header::ContentType, web, HttpResponse, ResponseError};
use wire_shared::error_chain_fmt;

use crate::{
    backend::WireBackend,
    domain::users::ProfileUsername,
    loader::ProfileLoader,
    page::{ListSection, ProfilePage, SectionId},
};

///
/// Possibles errors that can occur on the profile routes.
///
/// Backend failures are not among them: they leave a section loading instead.
///
#[derive(thiserror::Error)]
pub enum ProfileError {
    #[error("{0}")]
    InvalidUsername(String),
    #[error("{0}")]
    UnknownSection(String),
}

impl std::fmt::Debug for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ProfileError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProfileError::InvalidUsername(_) => StatusCode::BAD_REQUEST,
            ProfileError::UnknownSection(_) => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(serde::Deserialize)]
pub struct SectionPath {
    username: String,
    section: String,
}

#[tracing::instrument(name = "Render profile page", skip(username, backend), fields(username = %username))]
pub async fn profile_page(
    username: web::Path<String>,
    backend: web::Data<WireBackend>,
) -> Result<HttpResponse, ProfileError> {
    let username =
        ProfileUsername::parse(username.into_inner()).map_err(ProfileError::InvalidUsername)?;

    let mut page = ProfilePage::new(username);
    ProfileLoader::new(backend.get_ref()).load(&mut page).await;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page.render()))
}

#[tracing::instrument(
    name = "Render profile section",
    skip(path, backend),
    fields(username = %path.username, section = %path.section)
)]
pub async fn profile_section(
    path: web::Path<SectionPath>,
    backend: web::Data<WireBackend>,
) -> Result<HttpResponse, ProfileError> {
    let SectionPath { username, section } = path.into_inner();

    let username = ProfileUsername::parse(username).map_err(ProfileError::InvalidUsername)?;
    let section_id = section
        .parse::<SectionId>()
        .map_err(ProfileError::UnknownSection)?;

    let mut section = ListSection::new(section_id);
    ProfileLoader::new(backend.get_ref())
        .load_section(&username, &mut section)
        .await;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(section.render()))
}
