pub mod follows;
pub mod messages;
pub mod settings;
pub mod telemetry;
pub mod users;

///
/// Identifier of a user as handed out by the wire backend.
///
pub type UserId = i64;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
