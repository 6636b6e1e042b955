use anyhow::Context;
use wire_profile::application::Application;

use wire_shared::{
    settings::get_settings,
    telemetry::{get_subscriber, init_subscriber},
};

#[cfg(not(tarpaulin))]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("wire-profile".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_settings().context("Failed to read settings")?;
    let application = Application::build(settings)
        .await
        .context("Failed to bind the profile server")?;

    application.run_until_stopped().await?;

    Ok(())
}

#[cfg(tarpaulin)]
fn main() {}
