//! Main entrypoint for the mail checker.

use status_render::{StatusDirective, StatusUpdate};

/// Run the mail checker against the terminal.
#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let config = config_load::from_default_env().await?;
    if !config.enabled {
        tracing::info!("mail checking is disabled by configuration");
        return Ok(());
    }

    let mut checker = check_loop::MailChecker::default();
    let locator = checker.enable(config_bringup::enable_params(&config), |update| async move {
        apply_update(update);
    })?;

    tracing::info!(
        mailbox_kind = ?locator.kind,
        mailbox_path = %locator.path.display(),
        poll_interval_secs = config.interval_secs,
        "mail checking enabled"
    );

    tokio::signal::ctrl_c().await?;
    checker.disable();

    Ok(())
}

/// Apply a status update to the terminal, standing in for the host's
/// status variable and event dispatch.
fn apply_update(update: StatusUpdate) {
    match update.directive {
        StatusDirective::Set(text) => println!("status: {text}"),
        StatusDirective::Clear => println!("status cleared"),
    }

    if let Some(announcement) = update.announcement {
        println!("{announcement}");
    }
}
