//! Main entrypoint for the one-shot unread listing helper.

/// Run the unread listing helper.
#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let config = config_load::from_default_env().await?;
    let locator = match config.mailbox.as_ref() {
        Some(mailbox) => config_bringup::map_mailbox(mailbox),
        None => mailbox_locate::discover_from_env()?,
    };

    tracing::info!(
        mailbox_kind = ?locator.kind,
        mailbox_path = %locator.path.display(),
        "scanning mailbox"
    );

    let snapshot = mailbox_read::read(&locator).await?;

    println!(
        "{} unread message(s) in {}",
        snapshot.len(),
        locator.path.display()
    );
    for id in &snapshot {
        println!("  {}", id.as_str());
    }

    Ok(())
}
