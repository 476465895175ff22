//! Configuration check.
//!
//! Loads the relay configuration the same way the server does and prints
//! the effective values with secrets redacted.

use payroll_relay::config::{ConfigError, RelayConfig};

/// Load the configuration and print it.
///
/// # Errors
///
/// Returns the configuration error the server would fail to start with.
pub fn run() -> Result<(), ConfigError> {
    let config = RelayConfig::from_env()?;

    #[allow(clippy::print_stdout)]
    {
        println!("Configuration OK");
        println!("  listen:              {}", config.socket_addr());
        println!("  locale:              {}", config.locale.code());
        println!("  supervisor channel:  {}", config.slack.supervisor_channel_id);
        println!("  slack api:           {}", config.slack.api_base);
        println!("  upload dir:          {}", config.upload_dir.display());
        println!("  max upload bytes:    {}", config.max_upload_bytes);
        println!("  ack reaction:        :{}:", config.ack.reaction);
        println!("  consume on confirm:  {}", config.ack.consume_on_confirm);
        println!("  tracker ttl:         {}h", config.ack.ttl.as_secs() / 3600);
        println!("  tracker capacity:    {}", config.ack.max_entries);
        println!(
            "  columns:             {} | {} | {} | {} | {}",
            config.columns.recipient,
            config.columns.salary,
            config.columns.name,
            config.columns.absences,
            config.columns.holidays_worked
        );
        println!(
            "  sentry:              {}",
            if config.sentry_dsn.is_some() { "enabled" } else { "disabled" }
        );
    }

    Ok(())
}
