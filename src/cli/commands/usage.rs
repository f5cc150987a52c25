use anyhow::{Context, Result};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::deepl::{Client, TranslationApi, default_http_client};
use crate::ui::{Spinner, Style};

pub struct UsageOptions {
    pub auth_key: Option<String>,
    pub api_url: Option<String>,
}

pub async fn run_usage(options: UsageOptions) -> Result<()> {
    let config_file = ConfigManager::new().load_or_default();
    let resolve_options = ResolveOptions {
        auth_key: options.auth_key,
        api_url: options.api_url,
    };
    let config = resolve_config(&resolve_options, &config_file)?;
    let client = Client::new(config, default_http_client()?)?;

    let spinner = Spinner::new("Fetching usage...");
    let result = client.usage().await;
    spinner.stop();

    let usage = result.context("failed to fetch usage")?;

    println!("{}", Style::header("Character usage"));
    println!(
        "  {} {}",
        Style::label("used: "),
        Style::value(usage.character_count)
    );
    println!(
        "  {} {}",
        Style::label("limit:"),
        Style::value(usage.character_limit)
    );
    if usage.character_limit > 0 {
        let percent =
            (usage.character_count as f64 / usage.character_limit as f64) * 100.0;
        println!("  {} {}", Style::label("quota:"), format_percent(percent));
    }

    Ok(())
}

fn format_percent(percent: f64) -> String {
    format!("{percent:.1}% consumed")
}
