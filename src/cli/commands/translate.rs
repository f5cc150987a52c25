use anyhow::{Context, Result};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::deepl::{Client, SourceLang, TargetLang, TranslationApi, default_http_client};
use crate::input::InputReader;
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub source_lang: String,
    pub target_lang: String,
    pub text: Option<String>,
    pub auth_key: Option<String>,
    pub api_url: Option<String>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    // Target language validation happens first: an unknown target is a hard
    // error, while an unknown source silently degrades to auto-detection.
    let target = TargetLang::parse(&options.target_lang)?;
    let source = SourceLang::parse(&options.source_lang);

    let text = InputReader::read(options.text)?;

    let config_file = ConfigManager::new().load_or_default();
    let resolve_options = ResolveOptions {
        auth_key: options.auth_key,
        api_url: options.api_url,
    };
    let config = resolve_config(&resolve_options, &config_file)?;
    let client = Client::new(config, default_http_client()?)?;

    let spinner = Spinner::new("Translating...");
    let result = client.translate(source, target, &text).await;
    spinner.stop();

    let response = result.context("failed to translate")?;

    let translation = response
        .translations
        .first()
        .context("service returned no translations")?;

    println!("{}", translation.text);

    Ok(())
}
