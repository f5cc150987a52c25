use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dpl")]
#[command(about = "Client for the DeepL API (https://www.deepl.com/docs-api/)")]
#[command(version)]
pub struct Args {
    /// API authentication key (overrides DPL_AUTH_KEY and the config file)
    #[arg(short = 'k', long = "auth_key", global = true)]
    pub auth_key: Option<String>,

    /// API base URL (overrides DPL_API_URL and the config file)
    #[arg(long = "api_url", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate texts
    Translate {
        /// Language of the text to be translated
        #[arg(short = 's', long = "source_lang", default_value = "en")]
        source_lang: String,

        /// The language into which the text should be translated (e.g. ja)
        #[arg(short = 't', long = "target_lang")]
        target_lang: String,

        /// Text to translate (reads from stdin if not provided)
        text: Option<String>,
    },
    /// Show character usage and remaining quota
    Usage,
    /// List supported target language codes
    Languages,
}
