use clap::Parser;

use dpl_cli::cli::commands::{languages, translate, usage};
use dpl_cli::cli::{Args, Command};
use dpl_cli::deepl::Error;
use dpl_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("{}", Style::error(format!("error: {err:#}")));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Translate {
            source_lang,
            target_lang,
            text,
        } => {
            let options = translate::TranslateOptions {
                source_lang,
                target_lang,
                text,
                auth_key: args.auth_key,
                api_url: args.api_url,
            };
            translate::run_translate(options).await
        }
        Command::Usage => {
            let options = usage::UsageOptions {
                auth_key: args.auth_key,
                api_url: args.api_url,
            };
            usage::run_usage(options).await
        }
        Command::Languages => {
            languages::print_languages();
            Ok(())
        }
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(Error::InvalidLanguage(_) | Error::EmptyInput) => exitcode::USAGE,
        Some(Error::InvalidConfig(_)) => exitcode::CONFIG,
        Some(Error::Request(_)) => exitcode::UNAVAILABLE,
        Some(Error::Decode(_) | Error::Service(_)) => exitcode::PROTOCOL,
        None => exitcode::SOFTWARE,
    }
}
