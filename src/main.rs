use clap::Parser;
use page_watch::Watcher;
use page_watch::config::resolve_webhook;
use page_watch::error::WatchError;
use page_watch::net::{DiscordWebhook, HttpFetcher};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use url::Url;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let endpoint = match resolve_webhook(args.webhook_url.as_deref()) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            ::log::error!("Interrupted: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut watcher = match build_watcher(&args, endpoint) {
        Ok(watcher) => watcher,
        Err(e) => {
            ::log::error!("Failed to start watcher: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.once {
        return match watcher.tick().await {
            Some(_) => ExitCode::SUCCESS,
            None => ExitCode::FAILURE,
        };
    }

    // Ctrl-C stops the loop at the next sleep
    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ::log::info!("Shutdown requested");
            signal.cancel();
        }
    });

    watcher.run(shutdown).await;
    ExitCode::SUCCESS
}

fn build_watcher(
    args: &Args,
    endpoint: Url,
) -> Result<Watcher<HttpFetcher, DiscordWebhook>, WatchError> {
    let config = args.watcher_config()?;
    let fetcher = HttpFetcher::new(&config.user_agent, config.request_timeout())?;
    let webhook = DiscordWebhook::new(endpoint, config.request_timeout())?;

    Ok(Watcher::new(
        config.url.clone(),
        config.keyword_set()?,
        config.check_interval(),
        fetcher,
        webhook,
    ))
}
