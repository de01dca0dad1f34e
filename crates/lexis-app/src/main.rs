use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use lexis_config::Config;
use lexis_ui::UiOptions;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

use crate::controller::AppController;
use crate::state::AppState;

mod controller;
mod events;
mod profile;
mod services;
mod state;


#[derive(Parser, Debug)]
#[clap(author, version, about = "Offline dictionary with translation and voice input", long_about = None)]
struct Args {
    /// Profile name under the user config directory
    #[clap(long, default_value = "main")]
    profile: String,

    /// WordNet JSON export, overrides the profile's lexicon
    #[clap(long)]
    lexicon: Option<String>,

    /// Log as JSON lines
    #[clap(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok();
    init_tracing(args.log_json);

    let mut config = load_config(&args.profile);
    config.apply_env();
    if let Some(path) = args.lexicon {
        config.dictionary.lexicon_path = Some(path);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let guard = runtime.enter();

    let ui_options = UiOptions {
        title: config.ui.title.clone(),
        language: config.translator.to_lang,
    };
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    // Slint must own the main thread
    let result = lexis_ui::run_ui(ui_options, controller.ui_bridge(), controller.ui_receiver());

    controller.shutdown();
    runtime.block_on(async {
        let drained = tokio::time::timeout(Duration::from_secs(2), drain(&mut tasks)).await;
        if drained.is_err() {
            tracing::warn!("Backend still busy, aborting tasks");
            tasks.shutdown().await;
        }
    });

    drop(guard);
    runtime.shutdown_timeout(Duration::from_secs(1));
    tracing::info!("Shut down");

    result
}

async fn drain(tasks: &mut JoinSet<anyhow::Result<()>>) {
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("event_loop exited: {e}"),
            Err(e) => tracing::error!("event_loop panicked: {e}"),
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(name: &str) -> Config {
    let loaded = profile::init_user_config().and_then(|dir| profile::load_user_profile(&dir, name));
    match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load profile '{}': {}, using defaults", name, e);
            Config::default()
        }
    }
}
