use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use genalpha_config::Config;
use genalpha_core::dictionary::{Dictionary, SearchOptions};
use genalpha_core::settings::{self, SettingsForm};
use genalpha_proxy::ProxyServer;
use genalpha_translator::TranslateError;
use genalpha_types::TranslationDirection;
use tokio::signal;

mod commands;
mod logging;
mod practice;
mod state;

use self::commands::{Cli, Commands, HistoryCommands, MatchArg, SettingsCommands};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.log_json);

    let state = AppState::new(Config::new())?;

    match cli.command {
        Commands::Serve { host, port } => run_serve(&state, host, port).await,
        Commands::Translate { text, direction } => {
            run_translate(&state, &text.join(" "), direction).await
        }
        Commands::Settings { command } => run_settings(&state, command).await,
        Commands::History { command } => run_history(&state, command),
        Commands::Dictionary {
            query,
            limit,
            match_type,
        } => {
            run_dictionary(&state, query.as_deref().unwrap_or(""), limit, match_type);
            Ok(())
        }
        Commands::Quiz { questions } => {
            let mut rng = rand::thread_rng();
            practice::run_quiz(
                &state.vocabulary,
                questions,
                &mut rng,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )
            .context("quiz session failed")?;
            Ok(())
        }
        Commands::Flashcards => {
            let mut rng = rand::thread_rng();
            practice::run_flashcards(
                &state.vocabulary,
                &mut rng,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )
            .context("flashcard session failed")?;
            Ok(())
        }
    }
}

/// Resolves on Ctrl+C. If the handler cannot be installed it never resolves.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl+c: {e}");
        std::future::pending::<()>().await;
    }
}

async fn run_serve(
    state: &AppState,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let mut network = state.config.network.clone();
    if let Some(host) = host {
        network.host = host;
    }
    if let Some(port) = port {
        network.port = port;
    }

    let server = ProxyServer::new(state.config.upstream.clone());
    server
        .start(&network.bind_addr(), async {
            shutdown_signal().await;
            tracing::info!("Shutdown requested");
        })
        .await
        .context("proxy server failed")
}

async fn run_translate(
    state: &AppState,
    text: &str,
    direction: TranslationDirection,
) -> anyhow::Result<()> {
    let client = Arc::new(state.translation_client());
    let task = client.spawn(text, direction);
    let cancel = task.cancellation_token();

    let join = task.join();
    tokio::pin!(join);

    let result = tokio::select! {
        result = &mut join => result,
        _ = shutdown_signal() => {
            tracing::info!("Cancelling translation");
            cancel.cancel();
            join.await
        }
    };

    match result {
        Ok(translation) => {
            tracing::debug!(provider = %translation.provider, "Translation finished");
            println!("{}", translation.text);
            Ok(())
        }
        Err(TranslateError::Cancelled) => {
            eprintln!("Translation cancelled.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn run_settings(state: &AppState, command: SettingsCommands) -> anyhow::Result<()> {
    let store = state.store.as_ref();

    match command {
        SettingsCommands::Show => {
            let summary = settings::summary(store);
            let or_default = |v: Option<String>| v.unwrap_or_else(|| "(default)".to_string());

            if summary.key_length == 0 {
                println!("API key:     not set (mock mode)");
            } else {
                println!(
                    "API key:     {} chars, starts with sk-: {}",
                    summary.key_length,
                    if summary.key_has_sk_prefix { "yes" } else { "no" }
                );
            }
            println!("API URL:     {}", or_default(summary.api_url));
            println!("Model:       {}", or_default(summary.model));
            println!("Temperature: {}", or_default(summary.temperature));
        }
        SettingsCommands::Save {
            api_key,
            api_url,
            model,
            temperature,
        } => {
            let form = SettingsForm {
                api_key,
                api_url,
                model,
                temperature,
            };
            settings::save(store, &form)?;
            println!("Key saved locally.");
        }
        SettingsCommands::Clear => {
            settings::clear(store)?;
            println!("Local key cleared. Translator will use mock mode.");
        }
        SettingsCommands::Test => {
            let summary = settings::summary(store);
            if summary.key_length == 0 || summary.model.is_none() || summary.temperature.is_none() {
                println!("{}", settings::SettingsError::Incomplete);
                return Ok(());
            }

            match state.translation_client().check_settings().await {
                Ok(()) => println!("Test passed. API key is working."),
                Err(TranslateError::UpstreamStatus { body, .. }) => {
                    println!("Test failed: {body}")
                }
                Err(e) => {
                    tracing::debug!("Settings check failed: {e}");
                    println!("Test failed due to a network or proxy error.")
                }
            }
        }
    }

    Ok(())
}

fn run_history(state: &AppState, command: HistoryCommands) -> anyhow::Result<()> {
    let history = state.history();

    match command {
        HistoryCommands::List => {
            let entries = history.load();
            if entries.is_empty() {
                println!("No translations yet.");
            }
            for entry in entries {
                println!("{}  {}  [{}]", entry.id, entry.timestamp, entry.direction.label());
                println!("  {}", entry.input);
                println!("  → {}", entry.output);
            }
        }
        HistoryCommands::Delete { id } => {
            if history.remove(&id)? {
                println!("Deleted {id}.");
            } else {
                println!("No history entry with id {id}.");
            }
        }
        HistoryCommands::Clear => {
            history.clear()?;
            println!("History cleared.");
        }
        HistoryCommands::Resume => match history.latest() {
            Some(entry) => {
                println!("Direction: {}", entry.direction);
                println!("Input:     {}", entry.input);
                println!("Output:    {}", entry.output);
            }
            None => println!("No translations yet."),
        },
    }

    Ok(())
}

fn run_dictionary(state: &AppState, query: &str, limit: Option<usize>, match_type: MatchArg) {
    let options = SearchOptions {
        max_results: limit,
        match_type: match_type.into(),
    };

    let results = state.vocabulary.search(query, options);
    if results.is_empty() {
        println!("No slang found. Try another search.");
        return;
    }

    for entry in results {
        println!("{}: {}", entry.term, entry.meaning);
        println!("  \"{}\"", entry.example);
        if !entry.tags.is_empty() {
            println!("  tags: {}", entry.tags.join(", "));
        }
    }
}
