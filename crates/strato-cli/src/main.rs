mod args;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use strato_common::{resolve_endpoint, Credentials, LaunchRequest};
use strato_console::{
    filter, registry, ApiClient, ConsoleState, LaunchOptions, LaunchOutcome, LogOpener, ModelBoard,
    Orchestrator, UiOpener,
};

use crate::args::{Args, Command, InstanceCommand, RegistrationCommand};
use crate::output::{print_instances, print_registrations};

/// Opens the instance UI in the default browser; falls back to printing the
/// URL when no browser is available.
struct BrowserOpener;

impl UiOpener for BrowserOpener {
    fn open(&self, url: &str) {
        if let Err(e) = open::that(url) {
            tracing::warn!(error=%e, %url, "could not open a browser");
            println!("UI available at: {url}");
        }
    }
}

fn token_file() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".strato").join("token"))
}

#[tokio::main]
async fn main() -> Result<()> {
    strato_common::telemetry::init_tracing();
    let args = Args::parse();

    let credentials = match args.token {
        Some(token) => Credentials::new(Some(token)),
        None => Credentials::load(token_file().as_deref()),
    };
    let base_url = resolve_endpoint(args.endpoint.as_deref(), &args.console_url);
    let api = ApiClient::new(base_url, credentials);

    let opener: Arc<dyn UiOpener> = if args.no_browser {
        Arc::new(LogOpener)
    } else {
        Arc::new(BrowserOpener)
    };
    let state = ConsoleState::new();
    let board = ModelBoard::new(state.clone());
    let orchestrator = Orchestrator::new(api, state.clone(), board.clone(), opener);

    match args.command {
        Command::Instance { subcommand } => match subcommand {
            InstanceCommand::List => {
                board.refresh(orchestrator.api()).await;
                print_instances(&board.lists());
            }
            InstanceCommand::Launch {
                name,
                uid,
                size_in_billions,
                format,
                quantization,
                ui,
            } => {
                let mut request = LaunchRequest::new(name.clone());
                request.model_uid = uid;
                request.model_size_in_billions = size_in_billions;
                request.model_format = format;
                request.quantization = quantization;

                match orchestrator.launch(request, LaunchOptions { with_ui: ui }).await {
                    Ok(LaunchOutcome::Launched { model_uid, ui_url }) => {
                        println!("✓ Instance launched: '{model_uid}'");
                        if let Some(url) = ui_url {
                            println!("  UI: {url}");
                        }
                    }
                    Ok(LaunchOutcome::Busy) => {
                        eprintln!("✗ Another operation is in flight, try again");
                    }
                    Err(_) => {
                        fail(&state, &format!("Failed to launch '{name}'"));
                    }
                }
            }
            InstanceCommand::Terminate { model_uid } => {
                match orchestrator.terminate(&model_uid).await {
                    Ok(()) => println!("✓ Instance '{model_uid}' terminated"),
                    Err(_) => fail(&state, &format!("Failed to terminate '{model_uid}'")),
                }
            }
            InstanceCommand::Open { model_uid, name } => {
                let descriptor = LaunchRequest::new(name.unwrap_or_else(|| model_uid.clone()));
                match orchestrator.open_or_create_ui(&model_uid, &descriptor).await {
                    Ok(()) => println!("✓ UI opened for '{model_uid}'"),
                    Err(_) => fail(&state, &format!("Failed to open UI for '{model_uid}'")),
                }
            }
        },
        Command::Registration { subcommand } => match subcommand {
            RegistrationCommand::List {
                model_type,
                search,
                ability,
            } => {
                let detailed = !search.is_empty() || ability != filter::ALL;
                match registry::list_registrations(orchestrator.api(), model_type, detailed).await {
                    Ok(registrations) => {
                        let visible: Vec<_> = registrations
                            .into_iter()
                            .filter(|reg| filter::matches(reg, &search, &ability))
                            .collect();
                        print_registrations(&visible);
                    }
                    Err(e) => {
                        eprintln!("✗ Failed to list registrations: {e}");
                        std::process::exit(1);
                    }
                }
            }
            RegistrationCommand::Remove { model_type, name } => {
                match orchestrator.remove_registration(model_type, &name).await {
                    Ok(()) => println!("✓ Registration '{name}' removed"),
                    Err(_) => fail(&state, &format!("Failed to remove registration '{name}'")),
                }
            }
        },
    }

    Ok(())
}

fn fail(state: &ConsoleState, headline: &str) -> ! {
    match state.take_error() {
        Some(detail) => eprintln!("✗ {headline}: {detail}"),
        None => eprintln!("✗ {headline}"),
    }
    std::process::exit(1);
}
