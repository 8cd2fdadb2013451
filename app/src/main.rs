mod shell;

use anyhow::{Context, Result};
use rag_client::{
    ClientConfig, ClientError, Controller, RagApiService, RequestKind, SelectedFile, Submission,
};
use shell::{Command, HELP};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = ClientConfig::from_env().context("Failed to load client configuration")?;
    log::info!("Using RAG endpoints under {}", config.base_url());

    let controller = Controller::new(RagApiService::new(config));
    spawn_renderer(&controller);

    println!("{}", controller.render().await);
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Show => println!("{}", controller.render().await),
            Command::SelectFile(path) => match SelectedFile::from_path(&path).await {
                Ok(file) => controller.select_file(file).await,
                Err(e) => println!("Could not read {}: {}", path.display(), e),
            },
            Command::SetQuestion(question) => controller.edit_question(question).await,
            Command::Upload => spawn_request(&controller, RequestKind::Upload),
            Command::Ask(question) => {
                if let Some(question) = question {
                    controller.edit_question(question).await;
                }
                spawn_request(&controller, RequestKind::Ask);
            }
        }
    }

    log::info!("Input closed, exiting");
    Ok(())
}

/// Redraws the screen on every state change and shows pending notices.
fn spawn_renderer(controller: &Controller) {
    let controller = controller.clone();
    let mut changes = controller.subscribe();

    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            println!("{}", controller.render().await);
            if let Some(notice) = controller.dismiss_notice().await {
                println!(">> {}", notice);
            }
        }
    });
}

/// Runs a request in the background so input stays live while it is pending.
fn spawn_request(controller: &Controller, kind: RequestKind) {
    let controller = controller.clone();

    tokio::spawn(async move {
        let result = match kind {
            RequestKind::Upload => controller.upload().await,
            RequestKind::Ask => controller.ask().await,
        };

        match result {
            Ok(Submission::Completed) => {}
            Ok(Submission::Skipped) => match kind {
                RequestKind::Upload => println!("Select a file first: file <path>"),
                RequestKind::Ask => println!("Type a question first: question <text>"),
            },
            Err(e @ ClientError::Busy(_)) => println!("{}", e),
            Err(e) => {
                log::error!("{} request failed: {}", kind, e);
                println!("Request failed: {}", e);
            }
        }
    });
}
