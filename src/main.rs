// src/main.rs
use env_logger::Builder;
use log::{debug, error, info, LevelFilter};
use std::io::{self, Write};

use stock_consultant::api::AdviceClient;
use stock_consultant::controller::{Consultant, SubmitRejection, EMPTY_PORTFOLIO_PROMPT};
use stock_consultant::ui;

const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

#[tokio::main]
async fn main() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    info!("Starting the stock consultant...");
    let style = ui::detect_style();
    let mut consultant = Consultant::new(AdviceClient::new(DEFAULT_SERVICE_URL));

    println!("{}", ui::banner(&style));

    loop {
        print!("{}", ui::input_prompt());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
        // Only the line terminator is an artifact of line entry; everything
        // else, leading and trailing whitespace included, is submitted as-is.
        let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
        if line == "quit" || line == "exit" {
            break;
        }

        consultant.set_portfolio(line);
        if !line.trim().is_empty() {
            println!("{}", ui::analyzing());
        }

        match consultant.submit().await {
            Ok(()) => {
                if let Some(advice) = consultant.state().advice() {
                    println!("{}", ui::render_advice(&style, advice));
                }
                println!(
                    "\n{}",
                    ui::usage_line(consultant.state().usage_counter())
                );
            }
            Err(SubmitRejection::EmptyPortfolio) => {
                println!("{}", ui::warn(&style, EMPTY_PORTFOLIO_PROMPT));
            }
            Err(SubmitRejection::RequestInFlight) => {
                debug!("submission ignored: request already in flight");
            }
        }
    }

    info!(
        "Session ended after {} completed analyses.",
        consultant.state().usage_counter()
    );
}
