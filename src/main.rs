use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_seats::{
    AppState,
    commands::Command,
    config::Config,
    selection::Toggle,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting seat selection ({})", config.app.environment);

    let page_path = config.page.seat_page_path.clone();
    let mut state = AppState::new(config).await?;
    info!(
        "Loaded {} seats from {}, ticket price {:.2}",
        state.page.seats.len(),
        page_path,
        state.tracker.unit_price()
    );
    println!("{}", state.summary());

    // Один обработчик событий: каждая команда выполняется до конца перед следующей
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        match command {
            Command::Seat(seat_id) => {
                match state.click_seat(seat_id) {
                    Toggle::Ignored => {
                        let label = state
                            .page
                            .seat(seat_id)
                            .map(|s| s.seat.label())
                            .unwrap_or_else(|| format!("#{}", seat_id));
                        println!("seat {} is not available", label);
                    }
                    _ => println!("{}", state.summary()),
                }
            }
            Command::Like(review_id) => {
                // Fire-and-forget: задача живёт сама по себе, handle не нужен
                state.click_like(review_id);
            }
            Command::Show => {
                println!("{}", state.summary());
                for (review_id, button) in &state.like_buttons {
                    let button = button.lock().await;
                    println!(
                        "review {}: {} likes{}",
                        review_id,
                        button.likes,
                        if button.liked { " (liked)" } else { "" }
                    );
                }
            }
            Command::Quit => break,
        }
    }

    info!("Seat selection finished with {} seats selected", state.tracker.count());
    Ok(())
}
