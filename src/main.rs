use std::io::{self, Write};
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use recursion_explorer::{
    Canvas, Command, Explorer, ExplorerConfig, Session,
    publish, shared_frame, spawn_viewer
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ExplorerConfig::from_env();

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let session = match Session::load(&config.session_path) {
        Ok(s) => s,
        Err(e) => {
            info!(error = %e, "starting a fresh session");
            Session::new()
        }
    };

    let frame = shared_frame();
    if config.open_window {
        spawn_viewer(frame.clone(), config.window_width, config.window_height);
    }

    let countdown_secs = config.countdown_secs;
    let session_path = config.session_path.clone();
    let mut explorer = Explorer::new(config, session, rand::thread_rng());

    println!("\n╭──────────────────────────────────────────╮");
    println!("│           recursion explorer 🌀          │");
    println!("│                                          │");
    println!("│ factorial, power, primes, fibonacci,     │");
    println!("│ merge sort, permutations, tree fractals  │");
    println!("│                                          │");
    println!("│ /help for commands   /explain for how    │");
    println!("╰──────────────────────────────────────────╯\n");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() { continue; }

        let command = match Command::parse(input) {
            Ok(c) => c,
            Err(e) => {
                println!("{}\n", e);
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        if let Command::Guess(guess) = command {
            if let Err(e) = explorer.check_guess(guess) {
                println!("error: {}\n", e);
                continue;
            }
            if countdown_secs > 0 {
                countdown(countdown_secs).await?;
            }
        }

        match explorer.execute(command) {
            Ok(reply) => {
                println!("{}\n", reply.text);
                if let Some(plot) = &reply.plot {
                    let cfg = &explorer.config;
                    publish(&frame, Canvas::render(plot, cfg.window_width, cfg.window_height));
                }
            }
            Err(e) => println!("error: {}\n", e),
        }
    }

    if let Err(e) = explorer.session.save(&session_path) {
        warn!(error = %e, "could not save session");
    }
    Ok(())
}

async fn countdown(secs: u64) -> io::Result<()> {
    println!("⏳ Time to guess!");
    for left in (1..=secs).rev() {
        print!("\rTime left: {} seconds ", left);
        io::stdout().flush()?;
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    println!();
    Ok(())
}
