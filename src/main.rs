//! Terminal navigation shell for the tutorial app.
//!
//! Plays the rendering-surface role: feeds paths and route names to the
//! navigator and prints whichever view comes back active.
//!
//! Commands:
//! - `/some-path`  navigate by path
//! - `:RouteName`  navigate by logical name
//! - `back`, `forward`  walk history
//! - `routes`  list the route table
//! - `quit`  exit

use std::io::{self, BufRead, Write};

use clap::Parser;

use view_router::observability::logging::init_logging;
use view_router::{ActiveView, Fallback, NavigationError, Navigator};

#[derive(Parser, Debug)]
#[command(name = "view-router", about = "Tutorial app navigation shell")]
struct Args {
    /// Path to open on startup.
    #[arg(long, default_value = "/")]
    start: String,

    /// Route name to fall back to on unmatched paths (e.g. "Home").
    /// Without it, unmatched paths report an error.
    #[arg(long)]
    fallback: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("view_router=info");

    let args = Args::parse();

    let mut navigator = view_router::tutorial::navigator()?;
    if let Some(name) = args.fallback {
        navigator = navigator.with_fallback(Fallback::Route(name));
    }

    tracing::info!(
        routes = navigator.routes().len(),
        start = %args.start,
        "navigation shell starting"
    );

    match navigator.open(&args.start) {
        Ok(active) => show(&active),
        Err(err) => eprintln!("error: {err}"),
    }

    let stdin = io::stdin();
    loop {
        print!("{}> ", navigator.current_path());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        let outcome = match input {
            "" => continue,
            "quit" | "exit" => break,
            "routes" => {
                for route in navigator.routes() {
                    println!("  {:<28} {}", route.path, route.name);
                }
                continue;
            }
            "back" => navigator.back(),
            "forward" => navigator.forward(),
            name if name.starts_with(':') => navigator.open_named(&name[1..]).map(Some),
            path if path.starts_with('/') => navigator.open(path).map(Some),
            other => {
                println!("unknown command {other:?} (try /path, :Name, back, forward, routes, quit)");
                continue;
            }
        };

        match outcome {
            Ok(Some(active)) => show(&active),
            Ok(None) => println!("(end of history)"),
            Err(NavigationError::Router(inner)) if inner.is_recoverable() => {
                println!("{inner}");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn show(active: &ActiveView) {
    println!("{}", active.view.render());
}
