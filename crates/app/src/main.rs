use std::io::{self, BufRead};

use katalog_app::{App, AppConfig, ConsoleSurface, Control};

fn print_help() {
    println!("controls:");
    for (control, _, _) in Control::ALL {
        println!("  {:<18} {}", control.id(), control.label());
    }
    println!("  {:<18} show this list", "help");
    println!("  {:<18} leave the demo", "quit");
}

fn main() -> anyhow::Result<()> {
    katalog_observability::init();

    let config = AppConfig::from_env();
    tracing::info!(?config, "starting catalog demo");

    let mut app = App::with_demo_catalog(config, ConsoleSurface::new());
    app.initialize();
    print_help();

    // Single-threaded event loop: one control, one handler, run to completion.
    for line in io::stdin().lock().lines() {
        let line = line?;
        let id = line.trim();
        match id {
            "" => continue,
            "quit" | "exit" => break,
            "help" => print_help(),
            _ => match Control::parse(id) {
                Some(control) => app.dispatch(control),
                None => println!("unknown control '{id}' (try `help`)"),
            },
        }
    }

    Ok(())
}
