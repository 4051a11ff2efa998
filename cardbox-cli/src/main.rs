use std::io::{self, BufRead, Write};

use clap::Parser;

use cardbox_cli::cli::Cli;
use cardbox_cli::display::supports_color;
use cardbox_cli::error::Result;
use cardbox_cli::interpreter::App;
use cardbox_cli::{demo, usage};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let use_color = !cli.no_color && supports_color();

    let mut app = App::new(use_color);
    if cli.demo {
        demo::seed(app.store_mut());
    }

    println!("{}", usage::render_command_table());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", app.prompt());
        io::stdout().flush()?;

        // EOF ends the session; there is no quit command
        let Some(line) = lines.next() else { break };
        let output = app.handle_line(line?.trim());
        if !output.is_empty() {
            println!("{output}");
        }
    }

    Ok(())
}
