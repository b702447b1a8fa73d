use std::io::IsTerminal;

use clap::Parser;

use herr::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Some(code) = &cli.explain {
        match cli::explain(code) {
            Some(text) => {
                print!("{text}");
                return;
            }
            None => {
                eprintln!("unknown error code: {code}");
                std::process::exit(1);
            }
        }
    }

    if cli.list_errors {
        print!("{}", cli::list_errors());
        return;
    }

    match cli.generate() {
        Ok(report) => {
            let written: Vec<String> = report.written.iter().map(ToString::to_string).collect();
            log::info!("generated {} error types into {}", report.definitions, written.join(", "));
        }
        Err(e) => {
            let use_color = std::io::stderr().is_terminal();
            eprint!("{}", cli.render_error(&e, use_color));
            std::process::exit(1);
        }
    }
}
