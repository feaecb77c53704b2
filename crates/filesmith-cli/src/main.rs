// Filesmith CLI Entry Point

use filesmith_cli::{output, router::CommandRouter, VerbosityLevel};

#[tokio::main]
async fn main() {
    // Ctrl-C exits the blocking prompt loop immediately
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\nExiting...");
            std::process::exit(130);
        }
    });

    if let Err(e) = CommandRouter::route().await {
        // A closed input stream is a normal way to leave the menu
        if e.is_eof() {
            println!("\nExiting...");
            return;
        }

        output::print_error(&e.user_message());
        if VerbosityLevel::Verbose.should_output() {
            eprintln!("{}", e.technical_details());
        }
        std::process::exit(1);
    }
}
