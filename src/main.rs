use clap::Parser;
use csv_relay::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Create cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        // Cancel all operations when Ctrl+C is received
        let signal_token = cancellation_token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                signal_token.cancel();
            }
        });

        commands::run(args, cancellation_token).await
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("CSV Relay - remote CSV file API as JSON");
    println!("=======================================");
    println!();
    println!("Fetches every file listed by a remote API, keeps the well-formed");
    println!("`filename,text,number,hex` rows and returns them as JSON.");
    println!();
    println!("USAGE:");
    println!("    csv-relay <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    serve       Run the HTTP service (GET /files/data, GET /files/list)");
    println!("    fetch       Fetch and parse all files once and print JSON");
    println!("    list        Print the upstream file list");
    println!("    parse       Parse local CSV files and print JSON");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("ENVIRONMENT:");
    println!("    EXTERNAL_API_URL, API_KEY, API_TIMEOUT, PORT, HOST");
    println!();
    println!("EXAMPLES:");
    println!("    # Serve on port 8080:");
    println!("    csv-relay serve --port 8080");
    println!();
    println!("    # Fetch a single file with a custom key:");
    println!("    csv-relay fetch --file-name file1.csv --api-key 'Bearer xyz' --pretty");
    println!();
    println!("    # Parse a local directory of CSV files:");
    println!("    csv-relay parse ./data --pretty");
    println!();
    println!("For detailed help on any command, use:");
    println!("    csv-relay <COMMAND> --help");
}
