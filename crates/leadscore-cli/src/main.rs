// Lead scoring CLI entry point

use leadscore_cli::{output, router::CommandRouter};

#[tokio::main]
async fn main() {
    // Pick up GEMINI_API_KEY and friends from a local .env
    dotenv::dotenv().ok();

    if let Err(e) = CommandRouter::route().await {
        output::print_error(&e.user_message());
        std::process::exit(1);
    }
}
