use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = aseko::cli::Cli::parse();
    let exit_code = aseko::run(cli).await;
    std::process::exit(exit_code);
}
