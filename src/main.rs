use armp_notices::{cli, errors};
use errors::AppResult;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> AppResult<()> {
    init_tracing();

    let rt =
        tokio::runtime::Runtime::new().map_err(|e| errors::AppError::IoError(e.to_string()))?;
    rt.block_on(cli::cli())
}
