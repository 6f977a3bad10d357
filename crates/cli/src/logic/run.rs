use crate::prelude::*;

async fn run_pipeline(cli_args: CliArgs) -> Result<(), CliError> {
    let config = GenesisConfig::try_from(cli_args)?;
    build_genesis(&config).await.map_err(CliError::CoreError)
}

pub async fn run(cli_args: CliArgs) {
    match run_pipeline(cli_args).await {
        Ok(_) => info!("{} ran successfully", BINARY_NAME),
        Err(e) => {
            error!("Error running {}: {}", BINARY_NAME, e);
            std::process::exit(1);
        }
    }
}
