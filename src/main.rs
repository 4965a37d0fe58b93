use anyhow::Context;
use axum_webserver::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{log_file_writer, setup_tracing},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration()
        .context("Could not read configuration file")?;
    let sink = log_file_writer(&configuration.application.log_file);
    setup_tracing("axum_webserver", "info", sink);

    let app = match Application::build(configuration).await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(event = "start server", error = %e);
            return Err(e).context("Failed to start the listener");
        }
    };
    app.run_until_stopped().await?;
    Ok(())
}
