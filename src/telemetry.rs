use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

pub fn setup_tracing<Sink>(name: &str, level: &str, sink: Sink)
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "axum_webserver={},axum::rejection=trace,tower-http={}",
            level, level
        ))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name.into(), sink))
        .try_init()
        .expect("Failed to set subscriber.");
}

/// Opens the request-log file in append mode, creating it if absent.
///
/// An open failure is reported on stdout and logging proceeds into a
/// discarding sink; the server keeps running either way. The `Mutex`
/// serializes record writes from concurrent request tasks.
pub fn log_file_writer(
    path: impl AsRef<Path>,
) -> Mutex<Box<dyn Write + Send>> {
    let writer: Box<dyn Write + Send> = match OpenOptions::new()
        .append(true)
        .create(true)
        .open(path.as_ref())
    {
        Ok(file) => Box::new(file),
        Err(e) => {
            println!("error opening file: {}", e);
            Box::new(std::io::sink())
        }
    };
    Mutex::new(writer)
}
