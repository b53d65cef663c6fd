// Módulos de la aplicación
mod config;
mod ingest;
mod models;
mod report;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Inicializar logging (a stderr: stdout es el informe)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // 2. Cargar configuración
    let cfg = config::AppConfig::load()?;
    info!("Escaneando fichas en {}", cfg.scan_dir.display());

    // 3. Extraer cabeceras e imprimir el informe
    let outcome = ingest::scan_directory(&cfg.scan_dir)?;
    report::print_report(outcome.records)?;

    Ok(())
}
