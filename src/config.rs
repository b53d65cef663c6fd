//! Carga de configuración de la aplicación.

use std::{env, path::PathBuf};

use anyhow::{anyhow, Result};

/// Configuración completa de la aplicación.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directorio con las fichas `.md`: siempre el del propio ejecutable.
    pub scan_dir: PathBuf,
}

impl AppConfig {
    /// Resuelve la configuración. No lee variables de entorno ni ficheros.
    pub fn load() -> Result<Self> {
        Ok(Self {
            scan_dir: executable_dir()?,
        })
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("El ejecutable no tiene directorio padre: {}", exe.display()))
}
