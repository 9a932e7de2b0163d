//! Log output for the terminal UI.
//!
//! The alternate screen owns stdout and stderr while the game runs, so log
//! records go to ~/.dino-runner/dino-runner.log instead. The filter comes
//! from `RUST_LOG` and defaults to `info`.

use crate::core::constants::LOG_FILE_NAME;
use crate::utils::persistence::app_path;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io::{self, Write};

/// Install the file logger. Call once, before the terminal is taken over.
pub fn init_logging() -> io::Result<()> {
    let path = app_path(LOG_FILE_NAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    log::info!("Logging to {}", path.display());
    Ok(())
}
