//! One-line progress messages shared by the generator and `dto-make`.

use std::path::Path;
use std::time::Duration;

use log::{info, warn};

/// `"<operation> <path>"` at info level
pub fn log_operation_start(operation: &str, path: &Path) {
    info!("{operation} {}", path.display());
}

/// Summary of a finished batch of `items` files written below `path`
///
/// `operation` is a past-tense verb such as `"created"`.
pub fn log_operation_complete(operation: &str, path: &Path, items: usize, elapsed: Option<Duration>) {
    let dir = path.display();
    match elapsed {
        Some(took) => info!("Successfully {operation} {items} file(s) in {dir} in {took:?}"),
        None => info!("Successfully {operation} {items} file(s) in {dir}"),
    }
}

pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => warn!("{message}: {}", path.display()),
        None => warn!("{message}"),
    }
}
