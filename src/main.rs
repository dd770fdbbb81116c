//! travelsum main entrypoint.

use travelsum::errors::AppError;
use travelsum::run;
use travelsum::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        match e {
            AppError::MissingInput => {
                error(&e);
                std::process::exit(255);
            }
            _ => {
                error(format!("Error: {}", e));
                std::process::exit(1);
            }
        }
    }
}
