//! rClocklog main entrypoint.

use rclocklog::run;
use rclocklog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
