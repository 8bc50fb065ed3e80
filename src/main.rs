//! mobilog main entrypoint.

use mobilog::run;
use mobilog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
