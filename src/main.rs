//! sitejobs main entrypoint.

use sitejobs::run;
use sitejobs::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
