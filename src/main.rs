//! remind_me main entrypoint.

use remind_me::{run, ui::messages};

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
