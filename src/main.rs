//! sparktracker main entrypoint.

use sparktracker::run;
use sparktracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
