//! `podium` - Admin console display toolkit
//!
//! Display-only companion for hackathon platform consoles: status label
//! tables, markup stripping, and deployment template inspection. No network
//! calls, no database, no background processes.

use podium::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
