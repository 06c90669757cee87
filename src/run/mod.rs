//! Command handlers.

mod populate;
mod verify;

pub use populate::run_populate;
pub use verify::run_verify;

const RULE_WIDTH: usize = 60;

fn print_banner(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}
