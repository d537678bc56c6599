/// Graphs and their [Minimum Spanning Trees (MST)](https://en.wikipedia.org/wiki/Minimum_spanning_tree)
pub mod graph;
/// Solve the [0/1 knapsack problem](https://en.wikipedia.org/wiki/Knapsack_problem)
pub mod knapsack;

use tracing_subscriber::EnvFilter;

/// Send logs to stderr so stdout only carries results.
///
/// `RUST_LOG` takes precedence over `verbosity`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Dependencies stay at `warn`, this crate follows `verbosity`.
fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,spanning_sack={}", level)
}
