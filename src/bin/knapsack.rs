use clap::Parser;
use spanning_sack::knapsack::{knapsack, write_best};

#[derive(Debug, Parser)]
#[command(about = "Print the best 0/1 knapsack value for a sample item set")]
struct Opt {
    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const VALUES: [i32; 8] = [60, 100, 120, 160, 50, 110, 150, 200];
const WEIGHTS: [usize; 8] = [10, 20, 30, 40, 10, 25, 35, 45];
const CAPACITY: usize = 120;

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();
    spanning_sack::init_logging(opt.verbose);

    let best = knapsack(CAPACITY, &WEIGHTS, &VALUES)?;
    write_best(&mut std::io::stdout().lock(), CAPACITY, best)?;
    Ok(())
}
