use clap::Parser;
use spanning_sack::graph::{mst::write_mst, Graph};

#[derive(Debug, Parser)]
#[command(about = "Print the minimum spanning tree of a sample graph")]
struct Opt {
    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();
    spanning_sack::init_logging(opt.verbose);

    let mut graph = Graph::from_edges(
        5,
        [
            (0, 1, 4),
            (0, 2, 3),
            (1, 2, 1),
            (1, 3, 2),
            (2, 3, 4),
            (3, 4, 2),
            (4, 0, 4),
        ],
    )?;
    let mst = graph.kruskal_mst();

    write_mst(&mut std::io::stdout().lock(), &mst)?;
    Ok(())
}
