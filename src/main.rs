use std::io;
use std::process;
use clap::Parser;
use mst::{Algorithm, Graph, Mst, MstParams, Timer};

#[derive(Parser, Debug)]
#[clap(disable_help_flag = true)]
struct Args {
    /// the input graph's filename, or - to read standard input
    #[clap(value_parser, default_value = "-")]
    input: String,

    /// the algorithm to use: 0 for Boruvka, 1 for Prim
    #[clap(value_parser = clap::value_parser!(u8).range(0..=1), default_value_t = 1)]
    algorithm: u8,
}

fn main() {
    let args = Args::parse();

    let graph = if args.input == "-" {
        Graph::<i64>::read_from(io::stdin().lock())
    } else {
        Graph::<i64>::from_file(&args.input)
    };
    let graph = graph.unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(1);
    });

    // The range parser only lets 0 and 1 through
    let algorithm = Algorithm::from_choice(args.algorithm).unwrap_or(Algorithm::Prim);
    let params = MstParams::builder().algorithm(algorithm).build();

    let mut timer = Timer::new();
    let result = Mst::new(&graph, params).run();
    timer.end();

    match result {
        Ok(tree) => {
            println!("{}\n{}", tree.algorithm, tree.total_weight);
            println!("{timer}");
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
