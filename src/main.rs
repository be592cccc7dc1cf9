use anyhow::Result;
use clap::Parser;

mod config;
mod data;
mod error;
mod graph;
mod cluster;
mod storage;
mod viz;

use error::AnalysisError;

#[derive(Parser, Debug)]
#[clap(
    name = "object-community-analyzer",
    about = "Derives strong object-type communities from an object-centric event log"
)]
struct Cli {
    /// Path to input OCEL 2.0 JSON file
    #[clap(long)]
    input: String,

    /// Output directory for results
    #[clap(long, default_value = "community_results")]
    output_dir: String,

    /// Combination weight for the structural metric (0.0-1.0)
    #[clap(long, default_value = "0.5")]
    alpha: f64,

    /// Lower bound of the threshold sweep
    #[clap(long, default_value = "0.01")]
    min_threshold: f64,

    /// Upper bound of the threshold sweep
    #[clap(long, default_value = "0.99")]
    max_threshold: f64,

    /// Step between consecutive sweep thresholds
    #[clap(long, default_value = "0.01")]
    step: f64,

    /// Skip visualizations
    #[clap(long)]
    skip_viz: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Validate analysis parameters before touching the log
    let config = config::Config::new(args.alpha, args.min_threshold, args.max_threshold, args.step);
    config.validate()?;

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!("Starting object community analysis");
    log::info!("Input: {}", args.input);
    log::info!("Output: {}", args.output_dir);

    // Create output directory
    std::fs::create_dir_all(&args.output_dir)?;

    // 1. Load the event log
    let ocel = data::ocel::load_ocel(&args.input)?;

    // 2. Enumerate object type pairs and aggregate their raw relations
    let types = ocel.object_types();
    log::info!("Found {} distinct object types", types.len());

    let pairs = data::pairs::object_type_pairs(&types);
    let metrics = data::relations::compute_pair_metrics(&ocel, &pairs);

    // 3. Build the combined weighted graph
    let type_graph = graph::build_weighted_graph(
        &pairs,
        &metrics.structural,
        &metrics.coparticipation,
        config.alpha,
    );

    log::info!(
        "Built weighted graph with {} nodes and {} edges",
        type_graph.node_count(),
        type_graph.edge_count()
    );

    // The edge table is useful even when no partition qualifies
    storage::save_edge_table(&type_graph, &args.output_dir)?;

    // 4. Sweep thresholds for the most cohesive partition
    let best = match cluster::optimizer::find_best_threshold(&type_graph, &config) {
        Ok(result) => result,
        Err(AnalysisError::NoQualifyingThreshold) => {
            log::warn!(
                "No qualifying threshold found; only the edge table was written to {}",
                args.output_dir
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    log::info!(
        "Best threshold {:.2} with average conductance {:.4} ({} communities)",
        best.threshold,
        best.average_conductance,
        best.communities.len()
    );

    // 5. Save results
    storage::save_results(&type_graph, &best, &args.output_dir)?;

    // 6. Generate visualizations if requested
    if !args.skip_viz {
        viz::generate_visualizations(&type_graph, &best, &args.output_dir)?;
    }

    log::info!("Analysis complete. Results saved to {}", args.output_dir);

    Ok(())
}
