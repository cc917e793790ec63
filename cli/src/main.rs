use anyhow::{Context, Result};
use castpath::colors::ColorScheme;
use castpath::display::{
    display_build_statistics, display_search_info, display_search_results, format_components,
    format_graph_stats,
};
use castpath::json_output::{JsonComponents, create_json_output, print_json};
use castpath::report::{build_report, parse_pairs};
use castpath::search::{create_search_request, execute_pathfinding_search};
use castpath::{Args, CastPathApp, Command};
use castpath_core::{
    Metric, PathfindingConfig, RecordStore, WeightPolicy, build_graph, component_sizes,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(args, &colors) {
        eprintln!("{} {:#}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args, colors: &ColorScheme) -> Result<()> {
    let app = CastPathApp::new(&args)?;
    let store = app.load_records()?;

    match &args.command {
        Command::Stats => run_stats(&store, &args, colors),
        Command::Path {
            from,
            to,
            metric,
            policy,
            timeout_ms,
            quiet,
        } => {
            let request = create_search_request(
                from,
                to,
                Metric::from(metric.as_str()),
                WeightPolicy::from(policy.as_str()),
                *timeout_ms,
                &store,
            )?;
            if !args.json {
                display_search_info(&request, colors);
            }

            let result = execute_pathfinding_search(request, &store)?;
            if args.json {
                print_json(&create_json_output(&result, &store));
            } else {
                if args.verbose {
                    display_build_statistics(&result.graph_stats, colors);
                }
                display_search_results(&result, &store, args.verbose, *quiet, colors);
            }
            Ok(())
        }
        Command::Components => run_components(&store, &args, colors),
        Command::Report { pairs, output } => {
            let pairs_text = std::fs::read_to_string(pairs)
                .with_context(|| format!("cannot read {}", pairs.display()))?;
            let queries = parse_pairs(&pairs_text, &store)?;

            let report = build_report(
                &store,
                &queries,
                &PathfindingConfig::default(),
                &ColorScheme::plain(),
            )?;
            std::fs::write(output, report)
                .with_context(|| format!("cannot write {}", output.display()))?;

            println!(
                "{} Wrote {} pair reports to {}",
                colors.success("✅"),
                queries.len(),
                output.display()
            );
            Ok(())
        }
    }
}

fn run_stats(store: &RecordStore, args: &Args, colors: &ColorScheme) -> Result<()> {
    let graph = build_graph(store, Metric::Unweighted);
    if args.json {
        print_json(&graph.stats());
    } else {
        print!("{}", format_graph_stats(&graph.stats(), colors));
        if args.verbose {
            display_build_statistics(&graph.stats(), colors);
        }
    }
    Ok(())
}

fn run_components(store: &RecordStore, args: &Args, colors: &ColorScheme) -> Result<()> {
    let graph = build_graph(store, Metric::Unweighted);
    let histogram = component_sizes(&graph);
    if args.json {
        print_json(&JsonComponents {
            actors: histogram.total_actors(),
            components: histogram.buckets(),
        });
    } else {
        print!("{}", format_components(&histogram, colors));
    }
    Ok(())
}
