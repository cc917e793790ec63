use castpath_core::{
    ComponentSizeHistogram, GraphStats, Metric, PathAnnotation, PathResult, RecordStore,
};

use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult, display_name};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🎬 Finding path from {} to {}",
        colors.actor_name(&format!("\"{}\"", request.from_name)),
        colors.actor_name(&format!("\"{}\"", request.to_name))
    );

    match request.metric {
        Metric::Unweighted => println!("⚙️  Using shortest hop pathfinding (BFS)"),
        Metric::Rating => println!("⚙️  Using chillest pathfinding (Dijkstra, 10 - rating)"),
        Metric::GenderRatio => {
            println!("⚙️  Using least sexistic pathfinding (Dijkstra, 1 - female ratio)")
        }
    }

    if request.metric.is_weighted() {
        println!(
            "🔁 Repeated collaborations: {}",
            colors.number(request.policy.as_str())
        );
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(
    result: &SearchResult,
    store: &RecordStore,
    verbose: bool,
    quiet: bool,
    colors: &ColorScheme,
) {
    if verbose {
        println!("\n---\n");
    }

    match &result.annotation {
        Some(annotation) if result.path.is_found() => {
            if verbose {
                println!(
                    "{} Found path with {} steps:\n",
                    colors.success("✅"),
                    colors.number(&result.path.hops().to_string())
                );
            }

            println!("{}", format_path_flow(&result.path, store, colors));
            if !quiet {
                println!();
                print!(
                    "{}",
                    format_annotated_path(
                        &result.path,
                        annotation,
                        result.request.metric,
                        store,
                        colors
                    )
                );
            }
        }
        _ => println!(
            "{} {} and {}",
            colors.error("❌ No path found between"),
            colors.actor_name(&format!("\"{}\"", result.request.from_name)),
            colors.actor_name(&format!("\"{}\"", result.request.to_name))
        ),
    }

    if verbose {
        display_search_statistics(
            result.path.stats.actors_visited,
            result.path.stats.duration_ms,
            colors,
        );
    }
}

/// `"A" → "B" → "C"`
pub fn format_path_flow(path: &PathResult, store: &RecordStore, colors: &ColorScheme) -> String {
    path.actors
        .iter()
        .map(|actor_id| {
            colors
                .actor_name(&format!("\"{}\"", display_name(store, actor_id)))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

/// One line per actor with the connecting film between them, then the
/// metric's total.
pub fn format_annotated_path(
    path: &PathResult,
    annotation: &PathAnnotation,
    metric: Metric,
    store: &RecordStore,
    colors: &ColorScheme,
) -> String {
    let Some(first) = path.actors.first() else {
        return String::new();
    };

    let mut lines = vec![colors.actor_name(&display_name(store, first)).to_string()];

    for hop in &annotation.hops {
        let detail = match metric {
            Metric::GenderRatio => format!("women: {}", hop.female_count),
            Metric::Unweighted | Metric::Rating => format!("{:.1}", hop.rating),
        };
        lines.push(format!(
            "{} {} {} {} {}",
            colors.connector("===["),
            colors.movie_title(&hop.movie_name),
            detail,
            colors.connector("] ===>"),
            colors.actor_name(&display_name(store, &hop.to))
        ));
    }

    match (metric, path.cost) {
        (Metric::Rating, Some(cost)) => {
            lines.push(format!("Total weight: {}", colors.number(&format!("{cost:.1}"))));
        }
        (Metric::GenderRatio, _) => {
            lines.push(format!(
                "Total women: {}",
                colors.number(&annotation.total_female.to_string())
            ));
        }
        _ => {}
    }

    let mut formatted = lines.join("\n");
    formatted.push('\n');
    formatted
}

pub fn format_graph_stats(stats: &GraphStats, colors: &ColorScheme) -> String {
    format!(
        "Nodes: {}\nEdges: {}\n",
        colors.number(&stats.vertices.to_string()),
        colors.number(&stats.edges.to_string())
    )
}

pub fn format_components(histogram: &ComponentSizeHistogram, colors: &ColorScheme) -> String {
    histogram
        .iter()
        .map(|(size, count)| {
            format!(
                "There are {} components of size {}\n",
                colors.number(&count.to_string()),
                colors.number(&size.to_string())
            )
        })
        .collect()
}

pub fn display_build_statistics(stats: &GraphStats, colors: &ColorScheme) {
    println!(
        "{} Built graph of {} actors in {} ms ({} untracked credits skipped)",
        colors.stats("📊"),
        colors.number(&format_number(stats.vertices)),
        colors.number(&stats.build_ms.to_string()),
        colors.number(&format_number(stats.skipped_references))
    );
}

fn display_search_statistics(actors_visited: usize, duration_ms: u64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} actors in {} ms",
        colors.stats("📊"),
        colors.number(&format_number(actors_visited)),
        colors.number(&duration_ms.to_string())
    );
}
