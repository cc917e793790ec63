use anyhow::{Context, Result, bail};
use castpath_core::{
    GraphBuilder, Metric, PathAnnotator, PathQuery, PathfindingConfig, RecordStore, WeightPolicy,
    WeightTable, component_sizes, find_paths_parallel,
};
use std::fmt::Write;

use crate::colors::ColorScheme;
use crate::display::{format_annotated_path, format_components, format_graph_stats};
use crate::search::{display_name, find_best_actor_match};

const SECTIONS: [(Metric, &str); 3] = [
    (Metric::Unweighted, "Shortest paths"),
    (Metric::Rating, "Chillest paths"),
    (Metric::GenderRatio, "Least sexistic paths"),
];

/// One `from \t to` pair per line; each side is an actor id or name.
pub fn parse_pairs(text: &str, store: &RecordStore) -> Result<Vec<PathQuery>> {
    let name_lookup = store.name_lookup();
    let mut queries = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() != 2 {
            bail!(
                "line {}: expected two tab-separated actors, found {} columns",
                line_index + 1,
                fields.len()
            );
        }

        let source = find_best_actor_match(fields[0], store, &name_lookup)
            .with_context(|| format!("line {}", line_index + 1))?;
        let target = find_best_actor_match(fields[1], store, &name_lookup)
            .with_context(|| format!("line {}", line_index + 1))?;
        queries.push(PathQuery { source, target });
    }

    Ok(queries)
}

/// Builds the graph once, runs every metric over all pairs and renders the
/// statistics, paths and component histogram as text.
pub fn build_report(
    store: &RecordStore,
    queries: &[PathQuery],
    config: &PathfindingConfig,
    colors: &ColorScheme,
) -> Result<String> {
    let graph = GraphBuilder::new(store).metric(Metric::Rating).build();
    if !store.has_gender_data() {
        tracing::warn!("no female cast counts loaded; the gender ratio section ranks by hop count");
    }
    let gender_weights = WeightTable::derive(store, Metric::GenderRatio, WeightPolicy::KeepLast);
    let annotator = PathAnnotator::new(store);

    let mut report = String::new();
    writeln!(report, "{}\n", colors.heading("Graph statistics"))?;
    writeln!(report, "{}", format_graph_stats(&graph.stats(), colors))?;

    for (metric, title) in SECTIONS {
        let weights = match metric {
            Metric::Unweighted => None,
            Metric::Rating => Some(graph.weights()),
            Metric::GenderRatio => Some(&gender_weights),
        };
        let results = find_paths_parallel(&graph, weights, queries, config);

        writeln!(report, "{}\n", colors.heading(title))?;
        for (query, result) in queries.iter().zip(results) {
            let path = result?;
            if path.is_found() {
                let annotation = annotator.for_metric(metric, &path.actors)?;
                report.push_str(&format_annotated_path(&path, &annotation, metric, store, colors));
            } else {
                writeln!(
                    report,
                    "No path between {} and {}",
                    colors.actor_name(&display_name(store, &query.source)),
                    colors.actor_name(&display_name(store, &query.target))
                )?;
            }
            report.push('\n');
        }
    }

    writeln!(report, "{}\n", colors.heading("Components"))?;
    report.push_str(&format_components(&component_sizes(&graph), colors));

    Ok(report)
}
