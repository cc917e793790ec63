use castpath_core::{ComponentBucket, GraphStats, Metric, RecordStore, WeightPolicy};
use serde::{Deserialize, Serialize};

use crate::search::{SearchResult, display_name};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub metric: Metric,
    pub policy: WeightPolicy,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_women: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonActor>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonActor {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<JsonMovie>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonMovie {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub women: u32,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub actors_explored: usize,
    pub graph: GraphStats,
}

#[derive(Serialize)]
pub struct JsonComponents {
    pub actors: usize,
    pub components: Vec<ComponentBucket>,
}

pub fn create_json_output(result: &SearchResult, store: &RecordStore) -> JsonOutput {
    let json_path = result.annotation.as_ref().map(|annotation| {
        result
            .path
            .actors
            .iter()
            .enumerate()
            .map(|(index, actor_id)| JsonActor {
                id: actor_id.to_string(),
                name: display_name(store, actor_id),
                via: index
                    .checked_sub(1)
                    .and_then(|hop_index| annotation.hops.get(hop_index))
                    .map(|hop| JsonMovie {
                        id: hop.movie.to_string(),
                        name: hop.movie_name.clone(),
                        rating: hop.rating,
                        women: hop.female_count,
                    }),
            })
            .collect()
    });

    let total_women = match (result.request.metric, &result.annotation) {
        (Metric::GenderRatio, Some(annotation)) => Some(annotation.total_female),
        _ => None,
    };

    JsonOutput {
        query: JsonQuery {
            from: result.request.from_name.clone(),
            to: result.request.to_name.clone(),
            options: JsonOptions {
                metric: result.request.metric,
                policy: result.request.policy,
            },
        },
        result: JsonResult {
            found: result.path.is_found(),
            cost: result.path.cost,
            total_women,
            path: json_path,
        },
        stats: JsonStats {
            search_time_ms: result.path.stats.duration_ms,
            actors_explored: result.path.stats.actors_visited,
            graph: result.graph_stats,
        },
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
