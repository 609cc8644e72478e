//! Hexmarch command-line runner
//!
//! Loads a JSON scenario and runs a path or reachability query against it,
//! printing the result as JSON on stdout. Logs go to stderr and are filtered
//! through `RUST_LOG` (default `hexmarch=info`).

use clap::{Parser, Subcommand};
use hexmarch_core::{Cost, HexCoord, Planner, PlannerSettings, Result, Scenario};
use serde::Serialize;
use std::path::PathBuf;

/// Hexmarch - hex-grid movement planning
#[derive(Parser, Debug)]
#[command(name = "hexmarch")]
#[command(about = "Run movement queries against a hex-grid scenario")]
struct Args {
    /// Planner settings file (JSON); defaults apply when omitted
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cheapest path between two tiles
    Path {
        /// Scenario file (JSON)
        #[arg(long)]
        scenario: PathBuf,

        /// Start tile as `x,y`
        #[arg(long, value_parser = parse_coord)]
        start: HexCoord,

        /// Goal tile as `x,y`
        #[arg(long, value_parser = parse_coord)]
        goal: HexCoord,

        /// Abandon routes costing more than this
        #[arg(long)]
        max_cost: Option<Cost>,
    },
    /// Every tile reachable within a movement budget
    Reach {
        /// Scenario file (JSON)
        #[arg(long)]
        scenario: PathBuf,

        /// Start tile as `x,y`
        #[arg(long, value_parser = parse_coord)]
        start: HexCoord,

        /// Movement budget; the settings' default budget when omitted
        #[arg(long)]
        budget: Option<Cost>,
    },
}

/// JSON output for `path`
#[derive(Serialize)]
struct PathOutput {
    start: HexCoord,
    goal: HexCoord,
    found: bool,
    total_cost: Option<Cost>,
    path: Vec<HexCoord>,
}

/// JSON output for `reach`
#[derive(Serialize)]
struct ReachOutput {
    start: HexCoord,
    budget: Cost,
    tiles: Vec<ReachTile>,
}

#[derive(Serialize)]
struct ReachTile {
    x: i32,
    y: i32,
    cost: Cost,
}

fn parse_coord(s: &str) -> std::result::Result<HexCoord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
    let x = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x in `{}`: {}", s, e))?;
    let y = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y in `{}`: {}", s, e))?;
    Ok(HexCoord::new(x, y))
}

fn load_planner(settings: Option<&PathBuf>) -> Result<Planner> {
    let settings = match settings {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading settings");
            PlannerSettings::load(path)?
        }
        None => PlannerSettings::default(),
    };
    Planner::new(settings)
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hexmarch=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let planner = load_planner(args.settings.as_ref())?;

    let json = match args.command {
        Command::Path {
            scenario,
            start,
            goal,
            max_cost,
        } => {
            let snapshot = Scenario::load(&scenario)?
                .into_snapshot(planner.settings().terrain_id_policy)?;
            tracing::info!(scenario = %scenario.display(), %start, %goal, "Finding path");

            let result = planner.find_path(&snapshot, start, goal, max_cost);
            if result.is_none() {
                tracing::info!("No path found");
            }
            let output = PathOutput {
                start,
                goal,
                found: result.is_some(),
                total_cost: result.as_ref().map(|r| r.total_cost),
                path: result.map(|r| r.path).unwrap_or_default(),
            };
            serde_json::to_string_pretty(&output)?
        }
        Command::Reach {
            scenario,
            start,
            budget,
        } => {
            let snapshot = Scenario::load(&scenario)?
                .into_snapshot(planner.settings().terrain_id_policy)?;
            let budget = budget.unwrap_or(planner.settings().default_budget);
            tracing::info!(scenario = %scenario.display(), %start, budget, "Finding reachable tiles");

            let reachable = planner.find_reachable(&snapshot, start, Some(budget))?;
            tracing::info!(tiles = reachable.len(), "Reachability complete");
            let output = ReachOutput {
                start,
                budget,
                tiles: reachable
                    .iter()
                    .map(|(coord, cost)| ReachTile {
                        x: coord.x,
                        y: coord.y,
                        cost,
                    })
                    .collect(),
            };
            serde_json::to_string_pretty(&output)?
        }
    };

    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("3,4"), Ok(HexCoord::new(3, 4)));
        assert_eq!(parse_coord(" 0 , -2 "), Ok(HexCoord::new(0, -2)));
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("a,4").is_err());
        assert!(parse_coord("3,4,5").is_err());
    }

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_path_command() {
        let args = Args::try_parse_from([
            "hexmarch",
            "path",
            "--scenario",
            "map.json",
            "--start",
            "0,0",
            "--goal",
            "4,4",
        ])
        .unwrap();
        assert!(args.settings.is_none());
        match args.command {
            Command::Path {
                start,
                goal,
                max_cost,
                ..
            } => {
                assert_eq!(start, HexCoord::new(0, 0));
                assert_eq!(goal, HexCoord::new(4, 4));
                assert_eq!(max_cost, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_reach_with_settings() {
        let args = Args::try_parse_from([
            "hexmarch",
            "reach",
            "--scenario",
            "map.json",
            "--start",
            "2,1",
            "--budget",
            "3.5",
            "--settings",
            "planner.json",
        ])
        .unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("planner.json")));
        match args.command {
            Command::Reach { start, budget, .. } => {
                assert_eq!(start, HexCoord::new(2, 1));
                assert_eq!(budget, Some(3.5));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_reach_output_shape() {
        let output = ReachOutput {
            start: HexCoord::new(0, 0),
            budget: 1.0,
            tiles: vec![ReachTile {
                x: 0,
                y: 0,
                cost: 0.0,
            }],
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["tiles"][0]["cost"], 0.0);
        assert_eq!(json["start"]["x"], 0);
    }
}
