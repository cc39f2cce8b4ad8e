//! # klokk-frame
//!
//! Development tool that prints a single frame of the clock wall. It loads
//! klokk.toml (or the defaults), builds the requested movement and dumps its
//! verified frame as an angle table or as JSON.
//!
//! ```text
//! klokk-frame [--json] standby
//! klokk-frame [--json] trance <circle|square|flower|star|fly>
//! klokk-frame [--json] ripple <start|end>
//! klokk-frame [--json] time [HHMM]
//! ```

use anyhow::{anyhow, bail, Context};
use chrono::{Local, NaiveTime};
use klokk::config::Config;
use klokk::movement::{Movement, RippleTo, TranceTo};
use klokk::Matrix;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = if let Some(index) = args.iter().position(|arg| arg == "--json") {
        args.remove(index);
        true
    } else {
        false
    };

    let config = Config::load();
    let movement = parse_movement(&args)?;
    log::info!("Generating frame for {}", movement);

    let matrix = movement
        .matrix_generator()
        .verified_matrix(&config.grid)
        .with_context(|| format!("failed to generate {} frame", movement.name()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
    } else {
        println!(
            "{} ({} ms)",
            movement,
            movement.duration_millis(&config.timing)
        );
        print_table(&matrix);
    }
    Ok(())
}

fn parse_movement(args: &[String]) -> anyhow::Result<Movement> {
    let kind = args.first().map(String::as_str).unwrap_or("standby");
    let param = args.get(1).map(String::as_str);

    let movement = match (kind, param) {
        ("standby", _) => Movement::StandBy,
        ("trance", shape) => {
            let to = match shape {
                Some(shape) => shape.parse::<TranceTo>().map_err(|e| anyhow!(e))?,
                None => TranceTo::default(),
            };
            Movement::trance(to)
        }
        ("ripple", Some(direction)) => {
            Movement::ripple(direction.parse::<RippleTo>().map_err(|e| anyhow!(e))?)
        }
        ("ripple", None) => bail!("ripple needs a direction: start or end"),
        ("time", None) => Movement::time_now(),
        ("time", Some(hhmm)) => {
            let time = NaiveTime::parse_from_str(hhmm, "%H%M")
                .with_context(|| format!("invalid time `{hhmm}`, expected HHMM"))?;
            Movement::Time {
                instant: Local::now().date_naive().and_time(time),
            }
        }
        (other, _) => bail!("unknown movement `{other}`"),
    };
    Ok(movement)
}

/// One line per row, each clock as `one/two` degrees
fn print_table(matrix: &Matrix) {
    for row in matrix {
        let cells: Vec<String> = row
            .iter()
            .map(|clock| format!("{:>6.1}/{:<6.1}", clock.degree_one, clock.degree_two))
            .collect();
        println!("{}", cells.join(" "));
    }
}
