//! Plan command: collect trip details and print the computed plan.

use clap::Args;
use std::io::Read;
use std::path::PathBuf;

use jetlag_core::{Config, TravelDetails, ZoneResolution};

#[derive(Args)]
pub struct PlanArgs {
    /// Read trip details from a JSON file ("-" for stdin)
    #[arg(long, conflicts_with_all = ["from", "to", "depart", "arrive"])]
    input: Option<PathBuf>,
    /// Departure timezone symbol (e.g. PST)
    #[arg(long, required_unless_present = "input")]
    from: Option<String>,
    /// Arrival timezone symbol (e.g. JST)
    #[arg(long, required_unless_present = "input")]
    to: Option<String>,
    /// Departure time, departure-local (YYYY-MM-DDTHH:MM)
    #[arg(long, required_unless_present = "input")]
    depart: Option<String>,
    /// Arrival time, arrival-local (YYYY-MM-DDTHH:MM)
    #[arg(long, required_unless_present = "input")]
    arrive: Option<String>,
    /// Usual bedtime (HH:MM), defaults to config sleep.default_bedtime
    #[arg(long)]
    bedtime: Option<String>,
    /// Usual wake time (HH:MM), defaults to config sleep.default_wake_time
    #[arg(long)]
    wake: Option<String>,
    /// Reject timezone symbols missing from the table
    #[arg(long)]
    strict: bool,
    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let travel = travel_details(&args, &config)?;

    let mut planner = config.planner();
    if args.strict {
        planner = planner.with_resolution(ZoneResolution::Strict);
    }

    let plan = planner.plan(&travel)?;

    if args.json || config.output.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", plan.render_text());
    }
    Ok(())
}

fn travel_details(
    args: &PlanArgs,
    config: &Config,
) -> Result<TravelDetails, Box<dyn std::error::Error>> {
    if let Some(path) = &args.input {
        let raw = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?
        };
        let mut travel: TravelDetails = serde_json::from_str(&raw)?;
        if let Some(bedtime) = &args.bedtime {
            travel.usual_bedtime = bedtime.clone();
        }
        if let Some(wake) = &args.wake {
            travel.usual_wake_time = wake.clone();
        }
        return Ok(travel);
    }

    let required = |value: &Option<String>, flag: &str| {
        value
            .clone()
            .ok_or_else(|| format!("missing required argument --{flag}"))
    };

    Ok(TravelDetails {
        departure_timezone: required(&args.from, "from")?,
        arrival_timezone: required(&args.to, "to")?,
        departure_time: required(&args.depart, "depart")?,
        arrival_time: required(&args.arrive, "arrive")?,
        usual_bedtime: args
            .bedtime
            .clone()
            .unwrap_or_else(|| config.sleep.default_bedtime.clone()),
        usual_wake_time: args
            .wake
            .clone()
            .unwrap_or_else(|| config.sleep.default_wake_time.clone()),
    })
}
