use std::env;

use lumped_inertia::{run_balance, AircraftSource, AnalyticOracle, BalanceInput, InertiaConfig};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: lumped_balance <aircraft.yaml | bwb | conventional> <balance_input.yaml> [config.yaml]";

/// Logs go to stderr so stdout carries only the JSON report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let source = AircraftSource::parse(&args[0]);
    let definition = source.load()?;
    let input = BalanceInput::from_file(&args[1])?;
    let config = match args.get(2) {
        Some(path) => InertiaConfig::from_file(path)?,
        None => InertiaConfig::default(),
    };

    let name = definition.name.clone();
    let mut oracle = AnalyticOracle::new(definition)?;
    let report = run_balance(&mut oracle, &config, &input)?;

    let wings: Vec<_> = report
        .wings
        .wings
        .iter()
        .map(|w| {
            serde_json::json!({
                "index": w.index,
                "symmetry": w.symmetry.code(),
                "horizontal": w.is_horizontal,
                "section_order": w.section_order,
                "span": w.span,
                "mac": w.mac.length,
                "volume": w.volume,
                "wetted_area": w.wetted_area,
            })
        })
        .collect();
    let fuselages: Vec<_> = report
        .fuselages
        .fuselages
        .iter()
        .map(|f| {
            serde_json::json!({
                "index": f.index,
                "section_order": f.section_order,
                "length": f.length,
                "max_width": f.max_width(),
            })
        })
        .collect();

    let main_wing = report.wings.main_wing().map(|w| {
        serde_json::json!({
            "index": w.index,
            "span": w.span,
            "mac": w.mac.length,
            "mac_position": [w.mac.position.x, w.mac.position.y, w.mac.position.z],
        })
    });

    let inertia = &report.inertia;
    let response = serde_json::json!({
        "aircraft": name,
        "geometry": {
            "main_wing": main_wing,
            "main_wing_planform_area": report.wings.main_wing_planform_area,
            "total_wings_surface": report.wings.total_wings_surface,
            "wings": wings,
            "fuselages": fuselages,
        },
        "inertia": {
            "fuselages": inertia.fuselages.tensor,
            "wings": inertia.wings.tensor,
            "engines": inertia.engines,
            "total": inertia.total,
        },
        "lumped_mass": inertia.fuselages.mass() + inertia.wings.mass(),
        "node_count": inertia.node_count(),
    });
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

