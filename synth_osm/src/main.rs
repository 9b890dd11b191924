#[macro_use]
extern crate log;

use anyhow::{bail, Result};
use structopt::StructOpt;

use synth_osm::{layers, singapore, sink};

#[derive(StructOpt)]
#[structopt(
    name = "synth_osm",
    about = "Synthesizes plausible OSM-style GeoJSON layers from hand-sketched waypoints"
)]
struct Flags {
    /// Directory to write one .geojson file per layer
    #[structopt(long, default_value = "data/osm")]
    output: String,
}

fn main() -> Result<()> {
    synth_osm::logger::setup();
    let flags = Flags::from_args();

    let city = singapore::city_map();
    let mut failed = Vec::new();
    for (layer, result) in layers::generate(&city) {
        if let Err(err) =
            result.and_then(|collection| sink::write_layer(&flags.output, layer, collection))
        {
            error!("Layer {} failed: {:#}", layer, err);
            failed.push(layer);
        }
    }

    if !failed.is_empty() {
        bail!("failed to generate: {}", failed.join(", "));
    }
    info!("All layers written to {}", flags.output);
    Ok(())
}
