//! Run the adapter end-to-end against the stub model: a three-hour
//! flythrough at a single point, with space-weather drivers attached.
//!
//! Usage: `cargo run --example flythrough` (set RUST_LOG=debug to see the
//! invocation boundary).

use tracing_subscriber::{fmt, EnvFilter};

use msis::testdata::StubModel;
use msis::{calculate, MsisRequest, TimeInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let time = TimeInput::from_iso8601_many(&[
        "2024-01-15T00:00:00Z",
        "2024-01-15T01:00:00Z",
        "2024-01-15T02:00:00Z",
    ])?;

    let request = MsisRequest::new(time, 45.0, -75.0, 400.0)
        .with_f107(150.0)
        .with_f107a(148.0)
        .with_ap(12.0);

    let ds = calculate(&StubModel::default(), request)?;

    println!("coords: {} times, alt {:?} km", ds.coords.time.len(), ds.coords.alt);
    let mut names: Vec<&str> = ds.variable_names().collect();
    names.sort();
    for name in names {
        let var = ds.get(name).unwrap();
        println!(
            "{name:>14} [{}] shape {:?}: {:?}",
            var.unit, var.shape, var.values
        );
    }

    Ok(())
}
