//! cypher - terminal freestyle trainer
//!
//! Run with: cargo run
//!
//! Space starts the beat (and the no-pause drill with it). Any letter
//! key counts as your voice; stay "audible" or the drill fails.

mod app;
mod transport;
mod ui;

use app::Cypher;
use color_eyre::eyre::eyre;
use cypher_trainer::beat::Beat;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let beat = Beat::catalog()
        .into_iter()
        .find(|b| b.id == "boom-bap-90s")
        .ok_or_else(|| eyre!("built-in beat catalog is missing boom-bap-90s"))?;

    Cypher::new(beat).pattern("AABB").run()
}
