//! Stat Cards - Auto-rotating highlight over four statistic cards
//!
//! The highlight walks right to left every 3 seconds. Hover a card with the
//! mouse to take over; move away and autoplay resumes half a second later
//! from the card you touched last.
//!
//! Set `RUST_LOG=debug` and redirect stderr to a file to watch the timers.
//!
//! Run with: cargo run --example stat_cards 2>spotlight.log

use spotlight_tui::error::Result;
use spotlight_tui::{CardContent, SpotlightConfig, TerminalHost};

fn stat_cards() -> Vec<CardContent> {
    vec![
        CardContent::new(
            "98%",
            "Precisión en la detección",
            "Detección precisa de vehículos y espacios",
        ),
        CardContent::new(
            "50%",
            "Reducción de tiempo",
            "Reduce el tiempo de búsqueda de espacios disponibles",
        ),
        CardContent::new(
            "30%",
            "Aumento de eficiencia",
            "Aumenta la eficiencia de la gestión del estacionamiento",
        ),
        CardContent::new(
            "24/7",
            "Monitoreo continuo",
            "Monitoreo continuo 24/7 para una gestión eficiente",
        ),
    ]
}

fn main() -> Result<()> {
    env_logger::init();

    let mut host = TerminalHost::mount(stat_cards(), SpotlightConfig::default())?;
    host.run()?;
    host.unmount()?;

    println!("Goodbye!");
    Ok(())
}
