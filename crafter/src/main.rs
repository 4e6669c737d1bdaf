#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, BufRead, Write};
use std::time::Instant;

use crafter_config::{ADVANCED_CONFIG, BASIC_CONFIG};
use crafter_registry::Catalog;
use error::CrafterError;
use log::log;

pub mod error;
pub mod observation;

fn init_logger() {
    if ADVANCED_CONFIG.logging.enabled {
        let mut logger = simple_logger::SimpleLogger::new();
        logger = logger.with_timestamp_format(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));

        if !ADVANCED_CONFIG.logging.timestamp {
            logger = logger.without_timestamps();
        }

        if ADVANCED_CONFIG.logging.env {
            logger = logger.env();
        }

        logger = logger.with_level(ADVANCED_CONFIG.logging.level.into());

        logger = logger.with_colors(ADVANCED_CONFIG.logging.color);
        logger = logger.with_threads(ADVANCED_CONFIG.logging.threads);
        logger.init().unwrap();
    }
}

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let time = Instant::now();
    init_logger();

    log::info!("Starting Crafter {CARGO_PKG_VERSION}");

    let settings = BASIC_CONFIG.crafting.catalog_settings();
    log::debug!(
        "Crafting grid: {}x{}, layers: {:?}",
        settings.width,
        settings.height,
        settings.layers
    );

    let catalog = match Catalog::load_dir(&BASIC_CONFIG.catalog_path, &settings) {
        Ok(catalog) => catalog,
        Err(err) => {
            err.log();
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} recipe(s) in {} signature bucket(s) and {} refinement(s), took {}ms",
        catalog.recipes().len(),
        catalog.recipes().signature_count(),
        catalog.refinements().len(),
        time.elapsed().as_millis()
    );
    if catalog.recipes().is_empty() && catalog.refinements().is_empty() {
        log::warn!(
            "The catalog at {:?} is empty, nothing will ever match",
            BASIC_CONFIG.catalog_path
        );
    }

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    for (number, line) in stdin.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("Couldn't read observation: {err}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = match observation::resolve(&catalog, &settings, &line) {
            Ok(reply) => reply,
            Err(err) => {
                log!(err.severity(), "Skipping line {}: {}", number + 1, err);
                continue;
            }
        };
        let written = serde_json::to_string(&reply)
            .map_err(io::Error::from)
            .and_then(|reply| writeln!(stdout, "{reply}"));
        if let Err(err) = written {
            log::error!("Couldn't write reply: {err}");
            break;
        }
    }
}
