// main.rs - Terminal driver for the conway engine
// Paces generations on a tokio interval, draws frames, saves the final grid

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use conway::{CycleDetector, LifeConfig, Pattern, World, pattern, render};
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::MissedTickBehavior;

mod cli;
mod console;

use cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let result = run_app(Args::parse()).await;
    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}

async fn run_app(args: Args) -> Result<()> {
    if args.list_patterns {
        for builtin in pattern::BUILTIN {
            let p = builtin.pattern();
            println!("{:<20} {}x{}", builtin.name, p.width(), p.height());
        }
        return Ok(());
    }

    let config = args.into_config()?;
    info!(
        "{}x{} world, {} boundary, {} generations at {} fps, scale {}",
        config.width,
        config.height,
        config.boundary,
        config.generations,
        config.refresh_rate,
        config.scale
    );

    let mut world = World::with_boundary(config.width, config.height, config.boundary)
        .context("failed to create world")?;
    seed_world(&mut world, &config);

    let stats = run(&mut world, &config, &mut io::stdout().lock()).await;

    render::save_state(&config.output, &world)
        .with_context(|| format!("failed to save final state to {}", config.output.display()))?;
    stats.report();
    info!("final state written to {}", config.output.display());

    world.destroy();
    Ok(())
}

/// Stamps the configured pattern, or fills the world randomly when there is
/// none or it cannot be loaded.
fn seed_world(world: &mut World, config: &LifeConfig) {
    let stamped = if let Some(name) = &config.pattern {
        match Pattern::builtin(name) {
            Some(p) => world.stamp(&p).map_err(anyhow::Error::from),
            None => Err(anyhow::anyhow!("unknown built-in pattern '{name}'")),
        }
    } else if let Some(path) = &config.input {
        world.load_pattern(path).map_err(anyhow::Error::from)
    } else {
        info!("no pattern given, starting from a random fill");
        return randomize(world, config.seed);
    };

    match stamped {
        Ok(count) => info!("stamped {count} live cells"),
        Err(err) => {
            warn!("{err:#}; falling back to a random fill");
            randomize(world, config.seed);
        }
    }
}

fn randomize(world: &mut World, seed: Option<u64>) {
    match seed {
        Some(seed) => world.randomize(&mut StdRng::seed_from_u64(seed)),
        None => world.randomize(&mut rand::rng()),
    }
}

struct RunStats {
    generations: u64,
    elapsed: Duration,
    population: u32,
    stopped_early: bool,
}

impl RunStats {
    fn report(&self) {
        let secs = self.elapsed.as_secs_f64();
        let rate = if secs > 0.0 {
            self.generations as f64 / secs
        } else {
            0.0
        };
        info!(
            "{} generations in {:.3}s ({:.1} gen/s), final population {}{}",
            self.generations,
            secs,
            rate,
            self.population,
            if self.stopped_early { ", stopped early" } else { "" }
        );
    }
}

/// Steps the world for the configured number of generations.
///
/// A failing render sink only turns rendering off; the run carries on so
/// the final state still gets saved.
async fn run<W: Write>(world: &mut World, config: &LifeConfig, out: &mut W) -> RunStats {
    let mut rendering = config.render;
    if rendering {
        console::enable_ansi();
        if let Err(err) = render::clear_screen(out) {
            warn!("cannot clear terminal ({err}), rendering disabled");
            rendering = false;
        }
    }

    let mut ticker = config.frame_interval().map(|period| {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    });
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut cycles = CycleDetector::new();
    let started_at = world.generation();
    let started = Instant::now();
    let mut stopped_early = false;

    for _ in 0..config.generations {
        if rendering {
            rendering = draw(out, world, config.scale);
        }

        world.step();

        if config.stop_on_cycle && cycles.observe(world) {
            info!("grid repeats at generation {}, stopping", world.generation());
            stopped_early = true;
            break;
        }

        let interrupted = match ticker.as_mut() {
            Some(ticker) => tokio::select! {
                _ = ticker.tick() => false,
                _ = &mut ctrl_c => true,
            },
            None => tokio::select! {
                biased;
                _ = &mut ctrl_c => true,
                _ = tokio::task::yield_now() => false,
            },
        };
        if interrupted {
            warn!("interrupted at generation {}", world.generation());
            stopped_early = true;
            break;
        }
    }

    if rendering {
        draw(out, world, config.scale);
    }

    RunStats {
        generations: world.generation() - started_at,
        elapsed: started.elapsed(),
        population: world.population(),
        stopped_early,
    }
}

/// Draws one frame; returns whether rendering should continue.
fn draw<W: Write>(out: &mut W, world: &World, scale: u16) -> bool {
    match render::draw_frame(out, world, scale) {
        Ok(()) => true,
        Err(err) => {
            warn!(
                "cannot draw frame at generation {} ({err}), rendering disabled",
                world.generation()
            );
            false
        }
    }
}
