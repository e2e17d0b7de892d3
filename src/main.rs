use std::io;

use clap::{ArgAction, Parser};
use dice_collection::{
    chart::{ChartStyle, DEFAULT_STAR_UNIT},
    console::{Console, Settings},
    input::parse_face_counts,
    session::DEFAULT_TRIALS,
};
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};

const MAX_ROWS: i64 = 1000;

/// Roll a collection of dice once or many times and chart the sums.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Sides of every die, e.g. "6, 6, 4" or "3d6". Asked for when missing.
    #[arg(short, long)]
    dice: Option<String>,

    /// Trials run by a bulk roll.
    #[arg(short, long, default_value_t = DEFAULT_TRIALS, value_parser = clap::value_parser!(u32).range(1..))]
    trials: u32,

    /// Trials represented by one `*` of the star chart.
    #[arg(long, default_value_t = DEFAULT_STAR_UNIT, value_parser = clap::value_parser!(u32).range(1..))]
    star_unit: u32,

    /// How the histogram is drawn.
    #[arg(long, value_enum, default_value_t = ChartStyle::Stars)]
    chart: ChartStyle,

    /// Height of the column chart.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..=MAX_ROWS))]
    rows: u16,

    /// Seed for reproducible rolls.
    #[arg(long)]
    seed: Option<u64>,

    /// Log more, repeat for even more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let face_counts = args.dice.as_deref().map(parse_face_counts).transpose()?;

    let rng = match args.seed {
        Some(seed) => {
            info!("seeding rolls with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let settings = Settings {
        trials: args.trials,
        star_unit: args.star_unit,
        chart: args.chart,
        rows: args.rows as usize,
    };
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), settings);
    console.run(face_counts, rng)?;

    Ok(())
}
