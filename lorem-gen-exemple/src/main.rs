use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use lorem_gen_core::{GenerationConfig, Language, LoremGenerator, Mode, PresetKey, preset_texts};

/// Prints lorem filler text or a preset preview text.
#[derive(Debug, Parser)]
#[command(name = "lorem-gen-exemple", version)]
struct Args {
    /// words, sentences, paragraphs or pangram
    #[arg(short, long, default_value = "sentences")]
    mode: Mode,

    /// Number of words, sentences or paragraphs (clamped to at least 1)
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    count: i64,

    /// latin, russian or mixed
    #[arg(short, long, default_value = "latin")]
    language: Language,

    /// Do not force "Lorem ipsum" at the start of a words output
    #[arg(long)]
    no_lorem: bool,

    /// Seed the random source to get the same text on every run
    #[arg(long)]
    seed: Option<u64>,

    /// Print a preset instead (e.g. typography-en, sample-mixed)
    #[arg(long, conflicts_with_all = ["mode", "count", "seed"])]
    preset: Option<PresetKey>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Args::parse();

    // Presets are fixed texts, nothing to generate
    if let Some(key) = args.preset {
        debug!("printing preset {}", key);
        println!("{}", preset_texts().get(key.category, key.language));
        return Ok(());
    }

    let config = GenerationConfig::new(args.mode, args.count, args.language)
        .start_with_lorem(!args.no_lorem);

    // Same seed, same output
    let text = match args.seed {
        Some(seed) => LoremGenerator::with_rng(StdRng::seed_from_u64(seed)).generate(&config),
        None => LoremGenerator::new().generate(&config),
    };
    println!("{}", text);

    Ok(())
}
