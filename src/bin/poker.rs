use anyhow::{bail, Context};
use clap::Parser;
use log::{debug, error, info};
use poker_hand_eval::deck::Deck;
use poker_hand_eval::{BestHand, Evaluator, PoolConfig};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    version = poker_hand_eval::VERSION,
    about = "Find the best five-card poker hand in a set of cards."
)]
struct Cli {
    /// Card tokens such as 10H, QS, ad.
    tokens: Vec<String>,
    /// Largest accepted pool size.
    #[clap(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=52))]
    max_cards: u8,
    /// Deal this many random cards instead of reading tokens.
    #[clap(long, conflicts_with = "tokens")]
    deal: Option<usize>,
    /// Seed for --deal; random when omitted.
    #[clap(long, requires = "deal")]
    seed: Option<u64>,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
    /// Log evaluation details.
    #[clap(long, short)]
    verbose: bool,
}

fn dealt_tokens(count: usize, seed: u64) -> anyhow::Result<Vec<String>> {
    let mut deck = Deck::shuffled(seed);
    let cards = deck.draw_n(count);
    if cards.len() < count {
        bail!("cannot deal {count} cards from a {} card deck", cards.len());
    }
    Ok(cards.iter().map(ToString::to_string).collect())
}

fn print_hand(best: &BestHand, json: bool) -> anyhow::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(best).context("serializing result")?;
        println!("{out}");
    } else {
        let cards: Vec<String> = best.cards().iter().map(ToString::to_string).collect();
        println!("{}", best.label());
        println!("{}", best.description());
        println!("{}", cards.join(" "));
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = PoolConfig::with_max_cards(cli.max_cards as usize)?;
    let tokens = match cli.deal {
        Some(count) => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            info!("Dealing {count} cards with seed {seed}");
            let tokens = dealt_tokens(count, seed)?;
            println!("{}", tokens.join(" "));
            tokens
        }
        None => cli.tokens,
    };

    let evaluator = Evaluator::new(config);
    debug!(
        "Evaluating {} tokens (max {})",
        tokens.len(),
        evaluator.config().max_cards()
    );
    let best = evaluator.evaluate(&tokens)?;
    print_hand(&best, cli.json)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
