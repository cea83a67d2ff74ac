use anyhow::Result;
use clap::Parser;
use pokerodds::cards::hand::Hand;
use pokerodds::cards::hole::Hole;
use pokerodds::equity::equities::Equities;
use pokerodds::equity::report::Report;

/// Exhaustive Texas Hold-Em equity calculation.
#[derive(Parser)]
#[command(version, about, after_help = HELP)]
struct Args {
    /// The cards with their suits in the board, e.g. AcTh6h
    #[arg(long, value_name = "CARDS")]
    board: Option<String>,

    /// Disable color output (raw data for file saving)
    #[arg(long)]
    no_color: bool,

    /// Two-card hands, e.g. AcKs
    #[arg(required = true, value_name = "HAND")]
    hands: Vec<String>,
}

const HELP: &str = "Available numbers: A K Q J T 9 8 7 6 5 4 3 2
Available suits: s c h d
Example of usage (hands must be last always):
  pokerodds --board AcTh6h Ah3h KdQd";

fn main() -> Result<()> {
    pokerodds::log();
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }
    let hands = args
        .hands
        .iter()
        .map(|s| Hole::try_from(s.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(anyhow::Error::msg)?;
    let board = match args.board.as_deref() {
        Some(s) => Hand::try_from(s).map_err(anyhow::Error::msg)?,
        None => Hand::empty(),
    };
    deduplicate(&hands, board)?;

    let clock = std::time::Instant::now();
    let equities = Equities::compute(&hands, board)?;
    let elapsed = clock.elapsed();
    print!("{}", Report::from((equities, elapsed)));
    Ok(())
}

/// reject any card appearing in more than one hand, twice in one hand's
/// notation, or in both a hand and the board
fn deduplicate(hands: &[Hole], board: Hand) -> Result<()> {
    let mut seen = 0u64;
    for hand in hands
        .iter()
        .copied()
        .map(Hand::from)
        .chain(std::iter::once(board))
    {
        for card in hand {
            let bit = u64::from(card);
            anyhow::ensure!(seen & bit == 0, "card {} is duplicated", card);
            seen |= bit;
        }
    }
    Ok(())
}
