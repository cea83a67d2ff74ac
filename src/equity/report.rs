use super::equities::Equities;
use crate::cards::card::Card;
use crate::cards::category::Category;
use crate::cards::hand::Hand;
use crate::cards::suit::Suit;
use crate::Count;
use colored::Color;
use colored::Colorize;
use std::time::Duration;

/// Rendered equity table: win/tie percentages per seat, the category
/// spectrum per seat, and the enumeration footer.
///
/// Cards use four-color deck coloring (spades black, clubs green, hearts
/// red, diamonds blue). The `colored` override and `NO_COLOR` drop the
/// escapes entirely, which keeps the columns aligned either way since all
/// padding is applied before coloring.
pub struct Report {
    equities: Equities,
    elapsed: Duration,
}

impl From<(Equities, Duration)> for Report {
    fn from((equities, elapsed): (Equities, Duration)) -> Self {
        Self { equities, elapsed }
    }
}

impl Report {
    /// seat indices, best hand first
    fn seats(&self) -> Vec<usize> {
        let records = self.equities.records();
        let mut seats = (0..records.len()).collect::<Vec<_>>();
        seats.sort_by(|a, b| records[*b].wins().cmp(&records[*a].wins()));
        seats
    }

    fn percent(part: Count, whole: Count) -> f64 {
        match whole {
            0 => 0.,
            _ => part as f64 / whole as f64 * 100.,
        }
    }

    fn paint(hand: Hand) -> String {
        hand.into_iter().map(Self::tint).collect()
    }

    fn tint(card: Card) -> String {
        let color = match card.suit() {
            Suit::Spade => Color::Black,
            Suit::Club => Color::Green,
            Suit::Heart => Color::Red,
            Suit::Diamond => Color::Blue,
        };
        card.to_string().color(color).to_string()
    }

    fn chrome(text: &str) -> String {
        text.bright_black().to_string()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let players = self.equities.players();
        let records = self.equities.records();
        let combinations = self.equities.combinations();

        // board
        let community = self.equities.board();
        if community.size() > 0 {
            writeln!(f)?;
            writeln!(f, "{}", Self::chrome("board"))?;
            writeln!(f, "{}", Self::paint(community))?;
        }

        // win/tie table
        writeln!(f)?;
        writeln!(
            f,
            "{}    {}    {}",
            Self::chrome("hand"),
            Self::chrome("win"),
            Self::chrome("tie"),
        )?;
        for seat in self.seats() {
            writeln!(
                f,
                "{} {:>5.1}% {:>5.1}%",
                Self::paint(players[seat].hole()),
                Self::percent(records[seat].wins(), combinations),
                Self::percent(records[seat].ties(), combinations),
            )?;
        }

        // category spectrum
        writeln!(f)?;
        write!(f, "{:<16}", "")?;
        for seat in self.seats() {
            write!(f, "    {}", Self::paint(players[seat].hole()))?;
        }
        writeln!(f)?;
        for category in Category::all() {
            write!(f, "{:<16}", category.to_string())?;
            for seat in self.seats() {
                let held = records[seat].count(*category);
                let share = Self::percent(held, records[seat].showdowns());
                if held == 0 {
                    write!(f, "{:>7}{}", "", Self::chrome("."))?;
                } else if share < 0.1 {
                    write!(f, "{:>4}{}", "", Self::chrome(">0.1"))?;
                } else {
                    write!(f, "{:>7.1}%", share)?;
                }
            }
            writeln!(f)?;
        }

        // enumeration footer
        writeln!(f)?;
        writeln!(
            f,
            "{}",
            Self::chrome(&format!(
                "{} combinations calculated in {:.2?}",
                combinations, self.elapsed,
            )),
        )?;
        Ok(())
    }
}
