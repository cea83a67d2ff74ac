//! Exhaustive Texas Hold-Em equity calculation.
//!
//! Given any number of two-card holdings and a partial community board,
//! [`equity::Equities`] enumerates every legal completion of the board,
//! settles the showdown for each one, and accumulates per-seat win/tie
//! counts together with the frequency of each made-hand category.

pub mod cards;
pub mod equity;

/// Win, tie, category, and combination counters.
///
/// The widest enumeration a 52-card deck admits is C(50, 5) = 2,118,760
/// boards, so 64 bits never saturate.
pub type Count = u64;

/// Random instance generation for tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging.
///
/// Progress lines are emitted at debug level, so the default output stays
/// limited to the one info line per computation.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
