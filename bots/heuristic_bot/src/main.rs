use anyhow::Context;
use arboretum::{Card, CardToPlace, DrawSource, GameView};
use arboretum_bot_utils::{Bot, MoveSelector};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// RNG seed, used for breaking ties between equally good moves
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let selector = MoveSelector::new(StdRng::seed_from_u64(seed));

    HeuristicBot { selector, games: 0 }.run()
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout is reserved for the protocol
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

struct HeuristicBot {
    selector: MoveSelector<StdRng>,
    games: usize,
}

impl Bot for HeuristicBot {
    fn new_game(&mut self) {
        self.games += 1;
        debug!(game = self.games, "New game");
    }

    fn draw(&mut self, view: &GameView) -> anyhow::Result<DrawSource> {
        Ok(self
            .selector
            .choose_draw(&view.hand, &view.opponent_hand, &view.discard_tops))
    }

    fn play(&mut self, view: &GameView) -> anyhow::Result<CardToPlace> {
        let own_area = view.own_play_area().context("Invalid own play area")?;
        let opponent_area = view
            .opponent_play_area()
            .context("Invalid opponent play area")?;
        trace!("Own play area:\n{}", own_area);
        self.selector
            .choose_play(&own_area, &view.hand, &view.opponent_hand, &opponent_area)
            .context("Asked to play a card with an empty hand")
    }

    fn discard(&mut self, view: &GameView) -> anyhow::Result<Card> {
        self.selector
            .choose_discard(&view.hand, &view.opponent_hand)
            .context("Asked to discard a card with an empty hand")
    }
}
