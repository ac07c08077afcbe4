use clap::Parser;
use stayfold::bandit::Budget;
use stayfold::bandit::Config;
use stayfold::bandit::Engine;
use stayfold::cards::Hand;
use stayfold::cards::Hole;

/// estimate whether a two-card hand should stay or fold against one
/// unknown opponent, by Monte Carlo rollouts under a UCB1 bandit
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// hero hole cards, e.g. "7c 2h"
    #[arg(long)]
    hand: String,
    /// revealed community cards (0, 3, or 4), e.g. "Qd 9s 5c"
    #[arg(long, default_value = "")]
    board: String,
    /// how many candidate opponent holes to explore
    #[arg(long, default_value_t = stayfold::ARM_LIMIT)]
    arms: usize,
    /// run a fixed number of rollouts instead of a wall clock budget
    #[arg(long, conflicts_with = "seconds")]
    trials: Option<usize>,
    /// wall clock budget in seconds
    #[arg(long)]
    seconds: Option<f64>,
    /// rng seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn budget(&self) -> Budget {
        match (self.trials, self.seconds) {
            (Some(trials), _) => Budget::Trials(trials),
            (None, Some(seconds)) => Budget::Clock(std::time::Duration::from_secs_f64(seconds)),
            (None, None) => Budget::default(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging();
    let args = Args::parse();
    let hero = Hole::try_from(args.hand.as_str())?;
    let public = Hand::try_from(args.board.as_str())?;
    let engine = Engine::new(Config {
        arms: args.arms,
        budget: args.budget(),
        seed: args.seed,
    })?;
    let decision = engine.decide(hero, public)?;
    log::info!(
        "win probability {:.3} after {} simulations",
        decision.probability,
        decision.simulations
    );
    println!("{}", decision.action);
    Ok(())
}

fn logging() {
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
