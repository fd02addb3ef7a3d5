use anyhow::{Context, Result};
use cardmaster_core::{
    Event, GameConfig, GameError, GameSession, Mode, RngState, StandardCardFactory,
};
use cardmaster_leaderboard::Leaderboard;
use std::cell::RefCell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const DEFAULT_ROUNDS: u32 = 5;
const LEADERBOARD_ROWS: usize = 10;

#[derive(Debug, Clone)]
struct CliOptions {
    rounds: u32,
    seed: Option<u64>,
    config: Option<PathBuf>,
    scores: Option<PathBuf>,
}

fn default_scores_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CARDMASTER_SCORES") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cardmaster_scores.bin"))
}

fn parse_cli_options(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions {
        rounds: DEFAULT_ROUNDS,
        seed: None,
        config: None,
        scores: default_scores_path(),
    };
    let mut idx = 0usize;
    while idx < args.len() {
        let flag = args[idx].as_str();
        let value = args.get(idx + 1);
        match (flag, value) {
            ("--rounds" | "-r", Some(value)) => {
                options.rounds = value
                    .parse()
                    .with_context(|| format!("--rounds expects a number, got {value}"))?;
                idx += 1;
            }
            ("--seed", Some(value)) => {
                options.seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("--seed expects a number, got {value}"))?,
                );
                idx += 1;
            }
            ("--config", Some(value)) => {
                options.config = Some(PathBuf::from(value));
                idx += 1;
            }
            ("--scores", Some(value)) => {
                options.scores = Some(PathBuf::from(value));
                idx += 1;
            }
            _ => warn!(arg = flag, "ignoring argument"),
        }
        idx += 1;
    }
    Ok(options)
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&body).with_context(|| format!("parsing config {}", path.display()))
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args)?;
    let config = load_config(options.config.as_deref())?;

    let leaderboard = Rc::new(RefCell::new(Leaderboard::new()));
    if let Some(path) = &options.scores {
        if let Err(err) = leaderboard.borrow_mut().load_from_path(path) {
            eprintln!("could not load leaderboard {}: {err}", path.display());
        }
    }

    let rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    let mut game = GameSession::with_config(
        options.rounds,
        config,
        Box::new(StandardCardFactory::all()),
        rng,
    )?;
    game.set_score_recorder(Some(Box::new(Rc::clone(&leaderboard))));
    println!("seed: {}", game.seed());
    print_help();

    run_loop(&mut game)?;

    if game.mode() == Mode::End {
        print_final(&game, &leaderboard.borrow());
        if let Some(path) = &options.scores {
            leaderboard
                .borrow()
                .save_to_path(path)
                .with_context(|| format!("saving leaderboard {}", path.display()))?;
        }
    }
    Ok(())
}

fn run_loop(game: &mut GameSession) -> Result<()> {
    while game.mode() != Mode::End {
        print_events(game);
        match game.mode() {
            Mode::Shopping => print_shop(game)?,
            Mode::Playing => print_table(game)?,
            Mode::End => break,
        }
        let prompt = format!("{}> ", game.mode().name().to_lowercase());
        let Some(line) = read_line(&prompt) else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        let outcome = match cmd {
            "help" | "h" | "?" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" | "q" => break,
            "buy" | "b" => match parse_indices::<1>(&args) {
                Some([index]) => game.buy(index).map(|bought| {
                    if !bought {
                        println!("cannot buy that now");
                    }
                }),
                None => {
                    println!("usage: buy <index>");
                    Ok(())
                }
            },
            "end" | "e" => game.end_shopping().map(|()| {
                if game.mode() == Mode::Shopping {
                    println!("buy at least one card first");
                }
            }),
            "play" | "p" => match parse_indices::<2>(&args) {
                Some([hand, stack]) => game.play_at(hand, stack),
                None => {
                    println!("usage: play <hand index> <stack index>");
                    Ok(())
                }
            },
            _ => {
                println!("unknown command: {cmd} (try help)");
                Ok(())
            }
        };
        if let Err(err) = outcome {
            print_error(&err);
        }
    }
    print_events(game);
    Ok(())
}

fn parse_indices<const N: usize>(args: &[&str]) -> Option<[usize; N]> {
    if args.len() != N {
        return None;
    }
    let mut out = [0usize; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().ok()?;
    }
    Some(out)
}

fn print_help() {
    println!("commands:");
    println!("  buy <i>            buy shop item i (shopping)");
    println!("  end                leave the shop and deal the hand (shopping)");
    println!("  play <h> <s>       play hand card h onto stack s (playing)");
    println!("  help               show this list");
    println!("  quit               leave the game");
}

fn print_error(err: &GameError) {
    println!("error: {err}");
}

fn print_events(game: &mut GameSession) {
    for event in game.drain_events() {
        match event {
            Event::UpgradeApplied {
                kind,
                times_purchased,
            } => println!("{} (bought {times_purchased}x)", kind.description()),
            Event::CardPlayed { card, gained, .. } => println!("{card} scored {gained}"),
            Event::RoundAdvanced { round } => println!("--- round {round} ---"),
            _ => {}
        }
    }
}

fn print_shop(game: &GameSession) -> Result<(), GameError> {
    println!(
        "round {}/{} | credits {} | stacks {} | hand {}",
        game.current_round(),
        game.max_rounds(),
        game.credits(),
        game.stacks_count(),
        game.hand_capacity()
    );
    for index in 0..game.shop_item_count()? {
        println!("  [{index}] {}", game.shop_item_description(index)?);
    }
    Ok(())
}

fn print_table(game: &GameSession) -> Result<(), GameError> {
    let tops: Vec<String> = game
        .top_shapes()?
        .into_iter()
        .enumerate()
        .map(|(index, top)| format!("[{index}] {}", top.map_or("-".to_string(), |shape| shape.to_string())))
        .collect();
    println!("credits {} | stacks {}", game.credits(), tops.join("  "));
    for index in 0..game.hand_cards_count()? {
        println!("  ({index}) {}", game.hand_card(index)?);
    }
    Ok(())
}

fn print_final(game: &GameSession, leaderboard: &Leaderboard) {
    println!("game over, final credits: {}", game.credits());
    match game.final_rank() {
        Some(rank) => println!("rank: {rank}"),
        None => println!("score was not ranked"),
    }
    for entry in leaderboard.iter().take(LEADERBOARD_ROWS) {
        println!("  {:>3}. {}", entry.rank, entry.score);
    }
}
