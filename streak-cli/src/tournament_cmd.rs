//! Tournament command - play rounds between two named players
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_tournament(), play_tournament(), report_results()
//! - Level 3: build_entrant(), validate_args()
//! - Level 4: formatting utilities

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use streak_core::{GameConfig, MAX_ENCODABLE_SIZE};
use streak_tournament::{Entrant, Seat, Tournament, TournamentConfig, TournamentResult};

use crate::factory::{self, PLAYER_NAMES, RENDERER_NAMES};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Clone, Debug)]
pub struct TournamentArgs {
    /// Number of rounds to play (first mark alternates each round)
    pub rounds: usize,

    /// Board size (size x size)
    pub size: usize,

    /// Marks in a row needed to win
    pub win_streak: usize,

    /// Where to draw the board: console | void
    pub renderer: String,

    /// Player 1: human | whatever | clever
    pub player1: String,

    /// Player 2: human | whatever | clever
    pub player2: String,

    /// Random seed for reproducible tournaments
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play rounds in parallel (ignored with console rendering or human players)
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Show a progress bar on stderr
    #[arg(long)]
    pub progress: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run tournament command
///
/// 1. Build the tournament (fails before any game on bad configuration)
/// 2. Play every round
/// 3. Report results
pub fn run(args: TournamentArgs) -> Result<()> {
    let tournament = build_tournament(&args)?;
    let result = play_tournament(&tournament, &args)?;

    report_results(&result, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Validate arguments and construct players, renderer and configuration
fn build_tournament(args: &TournamentArgs) -> Result<Tournament> {
    let game = GameConfig::new(args.size, args.win_streak).context("Invalid game configuration")?;
    validate_args(args)?;

    let renderer = factory::build_renderer(&args.renderer).with_context(|| {
        format!(
            "Unknown renderer '{}' (expected one of: {})",
            args.renderer,
            RENDERER_NAMES.join(", ")
        )
    })?;
    let player1 = build_entrant(&args.player1)?;
    let player2 = build_entrant(&args.player2)?;

    let mut config = TournamentConfig::new(args.rounds, game).with_parallel(wants_parallel(args));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    Ok(Tournament::new(config, player1, player2, renderer))
}

/// Play all rounds, ticking the progress bar if requested
fn play_tournament(tournament: &Tournament, args: &TournamentArgs) -> Result<TournamentResult> {
    let progress = create_progress_bar(args);

    let result = tournament.run_with_callback(|_| {
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    });

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    result.context("Tournament aborted")
}

/// Report tournament results
fn report_results(result: &TournamentResult, args: &TournamentArgs) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(&json_output(result))
            .context("Failed to serialize results")?;
        println!("{}", json);
    } else {
        println!("{}", result);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn build_entrant(name: &str) -> Result<Entrant> {
    let player = factory::build_player(name).with_context(|| {
        format!(
            "Unknown player '{}' (expected one of: {})",
            name,
            PLAYER_NAMES.join(", ")
        )
    })?;
    Ok(Entrant::new(name, player))
}

/// Checks that depend on more than one argument
fn validate_args(args: &TournamentArgs) -> Result<()> {
    let interactive = factory::is_interactive(&args.player1) || factory::is_interactive(&args.player2);
    if interactive && args.size > MAX_ENCODABLE_SIZE {
        bail!(
            "Board size {} is too large for keyboard input (max {})",
            args.size,
            MAX_ENCODABLE_SIZE
        );
    }
    Ok(())
}

/// Parallel rounds only make sense when nothing talks to the terminal
fn wants_parallel(args: &TournamentArgs) -> bool {
    if !args.parallel {
        return false;
    }
    let interactive = factory::is_interactive(&args.player1) || factory::is_interactive(&args.player2);
    if interactive || args.renderer == "console" {
        tracing::warn!("--parallel ignored: console rendering and human players need sequential rounds");
        return false;
    }
    true
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn create_progress_bar(args: &TournamentArgs) -> Option<ProgressBar> {
    if !args.progress {
        return None;
    }
    let bar = ProgressBar::new(args.rounds as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} rounds ({eta})") {
        bar.set_style(style);
    }
    Some(bar)
}

/// The full result plus derived rates
#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    result: &'a TournamentResult,
    player1_win_rate: f32,
    player2_win_rate: f32,
    tie_rate: f32,
    avg_half_turns: f32,
}

fn json_output(result: &TournamentResult) -> JsonOutput<'_> {
    JsonOutput {
        result,
        player1_win_rate: result.tally.win_rate(Seat::Player1),
        player2_win_rate: result.tally.win_rate(Seat::Player2),
        tie_rate: result.tally.tie_rate(),
        avg_half_turns: result.avg_half_turns(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(size: usize, streak: usize, renderer: &str, p1: &str, p2: &str) -> TournamentArgs {
        TournamentArgs {
            rounds: 4,
            size,
            win_streak: streak,
            renderer: renderer.to_string(),
            player1: p1.to_string(),
            player2: p2.to_string(),
            seed: Some(42),
            parallel: false,
            json: false,
            progress: false,
        }
    }

    fn build_error(args: &TournamentArgs) -> String {
        match build_tournament(args) {
            Ok(_) => panic!("expected a configuration error"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_build_tournament() {
        let t = build_tournament(&args(4, 3, "void", "clever", "whatever")).unwrap();
        assert_eq!(t.config().rounds, 4);
        assert_eq!(t.config().game.board_size(), 4);
        assert_eq!(t.config().seed, Some(42));
    }

    #[test]
    fn test_unknown_player_is_fatal() {
        let err = build_error(&args(4, 3, "void", "clever", "genius"));
        assert!(err.contains("Unknown player 'genius'"));
    }

    #[test]
    fn test_unknown_renderer_is_fatal() {
        let err = build_error(&args(4, 3, "gui", "clever", "clever"));
        assert!(err.contains("Unknown renderer 'gui'"));
    }

    #[test]
    fn test_streak_longer_than_board_is_fatal() {
        assert_eq!(
            build_error(&args(3, 4, "void", "clever", "clever")),
            "Invalid game configuration"
        );
        assert!(build_tournament(&args(0, 0, "void", "clever", "clever")).is_err());
    }

    #[test]
    fn test_oversized_board_is_fatal() {
        let a = args((1usize << 32) + 1, 3, "void", "clever", "clever");
        match build_tournament(&a) {
            Ok(_) => panic!("expected a configuration error"),
            Err(err) => {
                assert_eq!(err.to_string(), "Invalid game configuration");
                assert!(format!("{:#}", err).contains("board size must be at most"));
            }
        }
    }

    #[test]
    fn test_human_needs_encodable_board() {
        let err = build_error(&args(11, 3, "void", "human", "clever"));
        assert!(err.contains("too large for keyboard input"));
        assert!(build_tournament(&args(11, 3, "void", "whatever", "clever")).is_ok());
    }

    #[test]
    fn test_parallel_only_when_quiet() {
        let mut a = args(4, 3, "void", "clever", "whatever");
        a.parallel = true;
        assert!(wants_parallel(&a));

        a.renderer = "console".to_string();
        assert!(!wants_parallel(&a));

        a.renderer = "void".to_string();
        a.player2 = "human".to_string();
        assert!(!wants_parallel(&a));
    }

    #[test]
    fn test_json_output() {
        let t = build_tournament(&args(3, 3, "void", "clever", "whatever")).unwrap();
        let result = t.run().unwrap();
        let json = serde_json::to_value(json_output(&result)).unwrap();

        assert_eq!(json["seed"], 42);
        assert_eq!(json["names"][0], "clever");
        assert_eq!(json["names"][1], "whatever");

        let tally = &json["tally"];
        let counted = tally["player1_wins"].as_u64().unwrap()
            + tally["player2_wins"].as_u64().unwrap()
            + tally["ties"].as_u64().unwrap();
        assert_eq!(counted, 4);

        let rounds = json["rounds"].as_array().unwrap();
        assert_eq!(rounds.len(), 4);
        assert_eq!(rounds[1]["first_seat"], "Player2");
        assert_eq!(
            rounds[0]["outcome"]["moves"].as_array().unwrap().len(),
            result.rounds[0].outcome.half_turns()
        );
        assert!(json["avg_half_turns"].as_f64().unwrap() >= 5.0);
    }
}
