use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use arbiter_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use arbiter_chess::game_state::game_state::GameState;
use arbiter_chess::move_generation::legal_move_generator::{
    FastLegalMoveGenerator, LegalMoveGenerator,
};
use arbiter_chess::move_generation::move_generator::MoveGenerator;
use arbiter_chess::move_generation::perft::perft_multi_threaded;

struct ReportArgs {
    fen: String,
    depth: u8,
    annotated: bool,
}

fn parse_args(args: &[String]) -> Result<ReportArgs, String> {
    let mut report = ReportArgs {
        fen: STARTING_POSITION_FEN.to_owned(),
        depth: 4,
        annotated: false,
    };

    let mut iter = args.iter().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--fen" => {
                report.fen = iter.next().ok_or("--fen needs a value")?.clone();
            }
            "--depth" => {
                let value = iter.next().ok_or("--depth needs a value")?;
                report.depth = value
                    .parse()
                    .map_err(|_| format!("invalid depth: {value}"))?;
            }
            "--annotated" => report.annotated = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(report)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let report = match parse_args(&args) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: perft_report [--fen <FEN>] [--depth <N>] [--annotated]");
            return ExitCode::FAILURE;
        }
    };

    let game = match GameState::from_fen(&report.fen) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let generator: Arc<dyn MoveGenerator> = if report.annotated {
        Arc::new(LegalMoveGenerator)
    } else {
        Arc::new(FastLegalMoveGenerator)
    };

    println!("Perft report: fen=\"{}\" status={}", report.fen, game.status());
    println!("depth,nodes,captures,en_passant,castles,promotions,checks,checkmates,ms");

    for depth in 1..=report.depth {
        let start = Instant::now();
        let counts = match perft_multi_threaded(Arc::clone(&generator), &game, depth) {
            Ok(counts) => counts,
            Err(err) => {
                eprintln!("perft failed at depth {depth}: {err}");
                return ExitCode::FAILURE;
            }
        };
        println!(
            "{},{},{},{},{},{},{},{},{}",
            depth,
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            counts.checkmates,
            start.elapsed().as_millis()
        );
    }

    ExitCode::SUCCESS
}
