use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use unit_circle::config::QuizConfig;
use unit_circle::core::{coordinates_for_input_boxes, CANONICAL_COUNT};
use unit_circle::services::QuizSession;

const SWITCH_COMMAND: &str = ":switch";
const QUIT_COMMAND: &str = ":quit";

fn load_config() -> Result<QuizConfig> {
    // Config path - read from args or search the default locations
    let args: Vec<String> = std::env::args().collect();
    match args.get(1) {
        Some(path) => QuizConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path)),
        None => QuizConfig::from_default_location().context("Failed to load default config"),
    }
}

/// Ask for every open box once. Returns false when the learner quits.
fn play_round<R: BufRead, W: Write>(
    session: &mut QuizSession,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let points = coordinates_for_input_boxes();

    for (id, point) in points.iter().enumerate() {
        if session.is_locked(id) {
            continue;
        }
        session.focus_input(id)?;
        write!(
            out,
            "[{:>2}] angle at ({:.3}, {:.3}) in {}: ",
            id,
            point.x,
            point.y,
            session.current_angle_mode()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim() {
            QUIT_COMMAND => return Ok(false),
            SWITCH_COMMAND => {
                session.switch_angle_mode();
                writeln!(out, "Switched to {} mode", session.current_angle_mode())?;
                return Ok(true);
            }
            answer => {
                let typed = session.set_input(id, answer)?;
                if typed != answer {
                    writeln!(out, "  (entered as '{}')", typed)?;
                }
            }
        }
    }

    let newly_correct = session.check_answers();
    let (correct, total) = session.score();
    writeln!(
        out,
        "{} new correct answers, {}/{} total",
        newly_correct.len(),
        correct,
        total
    )?;
    Ok(true)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config()?;
    let mut session = QuizSession::new(config);

    println!("=== Unit Circle Quiz ===");
    println!("Mode: {}", session.current_angle_mode());
    println!(
        "Type '{}' to change mode (clears answers), '{}' to stop.",
        SWITCH_COMMAND, QUIT_COMMAND
    );
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    while !session.is_complete() {
        if !play_round(&mut session, &mut input, &mut out)? {
            break;
        }
    }

    if session.is_complete() {
        println!();
        println!("✓ All {} angles correct!", CANONICAL_COUNT);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_grades_answers() {
        let mut session = QuizSession::default();
        let answers = "0\n180\n90\n271\n\n\n\n\n\n\n\n\n\n\n\n\n";
        let mut input = answers.as_bytes();
        let mut out = Vec::new();

        assert!(play_round(&mut session, &mut input, &mut out).unwrap());
        assert_eq!(session.score().0, 3);
        assert!(session.is_locked(2));
        assert!(!session.is_locked(3));
    }

    #[test]
    fn test_quit_and_switch() {
        let mut session = QuizSession::default();
        let mut input = ":switch\n".as_bytes();
        let mut out = Vec::new();
        assert!(play_round(&mut session, &mut input, &mut out).unwrap());
        assert!(session.is_radians_enabled());

        let mut input = ":quit\n".as_bytes();
        assert!(!play_round(&mut session, &mut input, &mut out).unwrap());
    }
}
