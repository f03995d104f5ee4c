//=========================================================================
// canvas_quiz — Command Line Entry Point
//=========================================================================
//
// Usage:
//   canvas_quiz [QUESTIONS] [--font PATH] [--fps N] [--advance-delay-ms N]
//               [--feedback-frames N] [--width W] [--height H]
//
// Logging is configured through RUST_LOG (e.g. RUST_LOG=canvas_quiz=debug).
//
//=========================================================================

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use canvas_quiz::EngineBuilder;
use clap::Parser;

/// Three-option multiple-choice quiz in a window.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// CSV file with columns id,question,option_a,option_b,option_c,correct_answer
    #[arg(default_value = "questions.csv")]
    questions: PathBuf,

    /// Font file to use instead of a system sans-serif font
    #[arg(long)]
    font: Option<PathBuf>,

    /// Frames per second (animations are frame-based)
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Milliseconds between answering and the next question
    #[arg(long, default_value_t = 1000)]
    advance_delay_ms: u64,

    /// Frames the feedback message takes to fade out
    #[arg(long, default_value_t = 100)]
    feedback_frames: u32,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let mut builder = EngineBuilder::new()
        .with_questions_path(&cli.questions)
        .with_fps(cli.fps)
        .with_window_size(cli.width, cli.height)
        .with_advance_delay(Duration::from_millis(cli.advance_delay_ms))
        .with_feedback_frames(cli.feedback_frames);

    if let Some(font) = cli.font {
        builder = builder.with_font_path(font);
    }

    builder
        .build()
        .run()
        .with_context(|| format!("quiz from {} stopped", cli.questions.display()))
}
