use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lottomax_core::{
    paytable::{MAX_LINES, MIN_LINES},
    play_session, random_server_seed, read_source, DrawGenerator, PlayOutcome, PlayRequest,
    ProvablyFairRng, Validation, WinningLineSource,
};
use lottomax_shared::SessionRecord;

mod prompt;
mod report;
mod rules;
mod verify;

#[derive(Parser)]
#[command(
    name = "lottomax",
    about = "Lotto Max ticket simulator",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Buy tickets and settle them (default)
    Play(PlayArgs),
    /// Print the rules and prize table
    Rules,
    /// Re-derive and re-settle a recorded session
    Verify { path: PathBuf },
}

#[derive(Args, Clone)]
struct PlayArgs {
    /// Number of lines; prompted when omitted
    #[arg(long, value_parser = clap::value_parser!(u32).range(MIN_LINES as i64..=MAX_LINES as i64))]
    lines: Option<u32>,
    /// Buy the extra Encore line; prompted when omitted
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    encore: Option<bool>,
    /// File holding the winning numbers
    #[arg(long, env = "LOTTOMAX_WINNING_FILE", default_value = "winning_numbers.txt")]
    winning_file: PathBuf,
    /// Directory for ticket, results and session files
    #[arg(long, env = "LOTTOMAX_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,
    /// Server seed, random when omitted
    #[arg(long, env = "LOTTOMAX_SEED")]
    seed: Option<String>,
    #[arg(long, default_value = "lottomax")]
    client_seed: String,
    /// Reject winning numbers that are out of range or repeated
    #[arg(long)]
    strict: bool,
    /// Play a single session without the replay prompt
    #[arg(long)]
    once: bool,
}

/// `None` when the player closed the input.
fn answer<T>(res: io::Result<T>) -> anyhow::Result<Option<T>> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn print_session<W: Write>(out: &mut W, outcome: &PlayOutcome) -> io::Result<()> {
    for (i, line) in outcome.ticket_lines.iter().enumerate() {
        writeln!(out, "Ticket line {} generated: {}", i + 1, line)?;
    }
    for (i, line) in outcome.encore_lines.iter().enumerate() {
        let kind = if i == 0 { "Automatic" } else { "Additional" };
        writeln!(out, "{kind} Encore line generated: {line}")?;
    }
    writeln!(out, "Winning numbers {}.", outcome.winning.origin)?;
    writeln!(out, "Total cost: {} CAD", outcome.cost)
}

fn print_winnings<W: Write>(out: &mut W, outcome: &PlayOutcome) -> io::Result<()> {
    writeln!(out, "\nWinning Numbers: {}", outcome.winning.line)?;
    for w in &outcome.evaluation.winners {
        writeln!(
            out,
            "Line: {} - Matches: {} - Winnings: {} CAD",
            outcome.ticket_lines[w.index], w.matches, w.payout
        )?;
    }
    if outcome.evaluation.total > 0 {
        writeln!(
            out,
            "Congratulations! You have won {} CAD!",
            outcome.evaluation.total
        )
    } else {
        writeln!(
            out,
            "Unfortunately, you did not win this time. Better luck next time!"
        )
    }
}

fn run_play(args: PlayArgs) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let server_seed = args.seed.clone().unwrap_or_else(random_server_seed);
    let validation = if args.strict {
        Validation::Strict
    } else {
        Validation::Lenient
    };
    let source = WinningLineSource::new(validation);

    writeln!(out, "Welcome to Lotto Max!")?;
    let mut nonce = 0u64;
    loop {
        nonce += 1;
        write!(out, "{}", rules::render_rules())?;

        let Some(lines) = (match args.lines {
            Some(n) => Some(n),
            None => answer(prompt::read_in_range(
                &mut input,
                &mut out,
                &format!("How many lines would you like to play? ({MIN_LINES}-{MAX_LINES}): "),
                MIN_LINES as u32,
                MAX_LINES as u32,
            ))?,
        }) else {
            break;
        };
        let Some(encore) = (match args.encore {
            Some(e) => Some(e),
            None => answer(prompt::read_in_range(
                &mut input,
                &mut out,
                "Would you like to play Encore? (0 = No, 1 = Yes): ",
                0,
                1,
            ))?
            .map(|v| v == 1),
        }) else {
            break;
        };

        let request = PlayRequest::new(lines as usize, encore)?;
        let rng = ProvablyFairRng::new(server_seed.as_str(), args.client_seed.as_str(), nonce);
        let mut draws = DrawGenerator::new(rng.clone());
        let winning_text = read_source(&args.winning_file);
        let outcome = play_session(&mut draws, &source, winning_text.as_deref(), request);
        print_session(&mut out, &outcome)?;

        let stamp = report::file_stamp(&Local::now().naive_local());
        let record = report::build_record(&outcome, &rng, Utc::now());
        let files = report::write_session(&args.out_dir, &stamp, &outcome, &record)?;
        writeln!(out, "Ticket saved to {}", files.ticket.display())?;
        writeln!(out, "Results saved to {}", files.results.display())?;
        writeln!(out, "Session record saved to {}", files.record.display())?;

        print_winnings(&mut out, &outcome)?;

        if args.once {
            break;
        }
        match answer(prompt::read_yes_no(
            &mut input,
            &mut out,
            "\nWould you like to play again? (y/n): ",
        ))? {
            Some(true) => continue,
            _ => break,
        }
    }

    writeln!(out, "\nThank you for playing Lotto Max! Good luck!")?;
    Ok(())
}

fn run_verify(path: PathBuf) -> anyhow::Result<()> {
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let record = SessionRecord::from_json(&text)?;
    let report = verify::verify_record(&record)?;
    println!(
        "seed hash: {}\ndraws: {}\ncost: {}\npayouts: {}",
        ok_str(report.seed_hash_ok),
        ok_str(report.draws_ok),
        ok_str(report.cost_ok),
        ok_str(report.payouts_ok)
    );
    if !report.passed() {
        anyhow::bail!("session {} failed verification", path.display());
    }
    println!("Session verified.");
    Ok(())
}

fn ok_str(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "MISMATCH"
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Play(cli.play)) {
        Commands::Play(args) => run_play(args),
        Commands::Rules => {
            print!("{}", rules::render_rules());
            Ok(())
        }
        Commands::Verify { path } => run_verify(path),
    }
}
