//! Interactive command shell
//!
//! Reads one command per line and writes answers to any `Write` sink, so
//! tests drive it with in-memory buffers.
//!
//! ```text
//! check <citizen_id> <virus>   status of one citizen
//! list <virus>                 vaccinated citizens in id order
//! levels <virus>               per-level dump of the ordered index
//! stats                        registry counters
//! exit                         leave (end of input works too)
//! ```

use std::io::{self, BufRead, Write};

use vr_03_category_index::{LookupOutcome, RegistryError, VaccinationRegistryApi};

pub const PROMPT: &str = "\n> ";
pub const VIRUS_NOT_FOUND: &str = "Virus not found";
pub const NOT_VACCINATED: &str = "NOT VACCINATED";
pub const MAYBE: &str = "MAYBE (False positive from Bloom Filter)";
pub const UNKNOWN_COMMAND: &str = "Unknown command";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Check { citizen_id: &'a str, virus: &'a str },
    List { virus: &'a str },
    Levels { virus: &'a str },
    Stats,
    Exit,
    /// Blank line
    Empty,
    /// Known command with the wrong number of arguments
    Usage(&'static str),
    Unknown,
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words[..] {
            [] => Command::Empty,
            ["check", citizen_id, virus] => Command::Check { citizen_id, virus },
            ["check", ..] => Command::Usage("check <citizen_id> <virus>"),
            ["list", virus] => Command::List { virus },
            ["list", ..] => Command::Usage("list <virus>"),
            ["levels", virus] => Command::Levels { virus },
            ["levels", ..] => Command::Usage("levels <virus>"),
            ["stats"] => Command::Stats,
            ["exit"] => Command::Exit,
            _ => Command::Unknown,
        }
    }
}

/// Write the command summary shown at startup
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nVaccination Records Management System")?;
    writeln!(out, "\nCommands:")?;
    writeln!(out, "\tcheck <citizen_id> <virus>")?;
    writeln!(out, "\tlist <virus>")?;
    writeln!(out, "\tlevels <virus>")?;
    writeln!(out, "\tstats")?;
    writeln!(out, "\texit")
}

/// Run commands from `input` until `exit` or end of input
pub fn run<R, W, A>(input: R, mut out: W, registry: &A) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    A: VaccinationRegistryApi + ?Sized,
{
    print_banner(&mut out)?;
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if execute(Command::parse(&line), &mut out, registry)?.is_break() {
            break;
        }
    }
    out.flush()
}

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Break,
}

impl Flow {
    pub fn is_break(self) -> bool {
        self == Flow::Break
    }
}

/// Answer one command
pub fn execute<W, A>(command: Command<'_>, out: &mut W, registry: &A) -> io::Result<Flow>
where
    W: Write,
    A: VaccinationRegistryApi + ?Sized,
{
    match command {
        Command::Check { citizen_id, virus } => match registry.check_status(citizen_id, virus) {
            Ok(LookupOutcome::Found(record)) => writeln!(out, "{}", record)?,
            Ok(LookupOutcome::FalsePositive) => writeln!(out, "{}", MAYBE)?,
            Ok(LookupOutcome::NotFound) => writeln!(out, "{}", NOT_VACCINATED)?,
            Err(err) => report(out, err)?,
        },
        Command::List { virus } => match registry.list_vaccinated(virus) {
            Ok(records) => {
                for record in records {
                    writeln!(out, "{}", record)?;
                }
            }
            Err(err) => report(out, err)?,
        },
        Command::Levels { virus } => match registry.category_index(virus) {
            Ok(category) => write!(out, "{}", category.index().structure())?,
            Err(err) => report(out, err)?,
        },
        Command::Stats => print_stats(out, registry)?,
        Command::Exit => return Ok(Flow::Break),
        Command::Empty => {}
        Command::Usage(usage) => writeln!(out, "Usage: {}", usage)?,
        Command::Unknown => writeln!(out, "{}", UNKNOWN_COMMAND)?,
    }
    Ok(Flow::Continue)
}

fn report<W: Write>(out: &mut W, err: RegistryError) -> io::Result<()> {
    match err {
        RegistryError::UnknownCategory(_) => writeln!(out, "{}", VIRUS_NOT_FOUND),
        other => writeln!(out, "Error: {}", other),
    }
}

fn print_stats<W, A>(out: &mut W, registry: &A) -> io::Result<()>
where
    W: Write,
    A: VaccinationRegistryApi + ?Sized,
{
    let snapshot = registry.metrics_snapshot();
    writeln!(out, "Records indexed:      {}", snapshot.records_indexed)?;
    writeln!(out, "Records skipped:      {}", snapshot.records_skipped)?;
    writeln!(out, "Duplicates rejected:  {}", snapshot.duplicates_rejected)?;
    writeln!(out, "Lookups:              {}", snapshot.lookups_performed)?;
    writeln!(out, "  rejected by filter: {}", snapshot.lookups_rejected)?;
    writeln!(out, "  found:              {}", snapshot.lookups_found)?;
    writeln!(out, "  false positives:    {}", snapshot.false_positives)?;
    writeln!(
        out,
        "Observed FP rate:     {:.2}%",
        snapshot.observed_false_positive_rate * 100.0
    )?;

    for name in registry.category_names() {
        if let Ok(category) = registry.category_index(name) {
            let filter = category.filter();
            writeln!(
                out,
                "{}: {} records, {}/{} bits set, estimated FP rate {:.4}%",
                name,
                category.len(),
                filter.bits_set(),
                filter.size_bits(),
                category.estimated_false_positive_rate() * 100.0
            )?;
        }
    }
    Ok(())
}
