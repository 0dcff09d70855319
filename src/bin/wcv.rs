//! Width verifier: writes codepoints to the live terminal, measures actual
//! cursor movement, and compares it against the engine's prediction.

use std::io::{stderr, stdout, Write};
use std::ops::RangeInclusive;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::cursor::{self, MoveToColumn};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;
use crossterm::QueueableCommand;
use tracing_subscriber::EnvFilter;

use cellwidth::{
    assigned_name, blocks, parse_codepoint, parse_codepoint_range, resolve_width, sequences_for,
    set_mode, string_width, CombiningMarkWidthScope, ModeFlags, ModeOverrides, SkipFilter,
    WidthIter, WidthMode,
};

/// Verify predicted terminal cell widths against actual cursor movement.
///
/// Each CODEPOINT can be a single codepoint in decimal or hexadecimal
/// (0x... or U+...), or a range such as 0x300..0x31F. With no codepoints,
/// the full block list is scanned.
#[derive(Debug, Parser)]
#[command(name = "wcv", version)]
struct Args {
    /// Codepoints or ranges to test.
    codepoints: Vec<String>,

    /// Don't erase failed codepoints; print each result.
    #[arg(long)]
    verbose: bool,

    /// Prefix codepoint written before each test character.
    #[arg(long, value_parser = parse_codepoint)]
    prefix: Option<char>,

    /// Suffix codepoint written after each test character (default 0x20).
    #[arg(long, value_parser = parse_codepoint, default_value = "0x20")]
    suffix: char,

    /// Assume the terminal supports color emoji.
    #[arg(long, overrides_with = "no_color_emoji")]
    color_emoji: bool,
    #[arg(long, hide = true)]
    no_color_emoji: bool,

    /// Assume Full Width characters are full width (default).
    #[arg(long, overrides_with = "no_full_width")]
    full_width: bool,
    #[arg(long, hide = true)]
    no_full_width: bool,

    /// Assume only UCS-2 support (no surrogate pair rendering).
    #[arg(long, overrides_with = "no_only_ucs2")]
    only_ucs2: bool,
    #[arg(long, hide = true)]
    no_only_ucs2: bool,

    /// Assume Windows-11-era monochrome emoji and fullwidth form support.
    #[arg(long, overrides_with = "no_win11")]
    win11: bool,
    #[arg(long, hide = true)]
    no_win11: bool,

    /// Treat East Asian Ambiguous characters as wide (legacy CJK codepage).
    #[arg(long, overrides_with = "no_cjk")]
    cjk: bool,
    #[arg(long, hide = true)]
    no_cjk: bool,

    /// Assume combining marks are zero width.
    #[arg(long)]
    combining_marks_zero: bool,

    /// Show names of groups of codepoints (default).
    #[arg(long, default_value_t = true, overrides_with = "no_group_headers")]
    group_headers: bool,
    #[arg(long, hide = true)]
    no_group_headers: bool,

    /// Show expected and actual width for every character.
    #[arg(long)]
    show_width: bool,

    /// Skip testing combining marks.
    #[arg(long, overrides_with = "no_skip_combining")]
    skip_combining: bool,
    #[arg(long, hide = true)]
    no_skip_combining: bool,

    /// Skip testing emoji.
    #[arg(long, overrides_with = "no_skip_emoji")]
    skip_emoji: bool,
    #[arg(long, hide = true)]
    no_skip_emoji: bool,

    /// Skip testing East Asian Ambiguous characters.
    #[arg(long, overrides_with = "no_skip_eaa")]
    skip_eaa: bool,
    #[arg(long, hide = true)]
    no_skip_eaa: bool,

    /// Skip testing ideograph ranges (default).
    #[arg(long, overrides_with = "no_skip_ideographs")]
    skip_ideographs: bool,
    #[arg(long, hide = true)]
    no_skip_ideographs: bool,

    /// Skip testing kana ranges (default).
    #[arg(long, overrides_with = "no_skip_kana")]
    skip_kana: bool,
    #[arg(long, hide = true)]
    no_skip_kana: bool,

    /// Skip all ranges (use --no-skip-... to add specific ones back).
    #[arg(long, overrides_with = "no_skip_all")]
    skip_all: bool,
    #[arg(long, hide = true)]
    no_skip_all: bool,
}

fn tristate(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Args {
    fn mode_overrides(&self) -> ModeOverrides {
        ModeOverrides {
            color_emoji: tristate(self.color_emoji, self.no_color_emoji),
            full_width_available: tristate(self.full_width, self.no_full_width),
            only_ucs2: tristate(self.only_ucs2, self.no_only_ucs2),
            win11_mono_emoji: tristate(self.win11, self.no_win11),
            cjk_ambiguous_wide: tristate(self.cjk, self.no_cjk),
            combining_mark_width: None,
        }
    }

    fn skip_filter(&self) -> SkipFilter {
        let mut filter = SkipFilter::default();
        if let Some(all) = tristate(self.skip_all, self.no_skip_all) {
            filter.set_all(all);
        }
        let set = |slot: &mut bool, on, off| {
            if let Some(v) = tristate(on, off) {
                *slot = v;
            }
        };
        set(&mut filter.skip_combining, self.skip_combining, self.no_skip_combining);
        set(&mut filter.skip_emoji, self.skip_emoji, self.no_skip_emoji);
        set(
            &mut filter.skip_east_asian_ambiguous,
            self.skip_eaa,
            self.no_skip_eaa,
        );
        set(
            &mut filter.skip_ideographs,
            self.skip_ideographs,
            self.no_skip_ideographs,
        );
        set(&mut filter.skip_kana, self.skip_kana, self.no_skip_kana);
        filter
    }
}

/// Capability defaults detected from the environment. The engine itself
/// never probes; it only consumes these flags.
fn detect_default_mode() -> WidthMode {
    let mut flags = ModeFlags::FULL_WIDTH;
    let wt = std::env::var_os("WT_SESSION").is_some();
    let wezterm = std::env::var("TERM_PROGRAM").is_ok_and(|p| p == "WezTerm");
    if wt || wezterm {
        flags |= ModeFlags::COLOR_EMOJI;
    }
    WidthMode {
        flags,
        combining_mark_width: 0,
    }
}

/// One measurement against the live terminal.
struct Measured {
    width: i32,
    suffix_effect: bool,
}

/// Write `text` at column 0 and measure how far the cursor advanced.
fn measure(
    out: &mut impl Write,
    text: &str,
    prefix: Option<char>,
    suffix: char,
) -> Result<Measured> {
    let (col, row_before) = cursor::position().context("query cursor position")?;
    if col != 0 {
        bail!("cursor not at column 0");
    }

    let mut base = 0u16;
    if let Some(p) = prefix {
        out.queue(Print(p))?;
        out.flush()?;
        (base, _) = cursor::position().context("query cursor position")?;
    }

    out.queue(Print(text))?;
    out.flush()?;
    let (after, row_after) = cursor::position().context("query cursor position")?;
    if row_after != row_before {
        bail!("output wrapped to a new row");
    }

    let width = i32::from(after) - i32::from(base);
    if !(0..=16).contains(&width) {
        bail!("implausible cursor movement: {width}");
    }

    out.queue(Print(suffix))?;
    out.flush()?;
    let (with_suffix, _) = cursor::position().context("query cursor position")?;
    let suffix_effect = i32::from(with_suffix) != i32::from(base) + width + 1;

    Ok(Measured {
        width,
        suffix_effect,
    })
}

fn erase_line(out: &mut impl Write) -> Result<()> {
    out.queue(MoveToColumn(0))?;
    out.queue(Clear(ClearType::CurrentLine))?;
    out.flush()?;
    Ok(())
}

struct Verifier<'a> {
    args: &'a Args,
    tested: u32,
    failed: u32,
    first_failure: Option<char>,
    last_failure: char,
}

impl<'a> Verifier<'a> {
    fn new(args: &'a Args) -> Self {
        Self {
            args,
            tested: 0,
            failed: 0,
            first_failure: None,
            last_failure: '\0',
        }
    }

    /// Verify one rendered string against its expected width. Returns
    /// whether the terminal agreed.
    fn verify(&mut self, c: char, text: &str, expected: i32, label: &str) -> Result<bool> {
        let mut out = stdout();
        let measured = measure(&mut out, text, self.args.prefix, self.args.suffix)?;
        let ok = measured.width == expected && !measured.suffix_effect;
        self.tested += 1;

        if !self.args.show_width && (ok || !self.args.verbose) {
            erase_line(&mut out)?;
        } else {
            let desc = assigned_name(c).unwrap_or("");
            out.queue(Print(format!(
                "   0x{:04X}{}, width {}, expected {}    {}\n",
                c as u32, label, measured.width, expected, desc
            )))?;
            if measured.suffix_effect {
                out.queue(Print(
                    "        WARNING:  suffix codepoint affected the width after measurement\n",
                ))?;
            }
            if self.args.show_width && text.chars().count() > 1 {
                for (unit, width) in unit_widths(text) {
                    let points: Vec<String> =
                        unit.chars().map(|u| format!("0x{:04X}", u as u32)).collect();
                    out.queue(Print(format!(
                        "        unit [{}] width {}\n",
                        points.join(" "),
                        width
                    )))?;
                }
            }
            out.flush()?;
        }

        if !ok {
            self.failed += 1;
            if self.first_failure.is_none() {
                self.first_failure = Some(c);
            }
            self.last_failure = c;
        }
        Ok(ok)
    }

    /// Report and clear any open run of consecutive failures.
    fn flush_failure_range(&mut self) -> Result<()> {
        let Some(first) = self.first_failure.take() else {
            return Ok(());
        };
        let last = self.last_failure;
        let count = last as u32 + 1 - first as u32;
        let mut err = stderr();
        err.queue(SetForegroundColor(Color::Red))?;
        err.queue(Print(format!(
            "FAILED:  0x{:04X}..0x{:04X} do not match the expected width ({count} codepoints).",
            first as u32, last as u32
        )))?;
        err.queue(ResetColor)?;
        err.queue(Print("\n"))?;
        err.flush()?;
        Ok(())
    }

    fn run_range(&mut self, range: &RangeInclusive<char>, filter: &SkipFilter) -> Result<()> {
        let single = range.start() == range.end();
        for c in range.clone() {
            if !single && filter.is_skip(c) {
                self.flush_failure_range()?;
                continue;
            }

            let assigned = assigned_name(c).is_some();
            if !assigned && !single {
                self.flush_failure_range()?;
                continue;
            }
            if !assigned && single {
                println!("NOTE:  0x{:04X} is not an assigned codepoint.", c as u32);
            }

            // Control characters cannot be measured in a cell.
            if resolve_width(c) < 0 {
                self.flush_failure_range()?;
                continue;
            }

            let mut all_ok = true;
            let sequences = sequences_for(c);
            if sequences.is_empty() {
                let mut buf = [0u8; 4];
                let text: &str = c.encode_utf8(&mut buf);
                let expected = i32::from(resolve_width(c));
                all_ok = self.verify(c, text, expected, "")?;
            } else {
                for (n, entry) in sequences.iter().enumerate() {
                    let expected = string_width(entry.sequence)
                        .map(|w| w as i32)
                        .unwrap_or(-1);
                    let label = format!(" sequence {n}");
                    if !self.verify(c, entry.sequence, expected, &label)? {
                        all_ok = false;
                    }
                }
            }

            if all_ok {
                self.flush_failure_range()?;
            }
        }
        self.flush_failure_range()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(stderr)
        .init();

    let args = Args::parse();

    if !stdout().is_tty() {
        bail!("not compatible with redirected output");
    }

    set_mode(args.mode_overrides().apply(detect_default_mode()));

    // The tool defaults to analyzing combining marks at width 1; the
    // engine's zero-width default hides advance bugs the probe looks for.
    let _cmw = CombiningMarkWidthScope::new(if args.combining_marks_zero { 0 } else { 1 });

    let manual: Vec<RangeInclusive<char>> = args
        .codepoints
        .iter()
        .map(|text| parse_codepoint_range(text).with_context(|| format!("parse '{text}'")))
        .collect::<Result<_>>()?;

    let filter = args.skip_filter();
    let began = Instant::now();
    let mut verifier = Verifier::new(&args);

    if manual.is_empty() {
        for block in blocks() {
            if filter.skip_ideographs && block.name.contains("Ideograph") {
                continue;
            }
            let range = char::from_u32(block.first).zip(char::from_u32(block.last));
            let Some((first, last)) = range else {
                continue;
            };
            if args.group_headers && !args.no_group_headers {
                println!(
                    "0x{:04X} .. 0x{:04X} -- {}",
                    block.first, block.last, block.name
                );
            }
            verifier.run_range(&(first..=last), &filter)?;
        }
    } else {
        for range in &manual {
            if args.group_headers && !args.no_group_headers && range.start() != range.end() {
                println!(
                    "0x{:04X} .. 0x{:04X}",
                    *range.start() as u32,
                    *range.end() as u32
                );
            } else if range.start() == range.end() {
                println!("CODEPOINT 0x{:04X}", *range.start() as u32);
            }
            verifier.run_range(range, &filter)?;
        }
    }

    let elapsed = began.elapsed();
    let ratio = if verifier.tested > 0 {
        f64::from(verifier.failed) / f64::from(verifier.tested)
    } else {
        0.0
    };
    let color = if verifier.failed == 0 {
        Color::Green
    } else if verifier.failed > 200 || ratio > 0.01 {
        Color::Red
    } else {
        Color::Yellow
    };

    let mut out = stdout();
    out.queue(Print(format!(
        "\nTested {} codepoints in {:.3} seconds; ",
        verifier.tested,
        elapsed.as_secs_f64()
    )))?;
    out.queue(SetForegroundColor(color))?;
    out.queue(Print(format!("{}", verifier.failed)))?;
    out.queue(ResetColor)?;
    out.queue(Print(" failed.\n"))?;
    out.flush()?;

    if verifier.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Per-unit breakdown of a multi-codepoint sequence for --show-width.
fn unit_widths(text: &str) -> Vec<(String, i8)> {
    let mut it = WidthIter::new(text);
    let mut units = Vec::new();
    while it.next().is_some() {
        units.push((it.unit_str().to_string(), it.unit_width_signed()));
    }
    units
}
