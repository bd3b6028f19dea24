// File: crates/demo/src/main.rs
// Summary: Demo loads ping JSON rows and renders banded latency charts to PNGs.

use anyhow::{Context, Result};
use pingband_core::dataset;
use pingband_core::theme;
use pingband_core::{CenterStat, ColumnChart, Cursor, DayTable, RenderOptions, SampleRow};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Day,
    Rolling,
}

struct Options {
    path: PathBuf,
    mode: Mode,
    theme: String,
    center: CenterStat,
    all: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    println!("Using input file: {}", args.path.display());

    let rows = load_rows(&args.path)
        .with_context(|| format!("failed to load '{}'", args.path.display()))?;
    println!("Loaded {} rows", rows.len());
    if rows.is_empty() {
        anyhow::bail!("no usable rows in '{}'", args.path.display());
    }

    let theme = theme::find(&args.theme);
    let opts = RenderOptions::default();

    match args.mode {
        Mode::Day => {
            let table = DayTable::from_rows(rows);
            let dates = table.dates();
            println!("Grouped into {} days", dates.len());

            let mut cursor = Cursor::days(dates.len());
            loop {
                let date = dates[cursor.index()];
                let day = table.day(date).context("date missing from table")?;

                let mut chart = ColumnChart::for_day(date, day).with_center(args.center);
                chart.autoscale_y(1.0);

                let frame = chart.frame(&opts, &theme);
                let out = out_name(&format!("{date}"));
                pingband_render_skia::render_to_png(&frame, &opts, &theme, &out)?;
                println!("Wrote {}", out.display());

                if !args.all || !cursor.next() {
                    break;
                }
            }
        }
        Mode::Rolling => {
            // Start at the most recent window and walk back when --all is set.
            let mut cursor = Cursor::rolling(rows.len());
            loop {
                let mut chart =
                    ColumnChart::rolling(dataset::window(&rows, cursor.index())).with_center(args.center);
                chart.autoscale_y(1.0);

                let frame = chart.frame(&opts, &theme);
                let out = out_name(&format!("window_{:05}", cursor.index()));
                pingband_render_skia::render_to_png(&frame, &opts, &theme, &out)?;
                println!("Wrote {}", out.display());

                if !args.all || !cursor.prev() {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn parse_args() -> Result<Options> {
    let mut opts = Options {
        path: PathBuf::from("ping.json"),
        mode: Mode::Day,
        theme: "light".to_string(),
        center: CenterStat::Median,
        all: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mode" => {
                let v = args.next().context("--mode needs a value: day|rolling")?;
                opts.mode = match v.as_str() {
                    "day" => Mode::Day,
                    "rolling" => Mode::Rolling,
                    other => anyhow::bail!("unknown mode '{other}' (expected day|rolling)"),
                };
            }
            "--theme" => {
                opts.theme = args.next().context("--theme needs a value")?;
            }
            "--center" => {
                let v = args.next().context("--center needs a value: median|mean")?;
                opts.center = match v.as_str() {
                    "median" => CenterStat::Median,
                    "mean" => CenterStat::Mean,
                    other => anyhow::bail!("unknown center '{other}' (expected median|mean)"),
                };
            }
            "--all" => opts.all = true,
            _ => opts.path = PathBuf::from(arg),
        }
    }
    Ok(opts)
}

/// Load and parse the JSON data file: an array of string-array rows.
/// Malformed rows are skipped (logged), matching the loader policy.
fn load_rows(path: &Path) -> Result<Vec<SampleRow>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<Vec<String>> = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;

    let mut rows = Vec::with_capacity(raw.len());
    let mut skipped = 0usize;
    for (index, fields) in raw.iter().enumerate() {
        match SampleRow::parse(fields) {
            Ok(row) => rows.push(row),
            Err(err) => {
                log::warn!("skipping row {index}: {err}");
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        log::info!("skipped {skipped} of {} rows", raw.len());
    }

    rows.sort_by_key(|r| (r.date, r.time));
    Ok(rows)
}

/// Produce an output file name like target/out/pingband_<page>.png
fn out_name(page: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("pingband_{page}.png"));
    out
}
