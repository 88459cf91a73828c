//! CLI front end: reads a sites file, runs the sweep, prints segments,
//! vertices, and the largest empty circle(s).

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fortune_voronoi::Voronoi;
use log::{debug, info};

/// Build a planar Voronoi diagram from a file of sites and print its
/// segments, vertices, and largest empty circle(s).
#[derive(Parser, Debug)]
#[command(name = "fortune_voronoi", version, about)]
struct Args {
    /// Path to a file with one "x y" pair per line.
    sites: PathBuf,

    /// Nudge each site's y by a tiny, index-dependent amount to break exact
    /// cocircularity/collinearity ties before processing.
    #[arg(long)]
    perturb: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_sites(contents: &str) -> Result<Vec<(f64, f64)>, String> {
    let mut sites = Vec::new();
    for (lineno, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let x = fields
            .next()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| format!("line {}: expected \"x y\", got {:?}", lineno + 1, line))?;
        let y = fields
            .next()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| format!("line {}: expected \"x y\", got {:?}", lineno + 1, line))?;
        if fields.next().is_some() {
            return Err(format!("line {}: too many fields: {:?}", lineno + 1, line));
        }
        sites.push((x, y));
    }
    Ok(sites)
}

/// Sub-pixel y-perturbation matching the collaborating GUI's practice
/// of nudging each point by `1e-9 * k` for a small per-point `k`, to break
/// exact cocircularity or collinearity before the sweep runs.
fn perturb(sites: &mut [(f64, f64)]) {
    for (index, site) in sites.iter_mut().enumerate() {
        let k = (index % 7 + 1) as f64;
        site.1 += 1e-9 * k;
    }
}

fn run(args: Args) -> Result<(), String> {
    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    let contents =
        fs::read_to_string(&args.sites).map_err(|e| format!("reading {:?}: {e}", args.sites))?;
    let mut sites = parse_sites(&contents)?;
    info!("loaded {} sites from {:?}", sites.len(), args.sites);

    if args.perturb {
        debug!("applying sub-pixel y-perturbation");
        perturb(&mut sites);
    }

    let mut voronoi = Voronoi::new(&sites).map_err(|e| e.to_string())?;
    voronoi.process().map_err(|e| e.to_string())?;

    for (x1, y1, x2, y2) in voronoi.get_segments() {
        println!("{x1} {y1} {x2} {y2}");
    }
    println!();
    for (x, y) in voronoi.get_voronoi_vertices() {
        println!("{x} {y}");
    }
    println!();
    for (cx, cy, r) in voronoi.find_largest_empty_circle() {
        println!("{cx} {cy} {r}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("fortune_voronoi: {message}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_separated_pairs() {
        let sites = parse_sites("100 100\n400 100\n250 400\n").unwrap();
        assert_eq!(sites, vec![(100.0, 100.0), (400.0, 100.0), (250.0, 400.0)]);
    }

    #[test]
    fn skips_blank_lines() {
        let sites = parse_sites("1 2\n\n3 4\n").unwrap();
        assert_eq!(sites, vec![(1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn skips_comment_lines() {
        let sites = parse_sites("# sites\n1 2\n# another comment\n3 4\n").unwrap();
        assert_eq!(sites, vec![(1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_sites("1 2 3\n").is_err());
        assert!(parse_sites("abc def\n").is_err());
    }
}
