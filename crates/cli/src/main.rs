use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cones::cfg::MAX_RESOLUTION_BITS;
use cones::prelude::*;
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser, Debug)]
#[command(name = "compute_cones")]
#[command(about = "Boundary directions of equal cones around a point")]
struct Cmd {
    /// Number of cones, at least 2
    #[arg(allow_negative_numbers = true)]
    cone_number: i64,

    /// Initial direction, x component
    #[arg(allow_negative_numbers = true, requires = "dy")]
    dx: Option<f64>,

    /// Initial direction, y component
    #[arg(allow_negative_numbers = true)]
    dy: Option<f64>,

    #[arg(long, default_value_t = Strategy::Exact)]
    strategy: Strategy,

    /// Print a JSON array of [dx, dy] pairs instead of text
    #[arg(long)]
    json: bool,

    /// Also write the JSON array here, with a provenance sidecar
    #[arg(long)]
    out: Option<PathBuf>,

    /// Root refinement for the exact strategy, in bits
    #[arg(
        long,
        default_value_t = SturmCfg::default().resolution_bits,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_RESOLUTION_BITS))
    )]
    resolution_bits: u32,
}

/// Arguments after range checks.
#[derive(Debug)]
struct Request {
    cone_number: u32,
    initial: Direction2<f64>,
}

impl Cmd {
    fn request(&self) -> Result<Request, String> {
        let cone_number = u32::try_from(self.cone_number)
            .ok()
            .filter(|&n| n >= 2)
            .ok_or_else(|| format!("cone number must be at least 2, got {}", self.cone_number))?;
        let (dx, dy) = self.dx.zip(self.dy).unwrap_or((1.0, 0.0));
        if !dx.is_finite() || !dy.is_finite() {
            return Err(format!("direction ({dx}, {dy}) is not finite"));
        }
        let initial = Direction2::try_new(dx, dy)
            .ok_or_else(|| "initial direction must be non-zero".to_string())?;
        Ok(Request {
            cone_number,
            initial,
        })
    }

    fn computer(&self) -> ConeBoundaryComputer {
        match self.strategy {
            Strategy::Exact => {
                let cfg = SturmCfg::with_resolution_bits(self.resolution_bits);
                ConeBoundaryComputer::exact_with(cfg)
            }
            Strategy::Approximate => ConeBoundaryComputer::new(Strategy::Approximate),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = match Cmd::try_parse() {
        Ok(cmd) => cmd,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{e}");
            std::process::exit(1);
        }
    };
    let req = match cmd.request() {
        Ok(req) => req,
        Err(msg) => usage_exit(&msg),
    };
    run(&cmd, &req)
}

fn usage_exit(msg: &str) -> ! {
    eprintln!("error: {msg}");
    eprintln!("{}", Cmd::command().render_usage());
    std::process::exit(1);
}

fn run(cmd: &Cmd, req: &Request) -> Result<()> {
    tracing::info!(
        cone_number = req.cone_number,
        strategy = %cmd.strategy,
        initial = %req.initial,
        "compute"
    );
    let set = cmd
        .computer()
        .compute(req.cone_number, &req.initial)
        .with_context(|| format!("computing {} cone boundaries", req.cone_number))?;

    let pairs = as_pairs(&set);
    let mut stdout = io::stdout().lock();
    if cmd.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&pairs)?)?;
    } else {
        write_rays(&mut stdout, &set)?;
    }

    if let Some(out) = &cmd.out {
        let params = json!({
            "cone_number": req.cone_number,
            "initial": [req.initial.dx(), req.initial.dy()],
            "strategy": cmd.strategy.to_string(),
            "resolution_bits": cmd.resolution_bits,
        });
        let sidecar = provenance::write_with_sidecar(out, &pairs, provenance::Payload::new(params))?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
    }
    Ok(())
}

fn as_pairs(set: &ConeSet<f64>) -> Vec<[f64; 2]> {
    set.iter().map(|d| [*d.dx(), *d.dy()]).collect()
}

fn write_rays<W: Write>(w: &mut W, set: &ConeSet<f64>) -> io::Result<()> {
    for (i, d) in set.iter().enumerate() {
        writeln!(w, "Ray {i}: {d}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cmd, clap::Error> {
        Cmd::try_parse_from(std::iter::once("compute_cones").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn defaults_to_exact_along_x() {
        let cmd = parse(&["4"]).unwrap();
        assert_eq!(cmd.strategy, Strategy::Exact);
        assert!(!cmd.json);
        let req = cmd.request().unwrap();
        assert_eq!(req.cone_number, 4);
        assert_eq!(req.initial, Direction2::new(1.0, 0.0));
    }

    #[test]
    fn accepts_negative_direction_and_strategy() {
        let cmd = parse(&["5", "-1", "-0.5", "--strategy", "approximate", "--json"]).unwrap();
        assert_eq!(cmd.strategy, Strategy::Approximate);
        assert!(cmd.json);
        let req = cmd.request().unwrap();
        assert_eq!(req.initial, Direction2::new(-1.0, -0.5));
        assert_eq!(cmd.computer().strategy(), Strategy::Approximate);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["four"]).is_err());
        assert!(parse(&["4", "1.0"]).is_err());
        assert!(parse(&["4", "--strategy", "fuzzy"]).is_err());
        assert!(parse(&["1"]).unwrap().request().is_err());
        assert!(parse(&["-3"]).unwrap().request().is_err());
        assert!(parse(&["4", "0", "0"]).unwrap().request().is_err());
        assert!(parse(&["4", "nan", "1"]).unwrap().request().is_err());
    }

    #[test]
    fn resolution_bits_are_range_checked() {
        let cmd = parse(&["6", "--resolution-bits", "128"]).unwrap();
        assert_eq!(cmd.resolution_bits, 128);
        assert!(cmd.computer().compute(6, &Direction2::new(1.0, 0.0)).is_ok());
        for bad in ["0", "1025", "4000000000", "-5"] {
            assert!(parse(&["6", "--resolution-bits", bad]).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn help_is_not_a_usage_error() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn prints_one_line_per_ray() {
        let set = ConeBoundaryComputer::new(Strategy::Exact)
            .compute(4, &Direction2::new(1.0, 0.0))
            .unwrap();
        let mut buf = Vec::new();
        write_rays(&mut buf, &set).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Ray 0: (1, 0)");
        assert!(lines[3].starts_with("Ray 3: ("));
        assert_eq!(as_pairs(&set)[2], [-1.0, 0.0]);
    }

    #[test]
    fn out_flag_writes_pairs_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("rays.json");
        let out_arg = out.to_string_lossy().into_owned();
        let cmd = parse(&["3", "--out", &out_arg, "--strategy", "approx"]).unwrap();
        let req = cmd.request().unwrap();
        run(&cmd, &req).unwrap();
        let pairs: Vec<[f64; 2]> =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], [1.0, 0.0]);
        assert!(dir.path().join("rays.provenance.json").exists());
    }
}
