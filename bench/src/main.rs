use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use serde_json::json;

#[derive(Clone, Debug)]
struct BenchArgs {
    lines: usize,
    samples: usize,
    warmup: u32,
    repeats: u32,
    svg: bool,
    report: Option<PathBuf>,
}

#[derive(Clone, Debug, Default)]
struct RunMetrics {
    uncached: Duration,
    session: Duration,
    svg: Duration,
    points: usize,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;
    if args.lines == 0 || args.samples == 0 {
        anyhow::bail!("--lines and --samples must be > 0");
    }

    let (lines, shading) = build_scene(args.lines);
    let viewport = graphcalc::Viewport::default();
    let mut session = graphcalc::GraphSession::default();

    eprintln!(
        "scene: {} line(s), {} shading request(s), {} samples",
        lines.len(),
        shading.len(),
        args.samples
    );
    if args.warmup > 0 {
        eprintln!("warmup: {} run(s)", args.warmup);
    }

    let mut runs = Vec::with_capacity(args.repeats as usize);
    for i in 0..(args.warmup + args.repeats) {
        let input = graphcalc::RenderInput {
            lines: lines.clone(),
            shading: shading.clone(),
            viewport,
            sample_count: args.samples,
            recompute_token: u64::from(i),
        };
        let m = run_once(&args, &input, &mut session)?;
        if i >= args.warmup {
            runs.push(m);
        }
    }

    report_percentiles(&runs);

    let stats = session.stats();
    eprintln!(
        "\nexpression cache: {} hit(s), {} miss(es)",
        stats.expression_hits, stats.expression_misses
    );

    if let Some(path) = &args.report {
        let summary = json!({
            "lines": args.lines,
            "samples": args.samples,
            "repeats": args.repeats,
            "points": runs.first().map_or(0, |m| m.points),
            "uncached_p50_ms": p(&collect(&runs, |m| m.uncached), 0.50).as_secs_f64() * 1000.0,
            "session_p50_ms": p(&collect(&runs, |m| m.session), 0.50).as_secs_f64() * 1000.0,
            "expression_hits": stats.expression_hits,
            "expression_misses": stats.expression_misses,
        });
        std::fs::write(path, serde_json::to_string_pretty(&summary)?)
            .with_context(|| format!("write report '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn build_scene(n: usize) -> (Vec<graphcalc::Line>, Vec<graphcalc::Shading>) {
    const EXPRS: [&str; 6] = [
        "sin(x) * x / 3",
        "x^3/50 - x",
        "1/(x-1)",
        "sqrt(abs(x)) * sign(x)",
        "y <= cos(x) + 2",
        "exp(-x^2/8) * 5",
    ];
    let mut lines = Vec::with_capacity(n);
    for i in 0..n {
        let id = format!("l{i}");
        let line = match i % 8 {
            6 => graphcalc::Line::parametric(id, "4cos(t)", "3sin(2t)"),
            7 => graphcalc::Line::polar(id, "2 + 2cos(5t)"),
            k => graphcalc::Line::cartesian(id, EXPRS[k % EXPRS.len()]),
        };
        lines.push(line.with_style(graphcalc::LineStyle::palette(i)));
    }
    let shading = if n >= 2 {
        vec![graphcalc::Shading::between("band", "l0", "l1", "#22c55e", 0.2)]
    } else {
        Vec::new()
    };
    (lines, shading)
}

fn run_once(
    args: &BenchArgs,
    input: &graphcalc::RenderInput,
    session: &mut graphcalc::GraphSession,
) -> anyhow::Result<RunMetrics> {
    let mut m = RunMetrics::default();

    let t = Instant::now();
    let data = graphcalc::build_render_data(
        &input.lines,
        &input.shading,
        &input.viewport,
        input.sample_count,
    );
    m.uncached = t.elapsed();
    m.points = data.point_count();

    let t = Instant::now();
    let cached = session.render(input);
    m.session = t.elapsed();
    if *cached != data {
        anyhow::bail!("session output diverged from the pure pipeline");
    }

    if args.svg {
        let t = Instant::now();
        let svg = graphcalc::to_svg(&data, &input.viewport, &graphcalc::SvgOptions::default())?;
        m.svg = t.elapsed();
        std::hint::black_box(svg);
    }
    Ok(m)
}

fn collect(runs: &[RunMetrics], f: fn(&RunMetrics) -> Duration) -> Vec<Duration> {
    let mut v = runs.iter().map(f).collect::<Vec<_>>();
    v.sort_by_key(|d| d.as_nanos());
    v
}

fn p(v: &[Duration], p: f64) -> Duration {
    if v.is_empty() {
        return Duration::ZERO;
    }
    let n = v.len();
    let rank = (p * (n as f64)).ceil().clamp(1.0, n as f64) as usize;
    v[rank - 1]
}

fn report_percentiles(runs: &[RunMetrics]) {
    type Getter = fn(&RunMetrics) -> Duration;
    type Field = (&'static str, Getter);

    fn fmt_ms(d: Duration) -> String {
        format!("{:.3}ms", d.as_secs_f64() * 1000.0)
    }

    let fields: &[Field] = &[
        ("uncached", |m| m.uncached),
        ("session", |m| m.session),
        ("svg", |m| m.svg),
    ];

    eprintln!("\npercentiles across runs (p50/p90/p99):");
    for (name, getter) in fields {
        let v = collect(runs, *getter);
        eprintln!(
            "  {name:10} p50={p50:>10}  p90={p90:>10}  p99={p99:>10}",
            name = *name,
            p50 = fmt_ms(p(&v, 0.50)),
            p90 = fmt_ms(p(&v, 0.90)),
            p99 = fmt_ms(p(&v, 0.99))
        );
    }
}

fn print_help() {
    eprintln!(
        r#"graphcalc-bench

Samples a synthetic graph repeatedly and reports p50/p90/p99 per stage.

Usage:
  cargo run -q
  cargo run -q -- --lines 32 --samples 2000 --repeats 200

Args:
  --lines N       (default 16)
  --samples N     (default 400)
  --warmup N      (default 2)
  --repeats N     (default 100)
  --svg           also time SVG export
  --report PATH   write a JSON summary
"#
    );
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);
    let mut out = BenchArgs {
        lines: 16,
        samples: 400,
        warmup: 2,
        repeats: 100,
        svg: false,
        report: None,
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--lines" => out.lines = parse_usize(args.next(), "--lines")?,
            "--samples" => out.samples = parse_usize(args.next(), "--samples")?,
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--svg" => out.svg = true,
            "--report" => {
                out.report = Some(PathBuf::from(args.next().ok_or_else(|| {
                    anyhow::anyhow!("missing value for --report (expected a path)")
                })?))
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }
    Ok(out)
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn parse_usize(v: Option<String>, flag: &str) -> anyhow::Result<usize> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<usize>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}
