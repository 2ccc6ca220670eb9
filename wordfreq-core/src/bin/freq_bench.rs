//! Word-Frequency Benchmarking Tool
//!
//! Measures each stage of the pipeline on a large text file, then prints the
//! most frequent tokens so the numbers can be sanity-checked.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: lowercase + trim
//! 2. **Strip**: punctuation removal over normalized text
//! 3. **Tokenize**: whitespace splitting over stripped text
//! 4. **Pipeline**: the full run, counting and ranking included
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/freq_bench /path/to/corpus.txt
//! ./target/release/freq_bench /path/to/corpus.txt --top 25 --no-stop-words
//! RUST_LOG=wordfreq_core=debug ./target/release/freq_bench corpus.txt
//! ```
//!
//! ## Example Output
//!
//! ```text
//! --------------------------------
//! Mode        : Pipeline
//! Elapsed     : 0.452 s
//! Throughput  : 0.218 GiB/s
//! Tokens      : 15_489_234
//! Tokens/sec  : 34_265_478
//! --------------------------------
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wordfreq_core::analyzer::{PunctuationStripper, TextNormalizer, Tokenizer};
use wordfreq_core::{Configuration, InputError, Pipeline};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "freq_bench", about = "Benchmark the word-frequency pipeline")]
struct Args {
    /// UTF-8 text file to analyze
    path: PathBuf,

    /// Number of ranked tokens to print
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Count stop words instead of dropping them
    #[arg(long)]
    no_stop_words: bool,
}

fn main() -> Result<()> {
    setup_logging();
    let args = Args::parse();

    let config = if args.no_stop_words {
        Configuration::without_stop_words()
    } else {
        Configuration::default()
    };

    let bytes = fs::read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let input = std::str::from_utf8(&bytes)
        .map_err(InputError::from)
        .with_context(|| format!("{} is not a text file", args.path.display()))?;

    info!(path = %args.path.display(), bytes = input.len(), "loaded input");
    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    let normalized = bench_normalize(input);
    let stripped = bench_strip(&normalized, &config);
    bench_tokenize(&stripped);
    bench_pipeline(input, &config, args.top);

    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .ok();
}

fn bench_normalize(input: &str) -> String {
    let normalizer = TextNormalizer::new();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| normalizer.normalize_into(input, &mut out));
    let elapsed = measure(|| normalizer.normalize_into(input, &mut out));

    print_perf("Normalize", input.len(), elapsed, 0);
    out
}

fn bench_strip(normalized: &str, config: &Configuration) -> String {
    let stripper = PunctuationStripper::new(config.punctuation());
    let mut out = String::with_capacity(normalized.len());

    println!("=== Strip ===");

    warmup(|| stripper.strip_into(normalized, &mut out));
    let elapsed = measure(|| stripper.strip_into(normalized, &mut out));

    print_perf("Strip", normalized.len(), elapsed, 0);
    out
}

fn bench_tokenize(stripped: &str) {
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(stripped, |_t, _p| sink += 1);
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(stripped, |_t, _p| local += 1);
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", stripped.len(), elapsed, tokens);
}

fn bench_pipeline(input: &str, config: &Configuration, top: usize) {
    let pipeline = Pipeline::new(config);

    println!("=== Pipeline ({}) ===", pipeline.stage_names().join(" -> "));

    warmup(|| {
        std::hint::black_box(pipeline.run(input, Some(top)));
    });

    let elapsed = measure(|| {
        std::hint::black_box(pipeline.run(input, Some(top)));
    });

    let table = pipeline.count(input);
    let stats = table.stats();
    print_perf("Pipeline", input.len(), elapsed, stats.total_tokens as u64);
    println!("Counted     : {}\n", stats);

    println!("=== Top {} ===", top);
    for (rank, entry) in pipeline.run(input, Some(top)).iter().enumerate() {
        println!("{:>4}. {:<20} {}", rank + 1, entry.token, fmt_count(entry.count as u64));
    }
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64().max(f64::EPSILON);
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
