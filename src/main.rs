use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use transeval::{EvalConfig, EvalFileConfig, Evaluator, TextPair};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = load_config()?;
    let evaluator = Evaluator::new(config);

    let pairs = match env::args().nth(1) {
        Some(path) => read_pairs(&path)?,
        None => vec![TextPair::new(
            "The cat sat on the mat",
            "A cat was sitting on the mat",
        )],
    };
    info!(
        pairs = pairs.len(),
        strategy = %evaluator.similarity_strategy(),
        "evaluating"
    );

    let reports = evaluator.evaluate_batch(&pairs);

    let mut out = io::stdout().lock();
    for report in &reports {
        serde_json::to_writer(&mut out, report)?;
        writeln!(out)?;
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("TRANSEVAL_LOG_JSON").is_ok_and(|v| v == "1" || v == "true");

    // Logs go to stderr so stdout stays valid JSON lines.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config() -> anyhow::Result<EvalConfig> {
    match env::var("TRANSEVAL_CONFIG") {
        Ok(path) => {
            let config = EvalFileConfig::from_file(&path)
                .with_context(|| format!("loading config from {path}"))?;
            info!(path = %path, name = ?config.name, "loaded config");
            Ok(config.into_eval_config()?)
        }
        Err(_) => Ok(EvalConfig::default()),
    }
}

/// Reads one `{"reference": .., "hypothesis": ..}` object per non-blank line.
fn read_pairs(path: &str) -> anyhow::Result<Vec<TextPair>> {
    let file = File::open(path).with_context(|| format!("opening {path}"))?;
    let mut pairs = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let pair: TextPair = serde_json::from_str(&line)
            .with_context(|| format!("{path}:{}: invalid pair", index + 1))?;
        pairs.push(pair);
    }
    Ok(pairs)
}
