use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use rl_compactor::{MinimizeResult, MinimizerPipeline};
use rl_core::{EncodedCorpus, LiteralCorpus, RelminConfig, Split};
use rl_parser::{LiteralParser, LiteralSource};

fn input_path(config: &RelminConfig, split: Split) -> Option<&Path> {
    let path = match split {
        Split::Positive => &config.input.positive,
        Split::Negative => &config.input.negative,
        Split::Facts => &config.input.facts,
    };
    path.as_deref()
}

/// Read and parse every configured input file.
pub fn load_corpus(config: &RelminConfig, parser: &LiteralParser) -> anyhow::Result<LiteralCorpus> {
    let mut corpus = LiteralCorpus::default();
    for split in Split::ALL {
        let Some(path) = input_path(config, split) else {
            tracing::warn!(%split, "no input file given, treating as empty");
            continue;
        };
        let literals = parser
            .parse_file(path)
            .with_context(|| format!("reading {split} literals from {}", path.display()))?;
        for literal in &literals {
            tracing::debug!(%split, %literal, "parsed");
        }
        *corpus.split_mut(split) = literals;
    }
    Ok(corpus)
}

pub fn minimize(config: &RelminConfig) -> anyhow::Result<MinimizeResult> {
    let pipeline = MinimizerPipeline::new(LiteralParser::with_reader(config.reader.clone()));
    let corpus = load_corpus(config, pipeline.parser())?;
    let result = pipeline.minimize_corpus(&corpus)?;
    tracing::debug!(
        predicates = result.dictionaries.heads.len(),
        constants = result.dictionaries.args.len(),
        reduction_pct = result.reduction_pct,
        "minimized corpus"
    );
    Ok(result)
}

/// Encoded lines of every split under a `% <split>` header.
pub fn write_sections(encoded: &EncodedCorpus, out: &mut impl Write) -> std::io::Result<()> {
    for split in Split::ALL {
        writeln!(out, "% {split}")?;
        for line in encoded.split(split) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// One `<split>.txt` file per split.
pub fn write_files(encoded: &EncodedCorpus, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut written = Vec::new();
    for split in Split::ALL {
        let path = dir.join(format!("{split}.txt"));
        let mut body = encoded.split(split).join("\n");
        if !body.is_empty() {
            body.push('\n');
        }
        std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

pub fn run(config: &RelminConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let result = minimize(config)?;
    match &config.output.output_dir {
        Some(dir) => {
            for path in write_files(&result.encoded, dir)? {
                tracing::debug!(path = %path.display(), "wrote");
            }
        }
        None => write_sections(&result.encoded, out).context("writing to stdout")?,
    }
    Ok(())
}
