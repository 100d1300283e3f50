//! Subcommand bodies. Each returns a `Result`; `main` maps errors to the
//! exit status.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use cardswap_ingress::{TeamLoader, convert_list};
use cardswap_matchcore::SwapEngine;
use cardswap_settlement::{SwapConservation, SwapReport};
use cardswap_types::{CardswapError, Result, SwapConfig};

use crate::cli::OutputFormat;

/// Options for one `swap` run.
#[derive(Debug, Clone)]
pub struct SwapOptions<'a> {
    pub dir: &'a Path,
    pub config: Option<&'a Path>,
    pub max_distance: Option<usize>,
    pub format: OutputFormat,
    pub strict: bool,
}

/// File config first, then command-line overrides.
pub fn resolve_config(file: Option<&Path>, max_distance: Option<usize>) -> Result<SwapConfig> {
    let mut config = match file {
        Some(path) => SwapConfig::from_file(path)?,
        None => SwapConfig::default(),
    };
    if let Some(distance) = max_distance {
        config = config.with_distance(distance);
    }
    config.validate()?;
    Ok(config)
}

/// Load, allocate, check and write the report to `out`.
pub fn swap<W: Write>(opts: &SwapOptions<'_>, out: W) -> Result<SwapReport> {
    let config = resolve_config(opts.config, opts.max_distance)?;
    let engine = SwapEngine::new(config.clone())?;

    let team = TeamLoader::new(opts.dir, config).load()?;
    if team.roster.is_empty() {
        return Err(CardswapError::EmptyRoster);
    }

    let result = engine.run(team.roster)?;
    SwapConservation::verify_result(&result)?;

    let report = SwapReport::build(&result)?;
    if let Some(mismatch) = report.mismatches.first().filter(|_| opts.strict) {
        return Err(mismatch.to_error());
    }

    match opts.format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => report.write_json(out)?,
    }
    Ok(report)
}

pub fn convert<R: BufRead, W: Write>(input: R, out: W) -> Result<()> {
    let written = convert_list(input, out)?;
    tracing::info!(codes = written, "Converted list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn team_dir() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        let files = [
            ("team.txt", "ann\nbob\n"),
            ("ann-offered.txt", "x1\n"),
            ("ann-wanted.txt", "y1\n"),
            ("bob-offered.txt", "y1\n"),
            ("bob-wanted.txt", "x1\n"),
        ];
        for (name, body) in files {
            fs::write(tmp.path().join(name), body).unwrap();
        }
        tmp
    }

    fn opts(dir: &Path) -> SwapOptions<'_> {
        SwapOptions {
            dir,
            config: None,
            max_distance: None,
            format: OutputFormat::Text,
            strict: true,
        }
    }

    #[test]
    fn swap_prints_text_report() {
        let tmp = team_dir();
        let mut out = Vec::new();
        let report = swap(&opts(tmp.path()), &mut out).unwrap();
        assert!(report.is_balanced());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("bob\tY1\tann\tN"));
        assert!(text.contains("ann\tX1\tY1\tN"));
    }

    #[test]
    fn swap_prints_json_report() {
        let tmp = team_dir();
        let mut out = Vec::new();
        let options = SwapOptions {
            format: OutputFormat::Json,
            ..opts(tmp.path())
        };
        swap(&options, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["exchange"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn missing_directory_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let err = swap(&opts(&tmp.path().join("nope")), Vec::new()).unwrap_err();
        assert!(matches!(err, CardswapError::RosterUnreadable { .. }));
    }

    #[test]
    fn roster_without_offers_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("team.txt"), "ghost\n").unwrap();
        let err = swap(&opts(tmp.path()), Vec::new()).unwrap_err();
        assert!(matches!(err, CardswapError::EmptyRoster));
    }

    #[test]
    fn config_file_then_override() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cardswap.toml");
        fs::write(&path, "max_award_contribution_distance = 3\n").unwrap();

        let config = resolve_config(Some(&path), None).unwrap();
        assert_eq!(config.max_award_contribution_distance, 3);
        let config = resolve_config(Some(&path), Some(2)).unwrap();
        assert_eq!(config.max_award_contribution_distance, 2);

        let err = resolve_config(None, Some(0)).unwrap_err();
        assert!(matches!(err, CardswapError::InvalidDistance { .. }));
    }

    #[test]
    fn convert_expands_stdin() {
        let mut out = Vec::new();
        convert("ab:1, 2\n".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "AB1\nAB2\n");
    }
}
