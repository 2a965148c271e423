//! Parsing of the docking engine's textual score report.
//!
//! The engine prints a human-oriented table on stdout: a header, a divider
//! line, then one row per binding mode. Only the divider is a stable anchor
//! across engine versions, so parsing starts there and accepts exactly the
//! lines shaped like score rows, ignoring the progress chatter the engine
//! interleaves around the table.

use crate::dock::error::Error;

/// Substring that identifies the table divider line.
const DIVIDER: &str = "---+--";

/// One row of the engine's score table, in table column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    /// Binding mode rank as reported by the engine, 1-based.
    pub mode: f64,
    /// Predicted binding affinity in kcal/mol (more negative is better).
    pub affinity: f64,
    /// RMSD to the best mode, upper bound.
    pub rmsd_ub: f64,
    /// RMSD to the best mode, lower bound.
    pub rmsd_lb: f64,
}

/// Score rows in the order the engine reported them (best mode first).
pub type ScoreTable = Vec<ScoreRow>;

/// Extracts the score table from the engine's stdout.
///
/// Lines before the divider are ignored. After the divider, a line is taken as
/// a score row exactly when it splits into four whitespace-separated numeric
/// tokens; anything else (blank lines, "Writing output" chatter) is skipped.
///
/// # Errors
///
/// [`Error::UnrecognizedOutput`] when no divider line is present, which means
/// the engine produced something other than a score report.
/// [`Error::CorruptScoreRow`] when an accepted row fails numeric conversion.
pub fn parse_scores(stdout: &str) -> Result<ScoreTable, Error> {
    let mut lines = stdout.lines();

    if !lines.any(|line| line.contains(DIVIDER)) {
        return Err(Error::UnrecognizedOutput);
    }

    let mut table = Vec::new();
    for line in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 4 || !tokens.iter().all(|t| is_numeric_token(t)) {
            continue;
        }
        table.push(parse_row(line, &tokens)?);
    }

    Ok(table)
}

fn parse_row(line: &str, tokens: &[&str]) -> Result<ScoreRow, Error> {
    let field = |i: usize| -> Result<f64, Error> {
        tokens[i].parse().map_err(|_| Error::corrupt_row(line))
    };

    Ok(ScoreRow {
        mode: field(0)?,
        affinity: field(1)?,
        rmsd_ub: field(2)?,
        rmsd_lb: field(3)?,
    })
}

/// `-?digits[.digits]`: the only token shape the engine emits in score rows.
fn is_numeric_token(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() {
        return false;
    }
    match digits.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && !frac.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => digits.bytes().all(|b| b.is_ascii_digit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
Detected 8 CPUs
Reading input ... done.
Setting up the scoring function ... done.
Analyzing the binding site ... done.
Using random seed: 1913132813
Performing search ... done.
Refining results ... done.

mode |   affinity | dist from best mode
     | (kcal/mol) | rmsd l.b.| rmsd u.b.
-----+------------+----------+----------
   1         -7.1      0.000      0.000
   2         -6.8      2.104      4.977
   3         -6.5      3.291      5.512
Writing output ... done.
If you used AutoDock Vina in your work, please cite it.
";

    #[test]
    fn parse_scores_extracts_all_rows() {
        let table = parse_scores(REPORT).unwrap();

        assert_eq!(table.len(), 3);
        assert!((table[0].mode - 1.0).abs() < 1e-10);
        assert!((table[0].affinity + 7.1).abs() < 1e-10);
        assert!((table[1].rmsd_ub - 2.104).abs() < 1e-10);
        assert!((table[2].rmsd_lb - 5.512).abs() < 1e-10);
    }

    #[test]
    fn parse_scores_skips_trailing_chatter() {
        let table = parse_scores(REPORT).unwrap();

        // The "Writing output" line after the table must not become a row.
        assert!(table.iter().all(|row| row.mode >= 1.0 && row.mode <= 3.0));
    }

    #[test]
    fn parse_scores_fails_without_divider() {
        let err = parse_scores("Reading input ... done.\nPanic: bad receptor\n").unwrap_err();
        assert!(matches!(err, Error::UnrecognizedOutput));
    }

    #[test]
    fn parse_scores_empty_table_is_ok() {
        let table = parse_scores("header\n-----+------------+----------+----------\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn parse_scores_ignores_rows_before_divider() {
        let report = "1 -9.9 0.0 0.0\n-----+--\n   1   -7.1   0.000   0.000\n";
        let table = parse_scores(report).unwrap();

        assert_eq!(table.len(), 1);
        assert!((table[0].affinity + 7.1).abs() < 1e-10);
    }

    #[test]
    fn numeric_token_shapes() {
        assert!(is_numeric_token("1"));
        assert!(is_numeric_token("-7.1"));
        assert!(is_numeric_token("0.000"));
        assert!(!is_numeric_token(""));
        assert!(!is_numeric_token("-"));
        assert!(!is_numeric_token("1."));
        assert!(!is_numeric_token(".5"));
        assert!(!is_numeric_token("1e5"));
        assert!(!is_numeric_token("done."));
    }

    #[test]
    fn rows_with_wrong_arity_are_skipped() {
        let report = "-----+--\n1 -7.1 0.0\n1 -7.1 0.0 0.0 extra\n2 -6.0 1.0 2.0\n";
        let table = parse_scores(report).unwrap();

        assert_eq!(table.len(), 1);
        assert!((table[0].mode - 2.0).abs() < 1e-10);
    }
}
