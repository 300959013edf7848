use std::path::Path;

use anyhow::{bail, Context};
use machine_learning::{Dataset, Observation};

/// Loads a dataset from a CSV file.
///
/// See `parse_csv` for the format.
pub fn load_csv(path: &Path, x_size: usize) -> anyhow::Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read dataset '{}'", path.display()))?;

    parse_csv(&content, x_size).with_context(|| format!("invalid dataset '{}'", path.display()))
}

/// Parses one observation per line: `x_size` comma separated features followed by the label.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_csv(content: &str, x_size: usize) -> anyhow::Result<Dataset> {
    let Some(row_size) = x_size.checked_add(1) else {
        bail!("x_size={x_size} is too large");
    };
    let mut rows = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let lineno = i + 1;
        let mut values = line
            .split(',')
            .map(|v| {
                let v = v.trim();
                v.parse::<f64>()
                    .with_context(|| format!("line {lineno}: cannot parse '{v}' as a number"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if values.len() != row_size {
            bail!(
                "line {lineno}: expected {row_size} values (x_size={x_size} + label), got {}",
                values.len()
            );
        }

        let Some(label) = values.pop() else {
            bail!("line {lineno}: missing label");
        };
        rows.push(Observation::new(values, label));
    }

    Ok(Dataset::load(rows)?)
}
