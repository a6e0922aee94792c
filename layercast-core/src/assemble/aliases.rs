//! Prefixed-alias projection over a bracketed column block.

use nom::{
    IResult,
    bytes::complete::take_until,
    character::complete::{char, multispace0},
    combinator::opt,
    sequence::delimited,
};

use crate::error::{LayercastError, LayercastResult};

/// Rewrite a block of bracketed column names (one per line, optionally
/// comma-led) into prefixed alias selections:
///
/// ```text
/// [FOO]      ->  [gis].[FOO] AS [GIS_FOO]
/// ,[BAR]     ->  ,[gis].[BAR] AS [GIS_BAR]
/// ```
///
/// The qualifier uses the lowercased prefix, the alias keeps the prefix as
/// given, and input line order (and comma style) is preserved. Blank lines
/// are skipped; a non-blank line without a `[NAME]` token is an error.
pub fn prefixed_aliases(block: &str, prefix: &str) -> LayercastResult<String> {
    let qualifier = prefix.to_lowercase();
    let mut out: Vec<String> = Vec::new();

    for (idx, line) in block.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (_, (comma, name)) =
            column_line(line).map_err(|_| LayercastError::ColumnBlock {
                line: idx + 1,
                content: line.to_string(),
            })?;
        let lead = if comma { "," } else { "" };
        out.push(format!(
            "{lead}[{qualifier}].[{name}] AS [{prefix}_{name}]"
        ));
    }

    Ok(out.join("\n"))
}

/// One line of the block: optional leading comma, then `[NAME]`.
fn column_line(input: &str) -> IResult<&str, (bool, &str)> {
    let (input, _) = multispace0(input)?;
    let (input, comma) = opt(char(','))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, name) = delimited(char('['), take_until("]"), char(']'))(input)?;
    Ok((input, (comma.is_some(), name)))
}
