//! List-format conversion: expand every specification line of a list into
//! one normalized code per line.

use std::io::{BufRead, Write};

use cardswap_types::Result;

use crate::card_spec::parse_card_spec;

/// Read specification lines from `reader`, write one code per line to
/// `writer`. Returns the number of codes written.
pub fn convert_list<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<usize> {
    let mut written = 0;
    for line in reader.lines() {
        for code in parse_card_spec(&line?)? {
            writeln!(writer, "{code}")?;
            written += 1;
        }
    }
    writer.flush()?;
    tracing::debug!(codes = written, "List converted");
    Ok(written)
}
