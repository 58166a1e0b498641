//! Writes the final region assignments to the two-line-per-region output
//! format: a region id, then its member vertex ids space-separated and
//! terminated by a trailing space and newline. Empty regions still emit
//! both lines.

use std::io::Write;

use anyhow::Context as _;
use anyhow::Result;

pub fn write_regions(mut writer: impl Write, regions: &[Vec<i64>]) -> Result<()> {
    for (region_id, region) in regions.iter().enumerate() {
        writeln!(writer, "{region_id}").context("failed to write region id")?;
        for &vertex_id in region {
            write!(writer, "{vertex_id} ").context("failed to write region members")?;
        }
        writeln!(writer).context("failed to write region members")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_two_lines_per_region_in_ascending_order() {
        let regions = vec![vec![0, 1, 2], vec![3]];
        let mut buf = Vec::new();
        write_regions(&mut buf, &regions).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0\n0 1 2 \n1\n3 \n");
    }

    #[test]
    fn empty_region_still_emits_both_lines() {
        let regions = vec![Vec::new()];
        let mut buf = Vec::new();
        write_regions(&mut buf, &regions).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0\n\n");
    }
}
