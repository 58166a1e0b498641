//! Parsers for the plain-text vertex and edge formats consumed by the CLI.
//!
//! Both formats are one record per line, comma-separated integers. Blank
//! lines are skipped. Parse errors carry the 1-based line number so a bad
//! input file can actually be found and fixed.

use std::io::BufRead;

use anyhow::Context as _;
use anyhow::Result;

use division::geometry::Point;
use division::graph::Graph;

/// Reads `id,x,y[,extra...]` lines into `graph`, one `add_vertex` call per
/// line. Trailing columns past `y` are ignored.
pub fn read_vertices(reader: impl BufRead, graph: &mut Graph) -> Result<()> {
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read vertex line {}", line_no + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let id = next_int(&mut fields, line_no, "id")?;
        let x = next_int(&mut fields, line_no, "x")?;
        let y = next_int(&mut fields, line_no, "y")?;

        graph.add_vertex(id, Point::new(x, y));
    }
    Ok(())
}

/// Reads `id_a,id_b,weight,edge_id` lines into `graph`. Each call to
/// `Graph::add_edge` can fail if an endpoint id was never defined by the
/// vertex file; that error is surfaced with the offending line number.
pub fn read_edges(reader: impl BufRead, graph: &mut Graph) -> Result<()> {
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read edge line {}", line_no + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let a_id = next_int(&mut fields, line_no, "id_a")?;
        let b_id = next_int(&mut fields, line_no, "id_b")?;
        let weight = next_int(&mut fields, line_no, "weight")?;
        let edge_id = next_int(&mut fields, line_no, "edge_id")?;

        graph
            .add_edge(edge_id, a_id, b_id, weight)
            .with_context(|| format!("edge line {}", line_no + 1))?;
    }
    Ok(())
}

fn next_int<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    name: &str,
) -> Result<i64> {
    let field = fields
        .next()
        .with_context(|| format!("line {}: missing field '{name}'", line_no + 1))?;
    field
        .parse::<i64>()
        .with_context(|| format!("line {}: field '{name}' is not an integer: {field:?}", line_no + 1))
}
