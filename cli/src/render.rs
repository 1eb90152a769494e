use std::io::Write;

use route_graph_core::{AdjacencyList, BfsResult, GraphLike, VertexId};
use serde_json::json;

use crate::config::OutputFormat;
use crate::error::CliError;

/// Graph dump. Text mode is the diagnostic `Display` form; JSON lists every
/// vertex with its adjacency entries.
pub fn graph<W: Write>(
    out: &mut W,
    graph: &AdjacencyList,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write!(out, "{graph}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, graph)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Per-vertex distance and predecessor. Text mode prints `-1` for
/// unreached vertices and for the source's missing predecessor.
pub fn bfs<W: Write>(
    out: &mut W,
    result: &BfsResult,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{:>8} {:>10} {:>12}", "vertex", "distance", "predecessor")?;
            let rows = result.distances().iter().zip(result.predecessors());
            for (i, (distance, predecessor)) in rows.enumerate() {
                writeln!(
                    out,
                    "{:>8} {:>10} {:>12}",
                    i + 1,
                    signed(distance.map(i64::from)),
                    signed(predecessor.map(i64::from)),
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn path<W: Write>(
    out: &mut W,
    source: VertexId,
    target: VertexId,
    path: Option<&[VertexId]>,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => match path {
            Some(steps) => {
                let joined: Vec<String> = steps.iter().map(|v| v.to_string()).collect();
                writeln!(out, "{}", joined.join(" -> "))?;
                writeln!(out, "{} hops", steps.len() - 1)?;
            }
            None => writeln!(out, "no path from {source} to {target}")?,
        },
        OutputFormat::Json => {
            let value = json!({
                "source": source,
                "target": target,
                "hops": path.map(|p| p.len() - 1),
                "path": path,
            });
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// One-line summary written after a derived graph in text mode.
pub fn summary<W: Write>(
    out: &mut W,
    graph: &AdjacencyList,
    format: OutputFormat,
) -> Result<(), CliError> {
    if format == OutputFormat::Text {
        writeln!(out, "-- {} vertices, {} edges", graph.len(), graph.edge_count())?;
    }
    Ok(())
}

fn signed(value: Option<i64>) -> i64 {
    value.unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_graph_core::bfs as run_bfs;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), CliError>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bfs_text_uses_minus_one() {
        let g = AdjacencyList::from_edges(3, [(1, 2, 0.0)]).unwrap();
        let r = run_bfs(&g, 1).unwrap();
        let text = render(|out| bfs(out, &r, OutputFormat::Text));
        let rows: Vec<Vec<&str>> = text
            .lines()
            .skip(1)
            .map(|l| l.split_whitespace().collect())
            .collect();
        assert_eq!(
            rows,
            vec![vec!["1", "0", "-1"], vec!["2", "1", "1"], vec!["3", "-1", "-1"]]
        );
    }

    #[test]
    fn test_bfs_json() {
        let g = AdjacencyList::from_edges(2, [(1, 2, 0.0)]).unwrap();
        let r = run_bfs(&g, 2).unwrap();
        let text = render(|out| bfs(out, &r, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["source"], 2);
        assert_eq!(value["distances"], json!([null, 0]));
        assert_eq!(value["predecessors"], json!([null, null]));
    }

    #[test]
    fn test_graph_json_lists_all_vertices() {
        let g = AdjacencyList::from_edges(2, [(2, 1, 1.5)]).unwrap();
        let text = render(|out| graph(out, &g, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
        assert_eq!(value[1]["id"], 2);
        assert_eq!(value[1]["adjacency"][0]["neighbor"], 1);
        assert_eq!(value[1]["adjacency"][0]["weight"], 1.5);
    }

    #[test]
    fn test_path_text() {
        let text = render(|out| path(out, 1, 3, Some(&[1, 2, 3][..]), OutputFormat::Text));
        assert_eq!(text, "1 -> 2 -> 3\n2 hops\n");
        let text = render(|out| path(out, 3, 1, None, OutputFormat::Text));
        assert_eq!(text, "no path from 3 to 1\n");
    }

    #[test]
    fn test_path_json_unreachable() {
        let text = render(|out| path(out, 3, 1, None, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["path"].is_null());
        assert!(value["hops"].is_null());
    }
}
