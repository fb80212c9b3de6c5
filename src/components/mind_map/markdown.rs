//! Bullet-outline codec for the node/edge graph.
//!
//! The format is two-space indented `- ` bullets, each optionally followed by
//! a `Tags: #a, #b` line and a `Notes: ...` line at the same indent. Root
//! subtrees are separated by a blank line. Import is intentionally lossy:
//! Tags/Notes lines are recognized and skipped, never reattached.

use std::collections::{HashMap, HashSet};

use super::types::{MapEdge, MapNode};

const IMPORT_LEVEL_SPACING: f64 = 250.0;
const IMPORT_LINE_SPACING: f64 = 100.0;

pub fn export_outline(nodes: &[MapNode], edges: &[MapEdge]) -> String {
	let by_id: HashMap<&str, &MapNode> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();

	let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
	for edge in edges {
		children
			.entry(edge.source.as_str())
			.or_default()
			.push(edge.target.as_str());
	}

	// A node reachable twice (shared child, cycle) is emitted only once.
	let mut visited: HashSet<&str> = HashSet::new();

	nodes
		.iter()
		.filter(|node| !edges.iter().any(|edge| edge.target == node.id))
		.map(|root| {
			let mut out = String::new();
			write_subtree(root.id.as_str(), 0, &by_id, &children, &mut visited, &mut out);
			out
		})
		.collect::<Vec<_>>()
		.join("\n")
}

fn write_subtree<'a>(
	id: &'a str,
	level: usize,
	by_id: &HashMap<&'a str, &'a MapNode>,
	children: &HashMap<&'a str, Vec<&'a str>>,
	visited: &mut HashSet<&'a str>,
	out: &mut String,
) {
	let Some(node) = by_id.get(id) else {
		return;
	};
	if !visited.insert(id) {
		return;
	}

	let indent = "  ".repeat(level);
	out.push_str(&format!("{indent}- {}\n", node.content));

	if !node.tags.is_empty() {
		let names: Vec<String> = node.tags.iter().map(|t| format!("#{}", t.name)).collect();
		out.push_str(&format!("{indent}  Tags: {}\n", names.join(", ")));
	}
	if !node.notes.is_empty() {
		out.push_str(&format!("{indent}  Notes: {}\n", node.notes));
	}

	if let Some(targets) = children.get(id) {
		for &child in targets {
			write_subtree(child, level + 1, by_id, children, visited, out);
		}
	}
}

pub fn import_outline(markdown: &str) -> (Vec<MapNode>, Vec<MapEdge>) {
	let mut nodes = Vec::new();
	let mut edges = Vec::new();
	// Most recent node seen at each indent level; never cleared, so a level
	// jump (0 straight to 2) leaves the deep node an orphan.
	let mut last_at_level: HashMap<usize, String> = HashMap::new();

	for (index, line) in markdown
		.lines()
		.filter(|line| !line.trim().is_empty())
		.enumerate()
	{
		let level = (line.len() - line.trim_start().len()) / 2;
		let trimmed = line.trim();
		let content = match trimmed.strip_prefix('-') {
			Some(rest) => rest.trim_start(),
			None => trimmed,
		};

		// Skipped lines still consume their index, so node ids and y
		// positions skip numbers exactly where Tags/Notes lines sat.
		if content.starts_with("Tags:") || content.starts_with("Notes:") {
			continue;
		}

		let id = format!("node-{index}");
		nodes.push(MapNode::new(
			id.clone(),
			level as f64 * IMPORT_LEVEL_SPACING,
			index as f64 * IMPORT_LINE_SPACING,
			content,
		));

		if level > 0 {
			if let Some(parent) = last_at_level.get(&(level - 1)) {
				edges.push(MapEdge::between(parent, &id));
			}
		}
		last_at_level.insert(level, id);
	}

	(nodes, edges)
}
