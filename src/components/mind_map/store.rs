use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::layout;
use super::types::{MapEdge, MapNode, MatchKind, SearchResult, Snapshot, Tag};

/// Local-storage key the whole store is persisted under.
pub const STORAGE_KEY: &str = "mind-map-storage";

pub const DEFAULT_NODE_CONTENT: &str = "New Node";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Up,
	Down,
	Left,
	Right,
}

/// Canonical owner of the node/edge graph, selection, search state and the
/// linear undo/redo history. Pure state, no browser types; the UI layer
/// wraps it in a signal and persists it as a whole.
///
/// Every content-bearing mutation funnels through [`record`](Self::record),
/// which truncates the redo tail and appends a snapshot. Selection and
/// search are view state and never recorded. History always holds the
/// initial state at index 0, so `history_index` stays in `[0, len - 1]`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MindMapStore {
	pub nodes: Vec<MapNode>,
	pub edges: Vec<MapEdge>,
	pub selected_node_id: Option<String>,
	#[serde(default)]
	pub search_query: String,
	#[serde(default)]
	pub search_results: Vec<SearchResult>,
	#[serde(default)]
	history: Vec<Snapshot>,
	#[serde(default)]
	history_index: usize,
}

impl MindMapStore {
	pub fn new() -> Self {
		Self::with_data(Vec::new(), Vec::new())
	}

	pub fn with_data(nodes: Vec<MapNode>, edges: Vec<MapEdge>) -> Self {
		let mut store = Self {
			nodes,
			edges,
			selected_node_id: None,
			search_query: String::new(),
			search_results: Vec::new(),
			history: Vec::new(),
			history_index: 0,
		};
		store.history.push(store.snapshot());
		store
	}

	/// Starter map shown on first launch.
	pub fn sample() -> Self {
		let nodes = vec![
			MapNode::new("1", 0.0, 0.0, "Main Topic"),
			MapNode::new("2", -100.0, 100.0, "Subtopic 1"),
			MapNode::new("3", 100.0, 100.0, "Subtopic 2"),
		];
		let edges = vec![MapEdge::between("1", "2"), MapEdge::between("1", "3")];
		Self::with_data(nodes, edges)
	}

	fn snapshot(&self) -> Snapshot {
		Snapshot {
			nodes: self.nodes.clone(),
			edges: self.edges.clone(),
		}
	}

	// Single history entry point: drop any redo tail, append the current
	// state. Stored snapshots are never mutated afterwards.
	fn record(&mut self) {
		self.history.truncate(self.history_index + 1);
		self.history.push(self.snapshot());
		self.history_index += 1;
	}

	pub fn set_nodes(&mut self, nodes: Vec<MapNode>) {
		self.nodes = nodes;
		self.record();
	}

	pub fn set_edges(&mut self, edges: Vec<MapEdge>) {
		self.edges = edges;
		self.record();
	}

	/// Create a node, wire it under `parent_id` when one resolves, select it.
	/// Returns the generated id. An unknown parent id behaves like `None`.
	pub fn add_node(&mut self, parent_id: Option<&str>) -> String {
		let id = Uuid::new_v4().to_string();
		let (position, edge) = {
			let parent = parent_id.and_then(|pid| self.nodes.iter().find(|n| n.id == pid));
			(
				layout::place_new_node(parent, &self.nodes),
				parent.map(|p| MapEdge::between(&p.id, &id)),
			)
		};

		self.nodes
			.push(MapNode::new(id.clone(), position.0, position.1, DEFAULT_NODE_CONTENT));
		if let Some(edge) = edge {
			self.edges.push(edge);
		}
		self.selected_node_id = Some(id.clone());
		self.record();
		id
	}

	pub fn update_content(&mut self, node_id: &str, content: &str) {
		let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) else {
			return;
		};
		node.content = content.to_string();
		self.record();
	}

	pub fn update_notes(&mut self, node_id: &str, notes: &str) {
		let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) else {
			return;
		};
		node.notes = notes.to_string();
		self.record();
	}

	/// Remove the node and every edge touching it. Selection is cleared even
	/// when a different node was selected.
	pub fn delete_node(&mut self, node_id: &str) {
		if !self.nodes.iter().any(|n| n.id == node_id) {
			return;
		}
		self.nodes.retain(|n| n.id != node_id);
		self.edges
			.retain(|e| e.source != node_id && e.target != node_id);
		self.selected_node_id = None;
		self.record();
	}

	pub fn delete_selected(&mut self) {
		if let Some(id) = self.selected_node_id.clone() {
			self.delete_node(&id);
		}
	}

	// Selection is exclusive and derived; nothing here touches history.

	pub fn select_node(&mut self, node_id: &str) {
		self.selected_node_id = Some(node_id.to_string());
	}

	pub fn deselect_all(&mut self) {
		self.selected_node_id = None;
	}

	pub fn is_selected(&self, node_id: &str) -> bool {
		self.selected_node_id.as_deref() == Some(node_id)
	}

	/// A node is highlighted while it appears in the current search results.
	pub fn is_highlighted(&self, node_id: &str) -> bool {
		self.search_results.iter().any(|r| r.node_id == node_id)
	}

	pub fn add_tag(&mut self, node_id: &str, tag: Tag) {
		let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) else {
			return;
		};
		node.tags.push(tag);
		self.record();
	}

	pub fn remove_tag(&mut self, node_id: &str, tag_id: &str) {
		let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) else {
			return;
		};
		let before = node.tags.len();
		node.tags.retain(|t| t.id != tag_id);
		if node.tags.len() != before {
			self.record();
		}
	}

	pub fn undo(&mut self) {
		if self.history_index == 0 {
			return;
		}
		self.history_index -= 1;
		self.restore_snapshot();
	}

	pub fn redo(&mut self) {
		if self.history_index + 1 >= self.history.len() {
			return;
		}
		self.history_index += 1;
		self.restore_snapshot();
	}

	fn restore_snapshot(&mut self) {
		let snapshot = self.history[self.history_index].clone();
		self.nodes = snapshot.nodes;
		self.edges = snapshot.edges;
	}

	pub fn can_undo(&self) -> bool {
		self.history_index > 0
	}

	pub fn can_redo(&self) -> bool {
		self.history_index + 1 < self.history.len()
	}

	pub fn history_len(&self) -> usize {
		self.history.len()
	}

	/// Case-insensitive substring scan over content, notes and tag names, in
	/// node order, field order content/notes/tags. The empty query clears the
	/// results rather than matching everything.
	pub fn search(&mut self, query: &str) {
		self.search_query = query.to_string();
		self.search_results.clear();
		if query.is_empty() {
			return;
		}

		let needle = query.to_lowercase();
		for node in &self.nodes {
			if node.content.to_lowercase().contains(&needle) {
				self.search_results.push(SearchResult {
					node_id: node.id.clone(),
					kind: MatchKind::Content,
					text: node.content.clone(),
				});
			}
			if node.notes.to_lowercase().contains(&needle) {
				self.search_results.push(SearchResult {
					node_id: node.id.clone(),
					kind: MatchKind::Notes,
					text: node.notes.clone(),
				});
			}
			for tag in &node.tags {
				if tag.name.to_lowercase().contains(&needle) {
					self.search_results.push(SearchResult {
						node_id: node.id.clone(),
						kind: MatchKind::Tags,
						text: tag.name.clone(),
					});
				}
			}
		}
	}

	/// Select the nearest node strictly on the given side of the selection,
	/// nearest along that axis alone. No-op without a selection or candidate.
	pub fn navigate(&mut self, direction: Direction) {
		let Some(selected) = self.selected_node_id.as_deref() else {
			return;
		};
		let Some(current) = self.nodes.iter().find(|n| n.id == selected) else {
			return;
		};
		let (cx, cy) = (current.x, current.y);

		let next_id = {
			let mut candidates: Vec<&MapNode> = self
				.nodes
				.iter()
				.filter(|n| match direction {
					Direction::Up => n.y < cy,
					Direction::Down => n.y > cy,
					Direction::Left => n.x < cx,
					Direction::Right => n.x > cx,
				})
				.collect();
			// Stable sort: ties resolve in node order, like the UI lists.
			candidates.sort_by(|a, b| match direction {
				Direction::Up => b.y.total_cmp(&a.y),
				Direction::Down => a.y.total_cmp(&b.y),
				Direction::Left => b.x.total_cmp(&a.x),
				Direction::Right => a.x.total_cmp(&b.x),
			});
			candidates.first().map(|n| n.id.clone())
		};

		if let Some(id) = next_id {
			self.selected_node_id = Some(id);
		}
	}

	/// Silent position update for an in-flight drag; the drop commits the
	/// move through [`set_nodes`](Self::set_nodes).
	pub fn move_node(&mut self, node_id: &str, x: f64, y: f64) {
		if let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) {
			node.x = x;
			node.y = y;
		}
	}

	/// Clamp whatever deserialized from local storage back into a usable
	/// state. Persistence is fire-and-forget, so stale or partial data must
	/// load without crashing the editor.
	pub fn sanitize(&mut self) {
		if self.history.is_empty() {
			self.history.push(self.snapshot());
			self.history_index = 0;
		} else if self.history_index >= self.history.len() {
			self.history_index = self.history.len() - 1;
		}
		if let Some(id) = self.selected_node_id.clone() {
			if !self.nodes.iter().any(|n| n.id == id) {
				self.selected_node_id = None;
			}
		}
	}
}

impl Default for MindMapStore {
	fn default() -> Self {
		Self::new()
	}
}
