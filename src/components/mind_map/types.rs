use serde::{Deserialize, Serialize};

/// Color tokens a tag can carry; the renderer maps these to theme-aware colors.
pub const TAG_PALETTE: &[&str] = &["red", "blue", "green", "yellow", "purple"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
	pub id: String,
	pub name: String,
	pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub content: String,
	// Empty string means "no notes", mirroring how exports treat the field.
	#[serde(default)]
	pub notes: String,
	#[serde(default)]
	pub tags: Vec<Tag>,
}

impl MapNode {
	pub fn new(id: impl Into<String>, x: f64, y: f64, content: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			x,
			y,
			content: content.into(),
			notes: String::new(),
			tags: Vec::new(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapEdge {
	pub id: String,
	pub source: String,
	pub target: String,
}

impl MapEdge {
	/// Directed edge with the conventional `e<source>-<target>` id.
	pub fn between(source: &str, target: &str) -> Self {
		Self {
			id: format!("e{source}-{target}"),
			source: source.to_string(),
			target: target.to_string(),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
	Content,
	Notes,
	Tags,
}

impl MatchKind {
	pub fn label(&self) -> &'static str {
		match self {
			MatchKind::Content => "Content",
			MatchKind::Notes => "Notes",
			MatchKind::Tags => "Tag",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
	pub node_id: String,
	pub kind: MatchKind,
	pub text: String,
}

/// One undo/redo step: a full copy of both collections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
	pub nodes: Vec<MapNode>,
	pub edges: Vec<MapEdge>,
}
