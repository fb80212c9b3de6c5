use mind_map_canvas::components::mind_map::{
	MapEdge, MapNode, Tag, export_outline, import_outline,
};

fn tagged(mut node: MapNode, names: &[&str]) -> MapNode {
	node.tags = names
		.iter()
		.map(|name| Tag {
			id: format!("t-{name}"),
			name: name.to_string(),
			color: "green".to_string(),
		})
		.collect();
	node
}

// Parent/child structure as (parent content, child content) pairs, for
// comparing hierarchies independently of ids and positions.
fn structure(nodes: &[MapNode], edges: &[MapEdge]) -> Vec<(String, String)> {
	edges
		.iter()
		.filter_map(|edge| {
			let source = nodes.iter().find(|n| n.id == edge.source)?;
			let target = nodes.iter().find(|n| n.id == edge.target)?;
			Some((source.content.clone(), target.content.clone()))
		})
		.collect()
}

#[test]
fn export_emits_bullets_tags_notes_and_blank_separated_roots() {
	let mut a = tagged(MapNode::new("a", 0.0, 0.0, "A"), &["x"]);
	a.notes = "root notes".to_string();
	let b = MapNode::new("b", 150.0, 100.0, "B");
	let c = MapNode::new("c", 0.0, 300.0, "C");

	let nodes = vec![a, b, c];
	let edges = vec![MapEdge::between("a", "b")];

	assert_eq!(
		export_outline(&nodes, &edges),
		"- A\n  Tags: #x\n  Notes: root notes\n  - B\n\n- C\n"
	);
}

#[test]
fn export_indents_two_spaces_per_level() {
	let nodes = vec![
		MapNode::new("a", 0.0, 0.0, "A"),
		MapNode::new("b", 0.0, 0.0, "B"),
		MapNode::new("c", 0.0, 0.0, "C"),
	];
	let edges = vec![MapEdge::between("a", "b"), MapEdge::between("b", "c")];

	assert_eq!(export_outline(&nodes, &edges), "- A\n  - B\n    - C\n");
}

#[test]
fn export_lists_multiple_tags_comma_separated() {
	let nodes = vec![tagged(MapNode::new("a", 0.0, 0.0, "A"), &["x", "y"])];

	assert_eq!(export_outline(&nodes, &[]), "- A\n  Tags: #x, #y\n");
}

#[test]
fn export_emits_a_shared_child_only_once() {
	let nodes = vec![
		MapNode::new("a", 0.0, 0.0, "A"),
		MapNode::new("b", 0.0, 0.0, "B"),
		MapNode::new("c", 0.0, 0.0, "C"),
	];
	let edges = vec![MapEdge::between("a", "c"), MapEdge::between("b", "c")];

	let outline = export_outline(&nodes, &edges);
	assert_eq!(outline, "- A\n  - C\n\n- B\n");
	assert_eq!(outline.matches("- C").count(), 1);
}

#[test]
fn export_survives_a_cycle_below_the_root() {
	let nodes = vec![
		MapNode::new("a", 0.0, 0.0, "A"),
		MapNode::new("b", 0.0, 0.0, "B"),
		MapNode::new("c", 0.0, 0.0, "C"),
	];
	let edges = vec![
		MapEdge::between("a", "b"),
		MapEdge::between("b", "c"),
		MapEdge::between("c", "b"),
	];

	assert_eq!(export_outline(&nodes, &edges), "- A\n  - B\n    - C\n");
}

#[test]
fn a_pure_cycle_has_no_roots_and_exports_nothing() {
	let nodes = vec![
		MapNode::new("a", 0.0, 0.0, "A"),
		MapNode::new("b", 0.0, 0.0, "B"),
	];
	let edges = vec![MapEdge::between("a", "b"), MapEdge::between("b", "a")];

	assert_eq!(export_outline(&nodes, &edges), "");
}

#[test]
fn import_builds_nodes_and_parent_links_from_indentation() {
	let (nodes, edges) = import_outline("- A\n  Tags: #x\n  - B\n- C");

	let contents: Vec<&str> = nodes.iter().map(|n| n.content.as_str()).collect();
	assert_eq!(contents, vec!["A", "B", "C"]);
	assert_eq!(structure(&nodes, &edges), vec![("A".to_string(), "B".to_string())]);

	// The skipped Tags line still consumed index 1.
	assert_eq!(nodes[0].id, "node-0");
	assert_eq!(nodes[1].id, "node-2");
	assert_eq!(nodes[2].id, "node-3");
	assert_eq!((nodes[1].x, nodes[1].y), (250.0, 200.0));
	assert_eq!((nodes[2].x, nodes[2].y), (0.0, 300.0));

	// Tags are recognized but never reattached.
	assert!(nodes.iter().all(|n| n.tags.is_empty()));
	assert!(nodes.iter().all(|n| n.notes.is_empty()));
}

#[test]
fn import_ignores_blank_lines_between_roots() {
	let (nodes, edges) = import_outline("- A\n  - B\n\n- C\n");

	assert_eq!(nodes.len(), 3);
	assert_eq!(structure(&nodes, &edges), vec![("A".to_string(), "B".to_string())]);
	// Blank lines are filtered before indexing, so C follows B directly.
	assert_eq!(nodes[2].id, "node-2");
}

#[test]
fn import_leaves_an_orphan_when_the_level_jumps() {
	let (nodes, edges) = import_outline("- A\n    - Deep");

	assert_eq!(nodes.len(), 2);
	assert_eq!(nodes[1].content, "Deep");
	assert_eq!((nodes[1].x, nodes[1].y), (500.0, 100.0));
	assert!(edges.is_empty());
}

#[test]
fn import_keeps_non_bullet_lines_as_content() {
	let (nodes, _) = import_outline("just some text");

	assert_eq!(nodes.len(), 1);
	assert_eq!(nodes[0].content, "just some text");
}

#[test]
fn import_skips_bulleted_tags_lines_too() {
	let (nodes, _) = import_outline("- A\n- Tags: #x\n- Notes: hm");

	assert_eq!(nodes.len(), 1);
	assert_eq!(nodes[0].content, "A");
}

#[test]
fn import_truncates_fractional_indent_levels() {
	let (nodes, edges) = import_outline("- A\n   - B");

	// Three spaces is still level 1.
	assert_eq!(nodes[1].x, 250.0);
	assert_eq!(structure(&nodes, &edges), vec![("A".to_string(), "B".to_string())]);
}

#[test]
fn round_trip_preserves_content_and_hierarchy_but_drops_tags_and_notes() {
	let mut root = tagged(MapNode::new("a", 12.0, 34.0, "Root"), &["keep", "calm"]);
	root.notes = "these notes vanish".to_string();
	let nodes = vec![
		root,
		MapNode::new("b", 150.0, 100.0, "Left"),
		MapNode::new("c", 200.0, 100.0, "Right"),
		MapNode::new("d", 300.0, 200.0, "Leaf"),
		MapNode::new("e", -100.0, 0.0, "Island"),
	];
	let edges = vec![
		MapEdge::between("a", "b"),
		MapEdge::between("a", "c"),
		MapEdge::between("c", "d"),
	];

	let (imported_nodes, imported_edges) = import_outline(&export_outline(&nodes, &edges));

	let mut contents: Vec<&str> = imported_nodes.iter().map(|n| n.content.as_str()).collect();
	contents.sort_unstable();
	assert_eq!(contents, vec!["Island", "Leaf", "Left", "Right", "Root"]);

	assert_eq!(
		structure(&imported_nodes, &imported_edges),
		structure(&nodes, &edges)
	);

	assert!(imported_nodes.iter().all(|n| n.tags.is_empty()));
	assert!(imported_nodes.iter().all(|n| n.notes.is_empty()));
	// Ids are reassigned by line position.
	assert!(imported_nodes.iter().all(|n| n.id.starts_with("node-")));
}
