use mind_map_canvas::components::mind_map::{MapNode, MindMapStore};

fn node(id: &str, content: &str) -> MapNode {
	MapNode::new(id, 0.0, 0.0, content)
}

#[test]
fn a_fresh_store_has_nothing_to_undo_or_redo() {
	let store = MindMapStore::new();
	assert!(!store.can_undo());
	assert!(!store.can_redo());
	assert_eq!(store.history_len(), 1);
}

#[test]
fn undoing_k_edits_walks_back_to_the_initial_state() {
	let mut store = MindMapStore::new();
	store.set_nodes(vec![node("a", "one")]);
	store.set_nodes(vec![node("a", "one"), node("b", "two")]);
	store.set_nodes(vec![node("a", "one"), node("b", "two"), node("c", "three")]);

	store.undo();
	assert_eq!(store.nodes.len(), 2);
	store.undo();
	assert_eq!(store.nodes.len(), 1);
	store.undo();
	assert!(store.nodes.is_empty());

	// Boundary: nothing left to undo.
	store.undo();
	assert!(store.nodes.is_empty());
	assert!(!store.can_undo());
}

#[test]
fn redo_restores_forward_through_the_same_sequence() {
	let mut store = MindMapStore::new();
	store.set_nodes(vec![node("a", "one")]);
	store.set_nodes(vec![node("a", "one"), node("b", "two")]);

	store.undo();
	store.undo();
	assert!(store.nodes.is_empty());

	store.redo();
	assert_eq!(store.nodes.len(), 1);
	store.redo();
	assert_eq!(store.nodes.len(), 2);

	// Boundary: nothing left to redo.
	store.redo();
	assert_eq!(store.nodes.len(), 2);
	assert!(!store.can_redo());
}

#[test]
fn every_replace_discards_the_redo_tail() {
	let mut store = MindMapStore::new();
	store.set_nodes(vec![node("a", "one")]);
	store.set_nodes(vec![node("a", "one"), node("b", "two")]);

	store.undo();
	assert!(store.can_redo());

	store.set_nodes(vec![node("c", "replacement")]);
	assert!(!store.can_redo());
	assert_eq!(store.history_len(), 3);

	store.redo();
	assert_eq!(store.nodes[0].id, "c");
}

#[test]
fn stored_snapshots_survive_later_mutation() {
	let mut store = MindMapStore::new();
	store.set_nodes(vec![node("a", "original")]);

	store.update_content("a", "rewritten");
	assert_eq!(store.nodes[0].content, "rewritten");

	store.undo();
	assert_eq!(store.nodes[0].content, "original");

	store.redo();
	assert_eq!(store.nodes[0].content, "rewritten");
}

#[test]
fn add_node_is_undoable_like_any_other_mutation() {
	let mut store = MindMapStore::new();
	let root = store.add_node(None);
	store.add_node(Some(&root));
	assert_eq!(store.nodes.len(), 2);
	assert_eq!(store.edges.len(), 1);

	store.undo();
	assert_eq!(store.nodes.len(), 1);
	assert!(store.edges.is_empty());

	store.undo();
	assert!(store.nodes.is_empty());
}

#[test]
fn delete_and_tag_mutations_are_recorded() {
	let mut store = MindMapStore::new();
	let id = store.add_node(None);
	store.add_tag(
		&id,
		mind_map_canvas::components::mind_map::Tag {
			id: "t".to_string(),
			name: "pin".to_string(),
			color: "red".to_string(),
		},
	);
	store.delete_node(&id);
	assert!(store.nodes.is_empty());

	store.undo();
	assert_eq!(store.nodes[0].tags.len(), 1);

	store.undo();
	assert!(store.nodes[0].tags.is_empty());
}

#[test]
fn selection_and_search_do_not_touch_history() {
	let mut store = MindMapStore::new();
	let id = store.add_node(None);
	let before = store.history_len();

	store.select_node(&id);
	store.deselect_all();
	store.search("new");
	store.search("");

	assert_eq!(store.history_len(), before);
}

#[test]
fn sanitize_clamps_whatever_deserialized() {
	let json = r#"{
		"nodes": [{"id": "a", "x": 0.0, "y": 0.0, "content": "A"}],
		"edges": [],
		"selected_node_id": "gone",
		"history": [],
		"history_index": 7
	}"#;
	let mut store: MindMapStore = serde_json::from_str(json).unwrap();
	store.sanitize();

	assert_eq!(store.selected_node_id, None);
	assert!(!store.can_undo());
	assert!(!store.can_redo());

	// Undo on the clamped store must hold the current state, not panic.
	store.undo();
	assert_eq!(store.nodes.len(), 1);
}

#[test]
fn a_store_round_trips_through_json_with_its_history() {
	let mut store = MindMapStore::new();
	store.set_nodes(vec![node("a", "one")]);
	store.set_nodes(vec![node("a", "one"), node("b", "two")]);
	store.undo();

	let json = serde_json::to_string(&store).unwrap();
	let mut restored: MindMapStore = serde_json::from_str(&json).unwrap();
	restored.sanitize();

	assert_eq!(restored.nodes.len(), 1);
	assert!(restored.can_undo());
	assert!(restored.can_redo());

	restored.redo();
	assert_eq!(restored.nodes.len(), 2);
}
