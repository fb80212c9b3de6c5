use super::types::MapNode;

pub const CHILD_OFFSET_X: f64 = 150.0;
pub const CHILD_OFFSET_Y: f64 = 100.0;
const PROBE_STEP: f64 = 50.0;
const CLEARANCE: f64 = 50.0;

/// Pick coordinates for a freshly created node.
///
/// Without a parent the node lands at the origin. With one, the candidate
/// starts below and to the right of the parent and probes rightwards in
/// 50-unit steps until no existing node sits within the clearance box on
/// both axes. Greedy placement only; edge crossings are not considered.
pub fn place_new_node(parent: Option<&MapNode>, existing: &[MapNode]) -> (f64, f64) {
	let Some(parent) = parent else {
		return (0.0, 0.0);
	};

	let base_x = parent.x + CHILD_OFFSET_X;
	let base_y = parent.y + CHILD_OFFSET_Y;

	let mut offset = 0.0;
	while existing.iter().any(|node| {
		(node.x - (base_x + offset)).abs() < CLEARANCE && (node.y - base_y).abs() < CLEARANCE
	}) {
		offset += PROBE_STEP;
	}

	(base_x + offset, base_y)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_parent_lands_at_origin() {
		assert_eq!(place_new_node(None, &[]), (0.0, 0.0));
	}

	#[test]
	fn probes_along_x_until_clear() {
		let parent = MapNode::new("p", 0.0, 0.0, "p");
		let occupied = vec![
			parent.clone(),
			MapNode::new("a", 150.0, 100.0, "a"),
			MapNode::new("b", 200.0, 100.0, "b"),
		];
		assert_eq!(place_new_node(Some(&parent), &occupied), (250.0, 100.0));
	}

	#[test]
	fn clearance_is_a_box_not_a_radius() {
		let parent = MapNode::new("p", 0.0, 0.0, "p");
		// Same x band but vertically out of the way: no probe needed.
		let far = vec![MapNode::new("a", 150.0, 300.0, "a")];
		assert_eq!(place_new_node(Some(&parent), &far), (150.0, 100.0));
	}
}
