use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::components::theme::ThemeConfig;

use super::component::{ConnectState, ViewTransform};
use super::store::MindMapStore;
use super::types::MapNode;

pub const NODE_MIN_WIDTH: f64 = 150.0;
pub const NODE_PADDING: f64 = 12.0;
pub const NODE_BASE_HEIGHT: f64 = 44.0;
pub const TAG_ROW_HEIGHT: f64 = 24.0;
// Width estimate for 14px sans-serif; keeps hit testing in sync with
// drawing without measuring text through the canvas.
const CHAR_WIDTH: f64 = 7.2;

const GRID_GAP: f64 = 24.0;
const CORNER_RADIUS: f64 = 6.0;
const ARROW_SIZE: f64 = 8.0;

struct Palette {
	background: &'static str,
	grid: &'static str,
	node_fill: &'static str,
	node_fill_highlight: &'static str,
	node_border: &'static str,
	node_text: &'static str,
	selection_ring: &'static str,
	edge: &'static str,
	notes_marker: &'static str,
}

fn palette(theme: ThemeConfig) -> Palette {
	match (theme.is_dark, theme.high_contrast) {
		(false, false) => Palette {
			background: "#f9fafb",
			grid: "rgba(148, 163, 184, 0.5)",
			node_fill: "#ffffff",
			node_fill_highlight: "#eff6ff",
			node_border: "#e5e7eb",
			node_text: "#374151",
			selection_ring: "#3b82f6",
			edge: "rgba(100, 116, 139, 0.8)",
			notes_marker: "#3b82f6",
		},
		(false, true) => Palette {
			background: "#ffffff",
			grid: "rgba(71, 85, 105, 0.6)",
			node_fill: "#ffffff",
			node_fill_highlight: "#dbeafe",
			node_border: "#111827",
			node_text: "#111827",
			selection_ring: "#1d4ed8",
			edge: "rgba(15, 23, 42, 0.9)",
			notes_marker: "#1d4ed8",
		},
		(true, false) => Palette {
			background: "#111827",
			grid: "rgba(148, 163, 184, 0.2)",
			node_fill: "#1f2937",
			node_fill_highlight: "#1e3a8a",
			node_border: "#374151",
			node_text: "#e5e7eb",
			selection_ring: "#60a5fa",
			edge: "rgba(148, 163, 184, 0.7)",
			notes_marker: "#60a5fa",
		},
		(true, true) => Palette {
			background: "#000000",
			grid: "rgba(226, 232, 240, 0.25)",
			node_fill: "#000000",
			node_fill_highlight: "#1e40af",
			node_border: "#f9fafb",
			node_text: "#ffffff",
			selection_ring: "#93c5fd",
			edge: "rgba(248, 250, 252, 0.9)",
			notes_marker: "#93c5fd",
		},
	}
}

// Tag chip colors per palette token, (fill, text).
fn tag_colors(token: &str, is_dark: bool) -> (&'static str, &'static str) {
	match (token, is_dark) {
		("red", false) => ("#fee2e2", "#991b1b"),
		("red", true) => ("#7f1d1d", "#fecaca"),
		("blue", false) => ("#dbeafe", "#1e40af"),
		("blue", true) => ("#1e3a8a", "#bfdbfe"),
		("green", false) => ("#dcfce7", "#166534"),
		("green", true) => ("#14532d", "#bbf7d0"),
		("yellow", false) => ("#fef9c3", "#854d0e"),
		("yellow", true) => ("#713f12", "#fef08a"),
		("purple", false) => ("#f3e8ff", "#6b21a8"),
		("purple", true) => ("#581c87", "#e9d5ff"),
		(_, false) => ("#e5e7eb", "#374151"),
		(_, true) => ("#374151", "#e5e7eb"),
	}
}

/// Box dimensions for a node; shared by the renderer and hit testing.
pub fn node_size(node: &MapNode) -> (f64, f64) {
	let text_width = node.content.chars().count() as f64 * CHAR_WIDTH;
	let width = (text_width + NODE_PADDING * 2.0).max(NODE_MIN_WIDTH);
	let height = if node.tags.is_empty() {
		NODE_BASE_HEIGHT
	} else {
		NODE_BASE_HEIGHT + TAG_ROW_HEIGHT
	};
	(width, height)
}

pub fn render(
	store: &MindMapStore,
	view: &ViewTransform,
	connect: Option<&ConnectState>,
	theme: ThemeConfig,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) {
	let colors = palette(theme);

	ctx.set_fill_style_str(colors.background);
	ctx.fill_rect(0.0, 0.0, width, height);

	ctx.save();
	let _ = ctx.translate(view.x, view.y);
	let _ = ctx.scale(view.k, view.k);

	draw_grid(view, &colors, ctx, width, height);
	draw_edges(store, &colors, ctx);
	if let Some(connect) = connect {
		draw_connect_preview(store, connect, &colors, ctx);
	}
	draw_nodes(store, theme, &colors, ctx);

	ctx.restore();
}

fn draw_grid(
	view: &ViewTransform,
	colors: &Palette,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) {
	// Dot count explodes when zoomed far out; the grid is decoration only.
	if view.k < 0.5 {
		return;
	}
	let left = (-view.x / view.k / GRID_GAP).floor() * GRID_GAP;
	let top = (-view.y / view.k / GRID_GAP).floor() * GRID_GAP;
	let right = (width - view.x) / view.k;
	let bottom = (height - view.y) / view.k;

	ctx.set_fill_style_str(colors.grid);
	let mut x = left;
	while x <= right {
		let mut y = top;
		while y <= bottom {
			ctx.fill_rect(x - 0.5, y - 0.5, 1.0, 1.0);
			y += GRID_GAP;
		}
		x += GRID_GAP;
	}
}

// Edges run from the bottom-center of the source box to the top-center of
// the target box, finished with a filled arrowhead.
fn draw_edges(store: &MindMapStore, colors: &Palette, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(colors.edge);
	ctx.set_fill_style_str(colors.edge);
	ctx.set_line_width(1.5);

	for edge in &store.edges {
		let Some(source) = store.nodes.iter().find(|n| n.id == edge.source) else {
			continue;
		};
		let Some(target) = store.nodes.iter().find(|n| n.id == edge.target) else {
			continue;
		};
		let (sw, sh) = node_size(source);
		let (tw, _) = node_size(target);
		let (x1, y1) = (source.x + sw / 2.0, source.y + sh);
		let (x2, y2) = (target.x + tw / 2.0, target.y);

		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2 - ux * ARROW_SIZE, y2 - uy * ARROW_SIZE);
		ctx.stroke();

		let (back_x, back_y) = (x2 - ux * ARROW_SIZE, y2 - uy * ARROW_SIZE);
		let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
		ctx.begin_path();
		ctx.move_to(x2, y2);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_connect_preview(
	store: &MindMapStore,
	connect: &ConnectState,
	colors: &Palette,
	ctx: &CanvasRenderingContext2d,
) {
	let Some(source) = store.nodes.iter().find(|n| n.id == connect.source_id) else {
		return;
	};
	let (w, h) = node_size(source);

	ctx.set_stroke_style_str(colors.selection_ring);
	ctx.set_line_width(1.5);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0),
		&JsValue::from_f64(4.0),
	));
	ctx.begin_path();
	ctx.move_to(source.x + w / 2.0, source.y + h);
	ctx.line_to(connect.to_x, connect.to_y);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(
	store: &MindMapStore,
	theme: ThemeConfig,
	colors: &Palette,
	ctx: &CanvasRenderingContext2d,
) {
	for node in &store.nodes {
		let (w, h) = node_size(node);
		let highlighted = store.is_highlighted(&node.id);
		let selected = store.is_selected(&node.id);

		rounded_rect(ctx, node.x, node.y, w, h, CORNER_RADIUS);
		ctx.set_fill_style_str(if highlighted {
			colors.node_fill_highlight
		} else {
			colors.node_fill
		});
		ctx.fill();
		ctx.set_stroke_style_str(colors.node_border);
		ctx.set_line_width(2.0);
		ctx.stroke();

		if selected {
			rounded_rect(
				ctx,
				node.x - 3.0,
				node.y - 3.0,
				w + 6.0,
				h + 6.0,
				CORNER_RADIUS + 3.0,
			);
			ctx.set_stroke_style_str(colors.selection_ring);
			ctx.set_line_width(2.0);
			ctx.stroke();
		}

		ctx.set_fill_style_str(colors.node_text);
		ctx.set_font("500 14px sans-serif");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.content, node.x + NODE_PADDING, node.y + NODE_BASE_HEIGHT / 2.0);

		if !node.notes.is_empty() {
			ctx.begin_path();
			let _ = ctx.arc(
				node.x + w - 10.0,
				node.y + 10.0,
				3.0,
				0.0,
				2.0 * std::f64::consts::PI,
			);
			ctx.set_fill_style_str(colors.notes_marker);
			ctx.fill();
		}

		if !node.tags.is_empty() {
			draw_tag_row(node, theme, ctx, w);
		}
	}
}

fn draw_tag_row(node: &MapNode, theme: ThemeConfig, ctx: &CanvasRenderingContext2d, width: f64) {
	let chip_y = node.y + NODE_BASE_HEIGHT - 4.0;
	let mut chip_x = node.x + NODE_PADDING;

	ctx.set_font("11px sans-serif");
	ctx.set_text_baseline("middle");

	for tag in &node.tags {
		let chip_w = tag.name.chars().count() as f64 * 6.0 + 14.0;
		if chip_x + chip_w > node.x + width - NODE_PADDING / 2.0 {
			break;
		}
		let (fill, text) = tag_colors(&tag.color, theme.is_dark);

		rounded_rect(ctx, chip_x, chip_y, chip_w, 16.0, 8.0);
		ctx.set_fill_style_str(fill);
		ctx.fill();
		ctx.set_fill_style_str(text);
		let _ = ctx.fill_text(&tag.name, chip_x + 7.0, chip_y + 8.0);

		chip_x += chip_w + 6.0;
	}
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}
