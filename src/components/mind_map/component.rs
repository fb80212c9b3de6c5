use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	HtmlCanvasElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent,
	WheelEvent, Window,
};

use crate::components::theme::ThemeConfig;

use super::render;
use super::store::{Direction, MindMapStore};
use super::types::MapEdge;

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}
}

#[derive(Clone, Debug, Default)]
struct DragState {
	node_id: Option<String>,
	grab_dx: f64,
	grab_dy: f64,
	moved: bool,
}

#[derive(Clone, Debug, Default)]
struct PanState {
	active: bool,
	start_x: f64,
	start_y: f64,
	transform_start_x: f64,
	transform_start_y: f64,
}

/// In-flight connect gesture: shift-drag from a source node toward a target.
#[derive(Clone, Debug)]
pub struct ConnectState {
	pub source_id: String,
	pub to_x: f64,
	pub to_y: f64,
}

// Topmost node under the pointer; nodes later in the list draw on top.
fn node_at_position(store: &MindMapStore, gx: f64, gy: f64) -> Option<String> {
	let mut found = None;
	for node in &store.nodes {
		let (w, h) = render::node_size(node);
		if gx >= node.x && gx <= node.x + w && gy >= node.y && gy <= node.y + h {
			found = Some(node.id.clone());
		}
	}
	found
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

#[component]
pub fn MindMapCanvas() -> impl IntoView {
	let store = expect_context::<RwSignal<MindMapStore>>();
	let theme = expect_context::<RwSignal<ThemeConfig>>();

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let transform = RwSignal::new(ViewTransform::default());
	let connect = RwSignal::new(None::<ConnectState>);
	let size = RwSignal::new((0.0_f64, 0.0_f64));
	let drag: Rc<RefCell<DragState>> = Rc::new(RefCell::new(DragState::default()));
	let pan: Rc<RefCell<PanState>> = Rc::new(RefCell::new(PanState::default()));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let keydown_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));

	let (resize_cb_init, keydown_cb_init) = (resize_cb.clone(), keydown_cb.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		size.set((w, h));
		// Put the graph origin near the middle of the viewport.
		transform.set(ViewTransform {
			x: w / 2.0,
			y: h / 3.0,
			k: 1.0,
		});

		let canvas_resize = canvas.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			size.set((nw, nh));
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		*keydown_cb_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			// Shortcuts stay out of the way while typing in panels.
			if let Some(target) = ev.target() {
				if target.dyn_ref::<HtmlInputElement>().is_some()
					|| target.dyn_ref::<HtmlTextAreaElement>().is_some()
				{
					return;
				}
			}
			match ev.key().as_str() {
				"n" if !ev.ctrl_key() && !ev.meta_key() => {
					ev.prevent_default();
					store.update(|s| {
						s.add_node(None);
					});
				}
				"Delete" => {
					ev.prevent_default();
					store.update(|s| s.delete_selected());
				}
				"Escape" => {
					ev.prevent_default();
					store.update(|s| s.deselect_all());
				}
				"ArrowUp" => {
					ev.prevent_default();
					store.update(|s| s.navigate(Direction::Up));
				}
				"ArrowDown" => {
					ev.prevent_default();
					store.update(|s| s.navigate(Direction::Down));
				}
				"ArrowLeft" => {
					ev.prevent_default();
					store.update(|s| s.navigate(Direction::Left));
				}
				"ArrowRight" => {
					ev.prevent_default();
					store.update(|s| s.navigate(Direction::Right));
				}
				"z" | "Z" if ev.ctrl_key() || ev.meta_key() => {
					ev.prevent_default();
					if ev.shift_key() {
						store.update(|s| s.redo());
					} else {
						store.update(|s| s.undo());
					}
				}
				"y" if ev.ctrl_key() || ev.meta_key() => {
					ev.prevent_default();
					store.update(|s| s.redo());
				}
				_ => {}
			}
		}));
		if let Some(ref cb) = *keydown_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}
	});

	// Redraw whenever the store, theme, viewport or an in-flight gesture
	// changes; there is no animation loop to drive.
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = size.get();
		if w <= 0.0 || h <= 0.0 {
			return;
		}
		let ctx: web_sys::CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		store.with(|s| {
			transform.with(|t| {
				connect.with(|c| render::render(s, t, c.as_ref(), theme.get(), &ctx, w, h));
			});
		});
	});

	let drag_md = drag.clone();
	let pan_md = pan.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);
		let t = transform.get_untracked();
		let (gx, gy) = t.screen_to_graph(x, y);

		if let Some(id) = store.with_untracked(|s| node_at_position(s, gx, gy)) {
			if ev.shift_key() {
				connect.set(Some(ConnectState {
					source_id: id,
					to_x: gx,
					to_y: gy,
				}));
			} else {
				let (nx, ny) = store.with_untracked(|s| {
					s.nodes
						.iter()
						.find(|n| n.id == id)
						.map(|n| (n.x, n.y))
						.unwrap_or((gx, gy))
				});
				store.update(|s| s.select_node(&id));
				*drag_md.borrow_mut() = DragState {
					node_id: Some(id),
					grab_dx: gx - nx,
					grab_dy: gy - ny,
					moved: false,
				};
			}
		} else {
			let mut pan = pan_md.borrow_mut();
			pan.active = true;
			pan.start_x = x;
			pan.start_y = y;
			pan.transform_start_x = t.x;
			pan.transform_start_y = t.y;
		}
	};

	let drag_mm = drag.clone();
	let pan_mm = pan.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);
		let (gx, gy) = transform.get_untracked().screen_to_graph(x, y);

		let dragging = drag_mm.borrow().node_id.clone();
		if let Some(id) = dragging {
			let (dx, dy) = {
				let mut drag = drag_mm.borrow_mut();
				drag.moved = true;
				(drag.grab_dx, drag.grab_dy)
			};
			store.update(|s| s.move_node(&id, gx - dx, gy - dy));
		} else if connect.with_untracked(|c| c.is_some()) {
			connect.update(|c| {
				if let Some(c) = c {
					c.to_x = gx;
					c.to_y = gy;
				}
			});
		} else if pan_mm.borrow().active {
			let pan = pan_mm.borrow();
			transform.update(|t| {
				t.x = pan.transform_start_x + (x - pan.start_x);
				t.y = pan.transform_start_y + (y - pan.start_y);
			});
		}
	};

	let drag_mu = drag.clone();
	let pan_mu = pan.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);
		let (gx, gy) = transform.get_untracked().screen_to_graph(x, y);

		let moved = {
			let mut drag = drag_mu.borrow_mut();
			let moved = drag.moved && drag.node_id.is_some();
			*drag = DragState::default();
			moved
		};
		if moved {
			// Commit the drag through the replace path so it lands in history.
			store.update(|s| {
				let nodes = s.nodes.clone();
				s.set_nodes(nodes);
			});
		}

		if let Some(gesture) = connect.get_untracked() {
			let target = store.with_untracked(|s| node_at_position(s, gx, gy));
			if let Some(target) = target {
				if target != gesture.source_id {
					// Append without dedup; parallel edges are allowed.
					store.update(|s| {
						let mut edges = s.edges.clone();
						edges.push(MapEdge::between(&gesture.source_id, &target));
						s.set_edges(edges);
					});
				}
			}
			connect.set(None);
		}

		pan_mu.borrow_mut().active = false;
	};

	let drag_ml = drag.clone();
	let pan_ml = pan.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let moved = {
			let mut drag = drag_ml.borrow_mut();
			let moved = drag.moved && drag.node_id.is_some();
			*drag = DragState::default();
			moved
		};
		if moved {
			store.update(|s| {
				let nodes = s.nodes.clone();
				s.set_nodes(nodes);
			});
		}
		connect.set(None);
		pan_ml.borrow_mut().active = false;
	};

	let on_dblclick = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);
		let (gx, gy) = transform.get_untracked().screen_to_graph(x, y);
		if store.with_untracked(|s| node_at_position(s, gx, gy)).is_none() {
			store.update(|s| {
				s.add_node(None);
			});
		}
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		transform.update(|t| {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (t.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / t.k;
			t.x = x - (x - t.x) * ratio;
			t.y = y - (y - t.y) * ratio;
			t.k = new_k;
		});
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="mind-map-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:dblclick=on_dblclick
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
