use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, FileReader, HtmlAnchorElement, HtmlInputElement, Url};

use crate::components::theme::ThemeConfig;

use super::markdown;
use super::store::MindMapStore;

/// Fixed control strip: add node, import/export, undo/redo, theme toggles.
#[component]
pub fn Toolbar() -> impl IntoView {
	let store = expect_context::<RwSignal<MindMapStore>>();
	let theme = expect_context::<RwSignal<ThemeConfig>>();
	let file_input = NodeRef::<leptos::html::Input>::new();

	let on_export = move |_| {
		let outline = store.with_untracked(|s| markdown::export_outline(&s.nodes, &s.edges));
		download_markdown(&outline);
	};

	let on_import = move |_| {
		let Some(input) = file_input.get_untracked() else {
			return;
		};
		let input: HtmlInputElement = input.into();
		import_file(&input, store);
	};

	view! {
		<div class="toolbar">
			<button
				title="New Node"
				on:click=move |_| {
					store.update(|s| {
						s.add_node(None);
					})
				}
			>
				"+"
			</button>
			<label class="file-button" title="Import">
				"⤒"
				<input node_ref=file_input type="file" accept=".md" class="hidden" on:change=on_import />
			</label>
			<button title="Export" on:click=on_export>
				"⤓"
			</button>
			<button
				title="Undo"
				prop:disabled=move || store.with(|s| !s.can_undo())
				on:click=move |_| store.update(|s| s.undo())
			>
				"↶"
			</button>
			<button
				title="Redo"
				prop:disabled=move || store.with(|s| !s.can_redo())
				on:click=move |_| store.update(|s| s.redo())
			>
				"↷"
			</button>
			<button title="Toggle Theme" on:click=move |_| theme.update(|t| t.toggle_dark())>
				{move || if theme.get().is_dark { "☀" } else { "☾" }}
			</button>
			<button title="Toggle High Contrast" on:click=move |_| theme.update(|t| t.toggle_contrast())>
				"◐"
			</button>
		</div>
	}
}

// Hand the outline to the browser as a file download named mindmap.md.
fn download_markdown(outline: &str) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};

	let parts = js_sys::Array::of1(&JsValue::from_str(outline));
	let options = BlobPropertyBag::new();
	options.set_type("text/markdown");
	let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &options) else {
		warn!("could not build the export blob");
		return;
	};
	let Ok(url) = Url::create_object_url_with_blob(&blob) else {
		return;
	};

	if let Some(anchor) = document
		.create_element("a")
		.ok()
		.and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
	{
		anchor.set_href(&url);
		anchor.set_download("mindmap.md");
		if let Some(body) = document.body() {
			let _ = body.append_child(&anchor);
			anchor.click();
			let _ = body.remove_child(&anchor);
		}
	}
	let _ = Url::revoke_object_url(&url);
}

// Read the picked file asynchronously, then apply the parse as a single
// synchronous replace once the contents arrive.
fn import_file(input: &HtmlInputElement, store: RwSignal<MindMapStore>) {
	let Some(file) = input.files().and_then(|files| files.get(0)) else {
		return;
	};
	let Ok(reader) = FileReader::new() else {
		return;
	};

	let reader_onload = reader.clone();
	let onload = Closure::once_into_js(move || {
		let Some(text) = reader_onload.result().ok().and_then(|v| v.as_string()) else {
			warn!("imported file was not readable as text");
			return;
		};
		let (nodes, edges) = markdown::import_outline(&text);
		store.update(|s| {
			s.set_nodes(nodes);
			s.set_edges(edges);
		});
	});
	reader.set_onload(Some(onload.unchecked_ref()));
	if reader.read_as_text(&file).is_err() {
		warn!("could not start reading the imported file");
	}
	input.set_value("");
}
