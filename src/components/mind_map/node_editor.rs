use leptos::prelude::*;

use super::store::MindMapStore;

/// Content and notes editing for the selected node, the two dialogs of the
/// node toolbar folded into one side panel.
#[component]
pub fn NodeEditor() -> impl IntoView {
	let store = expect_context::<RwSignal<MindMapStore>>();
	let content = RwSignal::new(String::new());
	let notes = RwSignal::new(String::new());

	// Reload the drafts only when the selection moves to a different node;
	// unrelated store changes must not clobber half-typed text.
	Effect::new(move |prev: Option<Option<String>>| {
		let selected = store.with(|s| s.selected_node_id.clone());
		if prev.is_none_or(|p| p != selected) {
			let current = store.with_untracked(|s| {
				selected
					.as_ref()
					.and_then(|id| s.nodes.iter().find(|n| &n.id == id))
					.map(|n| (n.content.clone(), n.notes.clone()))
			});
			let (c, n) = current.unwrap_or_default();
			content.set(c);
			notes.set(n);
		}
		selected
	});

	let save_content = move |_| {
		let Some(id) = store.with_untracked(|s| s.selected_node_id.clone()) else {
			return;
		};
		store.update(|s| s.update_content(&id, &content.get_untracked()));
	};

	let save_notes = move |_| {
		let Some(id) = store.with_untracked(|s| s.selected_node_id.clone()) else {
			return;
		};
		store.update(|s| s.update_notes(&id, &notes.get_untracked()));
	};

	view! {
		<Show when=move || store.with(|s| s.selected_node_id.is_some())>
			<div class="panel node-editor">
				<h3>"Node"</h3>
				<label>"Content"</label>
				<textarea
					rows="3"
					placeholder="Enter node content..."
					prop:value=content
					on:input=move |ev| content.set(event_target_value(&ev))
				></textarea>
				<button on:click=save_content>"Save"</button>
				<label>"Notes"</label>
				<textarea
					rows="6"
					placeholder="Add notes here..."
					prop:value=notes
					on:input=move |ev| notes.set(event_target_value(&ev))
				></textarea>
				<button on:click=save_notes>"Save Notes"</button>
			</div>
		</Show>
	}
}
