use leptos::prelude::*;
use uuid::Uuid;

use super::store::MindMapStore;
use super::types::{TAG_PALETTE, Tag};

fn random_palette_color() -> &'static str {
	let idx = (js_sys::Math::random() * TAG_PALETTE.len() as f64).floor() as usize;
	TAG_PALETTE[idx.min(TAG_PALETTE.len() - 1)]
}

/// Tag editor for the selected node; hidden while nothing is selected.
#[component]
pub fn TagPanel() -> impl IntoView {
	let store = expect_context::<RwSignal<MindMapStore>>();
	let draft = RwSignal::new(String::new());

	let add_tag = move |_| {
		let name = draft.get_untracked().trim().to_string();
		if name.is_empty() {
			return;
		}
		let Some(node_id) = store.with_untracked(|s| s.selected_node_id.clone()) else {
			return;
		};
		let tag = Tag {
			id: Uuid::new_v4().to_string(),
			name,
			color: random_palette_color().to_string(),
		};
		store.update(|s| s.add_tag(&node_id, tag));
		draft.set(String::new());
	};

	view! {
		<Show when=move || store.with(|s| s.selected_node_id.is_some())>
			<div class="panel tag-panel">
				<h3>"Tags"</h3>
				<div class="tag-input">
					<input
						type="text"
						placeholder="New tag..."
						prop:value=draft
						on:input=move |ev| draft.set(event_target_value(&ev))
					/>
					<button class="icon" title="Add Tag" on:click=add_tag>
						"+"
					</button>
				</div>
				<div class="tag-list">
					{move || {
						let tags = store.with(|s| {
							s.selected_node_id
								.as_ref()
								.and_then(|id| s.nodes.iter().find(|n| &n.id == id))
								.map(|n| n.tags.clone())
								.unwrap_or_default()
						});
						tags.into_iter()
							.map(|tag| {
								let tag_id = tag.id.clone();
								view! {
									<span class=format!("tag tag-{}", tag.color)>
										{tag.name.clone()}
										<button
											class="icon"
											title="Remove Tag"
											on:click=move |_| {
												let tag_id = tag_id.clone();
												store.update(move |s| {
													if let Some(node_id) = s.selected_node_id.clone() {
														s.remove_tag(&node_id, &tag_id);
													}
												});
											}
										>
											"×"
										</button>
									</span>
								}
							})
							.collect_view()
					}}
				</div>
			</div>
		</Show>
	}
}
