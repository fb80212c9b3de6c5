use leptos::prelude::*;

use super::store::MindMapStore;

/// Live search over node content, notes and tag names. Clicking a result
/// selects the matching node.
#[component]
pub fn SearchPanel() -> impl IntoView {
	let store = expect_context::<RwSignal<MindMapStore>>();

	view! {
		<div class="panel search-panel">
			<div class="search-input">
				<input
					type="text"
					placeholder="Search..."
					prop:value=move || store.with(|s| s.search_query.clone())
					on:input=move |ev| store.update(|s| s.search(&event_target_value(&ev)))
				/>
				<Show when=move || store.with(|s| !s.search_query.is_empty())>
					<button class="icon" title="Clear" on:click=move |_| store.update(|s| s.search(""))>
						"×"
					</button>
				</Show>
			</div>
			<div class="search-results">
				{move || {
					store.with(|s| {
						s.search_results
							.iter()
							.map(|result| {
								let node_id = result.node_id.clone();
								view! {
									<button
										class="search-result"
										on:click=move |_| store.update(|s| s.select_node(&node_id))
									>
										<span class="result-text">{result.text.clone()}</span>
										<span class="result-kind">{result.kind.label()}</span>
									</button>
								}
							})
							.collect_view()
					})
				}}
			</div>
		</div>
	}
}
