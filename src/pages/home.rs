use leptos::prelude::*;

use crate::components::mind_map::{
	MindMapCanvas, MindMapStore, NodeEditor, STORAGE_KEY, SearchPanel, TagPanel, Toolbar,
};
use crate::components::theme::{THEME_KEY, ThemeConfig};
use crate::storage;

fn load_store() -> MindMapStore {
	match storage::load::<MindMapStore>(STORAGE_KEY) {
		Some(mut store) => {
			store.sanitize();
			store
		}
		None => MindMapStore::sample(),
	}
}

/// Mind-map editor page.
#[component]
pub fn Home() -> impl IntoView {
	let store = RwSignal::new(load_store());
	let theme = RwSignal::new(ThemeConfig::load());
	provide_context(store);
	provide_context(theme);

	// Both stores are written whole on every change, fire-and-forget.
	Effect::new(move |_| store.with(|s| storage::save(STORAGE_KEY, s)));
	Effect::new(move |_| {
		let theme = theme.get();
		theme.apply();
		storage::save(THEME_KEY, &theme);
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="editor">
				<MindMapCanvas />
				<Toolbar />
				<SearchPanel />
				<TagPanel />
				<NodeEditor />
			</div>
		</ErrorBoundary>
	}
}
