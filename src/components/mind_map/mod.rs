mod component;
mod layout;
mod markdown;
mod node_editor;
mod render;
mod search_panel;
mod store;
mod tag_panel;
mod toolbar;
mod types;

pub use component::MindMapCanvas;
pub use layout::place_new_node;
pub use markdown::{export_outline, import_outline};
pub use node_editor::NodeEditor;
pub use search_panel::SearchPanel;
pub use store::{DEFAULT_NODE_CONTENT, Direction, MindMapStore, STORAGE_KEY};
pub use tag_panel::TagPanel;
pub use toolbar::Toolbar;
pub use types::{MapEdge, MapNode, MatchKind, SearchResult, Snapshot, TAG_PALETTE, Tag};
