//! Whole-state snapshots in browser local storage.
//!
//! Writes are fire-and-forget side effects of every state change, not
//! transactional. Anything that fails to load or store is logged and
//! otherwise ignored; the editor keeps running.

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

/// Deserialize the value stored under `key`, if any.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
	let raw = local_storage()?.get_item(key).ok().flatten()?;
	match serde_json::from_str(&raw) {
		Ok(value) => Some(value),
		Err(err) => {
			warn!("discarding stored state under {key:?}: {err}");
			None
		}
	}
}

/// Serialize `value` under `key`.
pub fn save<T: Serialize>(key: &str, value: &T) {
	let Some(storage) = local_storage() else {
		return;
	};
	match serde_json::to_string(value) {
		Ok(json) => {
			if storage.set_item(key, &json).is_err() {
				warn!("failed to persist {key:?}");
			}
		}
		Err(err) => warn!("failed to serialize {key:?}: {err}"),
	}
}
