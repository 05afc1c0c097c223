//! `hexvibe theme [light|dark]`.

use std::path::Path;

use anyhow::Result;
use hexvibe_core::settings::{load_appearance, save_appearance};
use hexvibe_core::{Appearance, Storage};

use super::open_storage;
use crate::output;

pub fn handle(data_dir: &Path, appearance: Option<String>) -> Result<()> {
    let mut storage = open_storage(data_dir)?;
    let (current, changed) = apply(&mut storage, appearance.as_deref())?;
    output::data("theme", &serde_json::json!({ "appearance": current, "changed": changed }));
    if !output::is_json() {
        if changed {
            output::success(&format!("Appearance set to {current}"));
        } else {
            output::kv("appearance", current.as_str());
        }
    }
    Ok(())
}

/// Without a value, reads the stored appearance. Returns it and whether it was written.
fn apply<S: Storage + ?Sized>(storage: &mut S, requested: Option<&str>) -> Result<(Appearance, bool)> {
    match requested {
        None => Ok((load_appearance(storage), false)),
        Some(raw) => {
            let appearance: Appearance = raw.parse()?;
            save_appearance(storage, appearance)?;
            Ok((appearance, true))
        }
    }
}
