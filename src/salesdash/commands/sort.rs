use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sort::{SortDirection, SortField};
use crate::store::{Action, RecordStore};

pub fn run(store: &mut RecordStore, field: SortField, direction: SortDirection) -> Result<CmdResult> {
    store.apply(Action::SetSort { field, direction });
    Ok(CmdResult::default().with_message(sorted_message(store)))
}

/// Header-click behaviour: ascending first, then flip.
pub fn toggle(store: &mut RecordStore, field: SortField) -> Result<CmdResult> {
    store.apply(Action::ToggleSort(field));
    Ok(CmdResult::default().with_message(sorted_message(store)))
}

fn sorted_message(store: &RecordStore) -> CmdMessage {
    match store.sort().field {
        Some(field) => CmdMessage::info(format!(
            "Sorted by {} ({})",
            field,
            store.sort().direction
        )),
        None => CmdMessage::info("Unsorted"),
    }
}
