use crate::commands::{visible_summary, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Action, Applied, RecordStore};

/// Flips the selection state of each id.
///
/// Ids are not checked against the record set; clients only offer rows they
/// rendered.
pub fn toggle<I: AsRef<str>>(store: &mut RecordStore, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        if let Applied::SelectionToggled { id, selected } =
            store.apply(Action::ToggleSelection(id.as_ref().to_string()))
        {
            let verb = if selected { "Selected" } else { "Deselected" };
            result.add_message(CmdMessage::info(format!(
                "{} {} ({} selected)",
                verb,
                id,
                store.selected_count()
            )));
        }
    }

    Ok(result)
}

pub fn delete_selected(store: &mut RecordStore) -> Result<CmdResult> {
    if store.selected_count() == 0 {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No records selected")));
    }

    let removed = match store.apply(Action::DeleteSelected) {
        Applied::DeletedSelected(removed) => removed,
        _ => Vec::new(),
    };

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted {} selected record{}",
        removed.len(),
        if removed.len() == 1 { "" } else { "s" }
    )));
    result.add_message(visible_summary(store));
    Ok(result.with_affected_records(removed))
}
