use crate::commands::{visible_summary, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Action, Applied, RecordStore};

/// Deletes each id. Unknown ids are reported, not treated as errors.
pub fn run<I: AsRef<str>>(store: &mut RecordStore, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        match store.apply(Action::Delete(id.to_string())) {
            Applied::Deleted(Some(record)) => {
                result.add_message(CmdMessage::success(format!(
                    "Record deleted ({}): {}",
                    record.id, record.name
                )));
                result.affected_records.push(record);
            }
            _ => result.add_message(CmdMessage::info(format!("No record with id {}", id))),
        }
    }

    result.add_message(visible_summary(store));
    Ok(result)
}
