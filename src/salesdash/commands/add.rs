use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordDraft;
use crate::store::{Action, Applied, RecordStore};
use tracing::warn;

pub fn run(store: &mut RecordStore, draft: &RecordDraft) -> Result<CmdResult> {
    let candidate = draft.validate().inspect_err(|e| {
        warn!(error = %e, "rejected new record");
    })?;

    let mut result = CmdResult::default();
    if let Applied::Added(record) = store.apply(Action::Add(candidate)) {
        result.add_message(CmdMessage::success(format!(
            "Record added ({}): {}",
            record.id, record.name
        )));
        if !store.visible().iter().any(|r| r.id == record.id) {
            result.add_message(CmdMessage::warning(
                "The new record is hidden by the current filters or search",
            ));
        }
        result.affected_records.push(record);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::DashError;
    use crate::filter::FilterPatch;
    use crate::model::Category;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn adds_valid_draft() {
        let mut store = StoreFixture::new().with_values(&[1.0]).build();
        let draft = RecordDraft::new("Scarf", "25", "Clothing", "2022-12-01");

        let result = run(&mut store, &draft).unwrap();

        assert_eq!(store.records().len(), 2);
        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.affected_records[0].category, Category::Clothing);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn notes_when_new_record_is_filtered_out() {
        let mut store = StoreFixture::new().build();
        store.set_filters(FilterPatch::categories([Category::Toys]));
        let draft = RecordDraft::new("Scarf", "25", "Clothing", "2022-12-01");

        let result = run(&mut store, &draft).unwrap();

        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert!(store.visible().is_empty());
    }

    #[test]
    fn invalid_draft_leaves_store_untouched() {
        let mut store = StoreFixture::new().with_values(&[1.0]).build();
        let draft = RecordDraft::new("Scarf", "cheap", "Clothing", "2022-12-01");

        let err = run(&mut store, &draft).unwrap_err();

        assert!(matches!(err, DashError::InvalidField { field: "value", .. }));
        assert_eq!(store.records().len(), 1);
    }
}
