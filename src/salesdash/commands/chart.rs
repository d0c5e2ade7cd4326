use crate::chart::category_totals;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Per-category totals over the full record set. The chart ignores the table's
/// filters and search.
pub fn run(store: &RecordStore) -> Result<CmdResult> {
    let totals = category_totals(store.records());
    let result = CmdResult::default();
    if totals.is_empty() {
        return Ok(result.with_message(CmdMessage::info("No data available")));
    }
    Ok(result.with_chart(totals))
}
