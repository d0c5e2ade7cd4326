use crate::commands::{visible_summary, CmdResult};
use crate::error::Result;
use crate::store::{Action, RecordStore};

/// Replaces the search query. An empty query clears the search.
pub fn run(store: &mut RecordStore, query: &str) -> Result<CmdResult> {
    store.apply(Action::SetSearch(query.to_string()));
    Ok(CmdResult::default().with_message(visible_summary(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn narrows_and_clears() {
        let mut store = StoreFixture::new()
            .with_record("Desk", 100.0, Category::Furniture, "2021-01-01")
            .with_record("Bread", 3.0, Category::Food, "2021-01-01")
            .build();

        let result = run(&mut store, "DESK").unwrap();
        assert_eq!(store.visible().len(), 1);
        assert_eq!(result.messages[0].content, "Showing 1 of 2 records");

        run(&mut store, "").unwrap();
        assert_eq!(store.visible().len(), 2);
    }
}
