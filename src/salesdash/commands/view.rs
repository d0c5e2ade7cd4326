use crate::commands::CmdResult;
use crate::error::Result;
use crate::page::{slice, PageInfo};
use crate::store::RecordStore;

/// Lists one page of the visible records. `page` is zero-based.
pub fn run(store: &RecordStore, page: usize, size: usize) -> Result<CmdResult> {
    let visible = store.visible();
    let rows = slice(visible, page, size).to_vec();
    let info = PageInfo::new(page, size, visible.len());
    Ok(CmdResult::default().with_listed_records(rows, info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn lists_requested_page() {
        let values: Vec<f64> = (1..=12).map(f64::from).collect();
        let store = StoreFixture::new().with_values(&values).build();

        let result = run(&store, 1, 5).unwrap();
        let ids: Vec<_> = result.listed_records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["item-5", "item-6", "item-7", "item-8", "item-9"]);

        let page = result.page.unwrap();
        assert_eq!((page.first, page.last, page.total, page.pages), (6, 10, 12, 3));
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let store = StoreFixture::new().with_values(&[1.0]).build();
        let result = run(&store, 4, 10).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.page.unwrap().total, 1);
    }
}
