use crate::domain::{BrowsablePage, PageElement};
use crate::error::Result;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, warn};

/// Resolves every `(key, locator)` pair against `page`: the text of the
/// first matching element, or `None` when nothing matches. Missing
/// elements are not errors and never stop the remaining lookups.
pub async fn extract_fields<'a, P, K>(
    page: &P,
    fields: impl IntoIterator<Item = (K, &'a str)>,
) -> Result<HashMap<K, Option<String>>>
where
    P: BrowsablePage + ?Sized,
    K: Eq + Hash + Debug,
{
    let mut values = HashMap::new();

    for (key, locator) in fields {
        debug!("Getting text content for {:?} with selector: {}", key, locator);
        let text = match page.query_selector(locator).await? {
            Some(element) => element.text_content().await?,
            None => {
                warn!("No element found for {:?} with selector: {}", key, locator);
                None
            }
        };
        values.insert(key, text);
    }

    Ok(values)
}
