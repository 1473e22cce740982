use scraper::{Html, Selector};
use tessera_common::BootstrapError;

/// Pick the first element matching `selector` whose trimmed text contains
/// `marker`.
pub fn select_user_agent(
    html: &str,
    selector: &str,
    marker: &str,
) -> Result<Option<String>, BootstrapError> {
    let parsed = Selector::parse(selector)
        .map_err(|e| BootstrapError::InvalidSelector(format!("{selector}: {e}")))?;
    let document = Html::parse_document(html);
    let found = document
        .select(&parsed)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .find(|text| text.contains(marker));
    Ok(found)
}
