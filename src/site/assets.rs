use crate::content::EntryCollection;

/// Image URLs come from the content store protocol-relative (`//...`).
pub fn absolute_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url.to_string()
    }
}

/// Resolves an asset link against the fetched includes. An id that did
/// not come back with the query yields `None`.
pub fn resolve_asset_url(asset_id: Option<&str>, collection: &EntryCollection) -> Option<String> {
    let asset_id = asset_id?;
    let url = collection
        .find_asset(asset_id)
        .and_then(|asset| asset.fields.file.as_ref())
        .map(|file| absolute_url(&file.url));

    if url.is_none() {
        tracing::debug!("Asset {} missing from resolved includes", asset_id);
    }
    url
}
