use portfolio_core::PageConfig;

use crate::dom::get_document;

/// Id of the optional `<script type="application/json">` override block
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Page configuration, with any inline override applied
pub fn load() -> PageConfig {
    let json = get_document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    PageConfig::from_json_or_default(json.as_deref())
}
