use serde::Serialize;
use url::Url;

/// A merch design shown in the portfolio.
///
/// Designs are written out-of-band; the service only lists them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Design {
    pub title: String,
    pub description: Option<String>,

    /// Preview mockup image
    pub image_url: Url,

    /// Link to the marketplace listing or store
    pub marketplace_url: Option<Url>,

    pub tags: Vec<String>,

    /// Available shirt colors (hex or names)
    pub colors: Vec<String>,

    pub price: Option<f64>,
}

impl Design {
    pub const COLLECTION: &'static str = "design";
    pub const ENTITY: &'static str = "Design";
}
