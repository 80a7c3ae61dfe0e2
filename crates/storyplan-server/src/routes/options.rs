use axum::Json;
use storyplan_core::options::Options;

/// GET /api/options — the selectable option lists for the planner UI.
///
/// Always served from the catalog; clients that cannot reach this
/// endpoint derive the identical set locally.
pub async fn get_options() -> Json<Options> {
    Json(Options::from_catalog())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_catalog_derived_options() {
        let Json(options) = get_options().await;
        assert_eq!(options, Options::from_catalog());
        assert_eq!(options.platforms["youtube"], "YouTube");
    }
}
