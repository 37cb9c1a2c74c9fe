#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets" // Served by trunk when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "https://cdn.digitalsupremacy.in/assets"
}

/// Absolute URL for a bundled asset path. Full URLs pass through untouched
/// so externally hosted media can sit in the same data tables.
pub fn asset(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", get_asset_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_the_asset_base() {
        assert_eq!(
            asset("images/nexo.jpg"),
            format!("{}/images/nexo.jpg", get_asset_base())
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let url = "https://images.unsplash.com/photo-1?w=800";
        assert_eq!(asset(url), url);
    }
}
