//! The sell form.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use ecoswap_storefront::config::MarketConfig;
use ecoswap_storefront::forms::ProductDraft;

use super::{CliError, Market};

/// Build a draft from command-line input, encoding the picture as a
/// `data:` URL.
///
/// # Errors
///
/// Returns `CliError::Image` if the picture cannot be read.
pub fn draft(
    title: String,
    description: String,
    category: String,
    price: String,
    image: &Path,
) -> Result<ProductDraft, CliError> {
    Ok(ProductDraft {
        title,
        description,
        category,
        price,
        image: image_data_url(image)?,
    })
}

/// List the draft and confirm.
///
/// # Errors
///
/// Returns an error if the draft is invalid or the catalog cannot be saved.
#[allow(clippy::print_stdout)]
pub fn sell(
    market: &mut Market,
    draft: &ProductDraft,
    config: &MarketConfig,
) -> Result<(), CliError> {
    let product = market.sell(draft)?;
    println!(
        "Listed {} [{}] in {} for {}",
        product.title,
        product.id,
        product.category,
        product.price.display(config.currency)
    );
    Ok(())
}

fn image_data_url(path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!(
        "data:{};base64,{}",
        mime_for(path),
        STANDARD.encode(bytes)
    ))
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for(Path::new("chair.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("a/b/photo.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("notes")), "application/octet-stream");
    }

    #[test]
    fn test_image_becomes_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let draft = draft(
            "Dot".to_owned(),
            "A single pixel".to_owned(),
            "Others".to_owned(),
            "1".to_owned(),
            &path,
        )
        .unwrap();
        assert_eq!(draft.image, "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn test_missing_image_file() {
        let err = image_data_url(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, CliError::Image { .. }));
    }
}
