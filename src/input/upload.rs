//! Reading uploaded artwork from disk

use std::fs;
use std::path::Path;

use image::ImageFormat;

use crate::error::UploadError;
use crate::model::ImageData;

/// Read an image file and convert it to an embeddable data URL
pub fn read_image(path: &Path) -> Result<ImageData, UploadError> {
    let bytes = fs::read(path).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mime = sniff_mime(&bytes).ok_or_else(|| UploadError::UnknownFormat(path.to_path_buf()))?;
    log::debug!("Read {} ({}, {} bytes)", path.display(), mime, bytes.len());

    Ok(ImageData::from_bytes(mime, &bytes))
}

/// Detect the image type from its content
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if is_svg(bytes) {
        return Some("image/svg+xml");
    }

    match image::guess_format(bytes).ok()? {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

fn is_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let s = String::from_utf8_lossy(head);
    let trimmed = s.trim_start();
    trimmed.starts_with("<svg")
        || (trimmed.starts_with("<?xml") && s.contains("<svg"))
        || trimmed.starts_with("<!DOCTYPE svg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

    #[test]
    fn test_sniff_png_and_svg() {
        assert_eq!(sniff_mime(PNG_MAGIC), Some("image/png"));
        assert_eq!(
            sniff_mime(b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>"),
            Some("image/svg+xml")
        );
        assert_eq!(sniff_mime(b"plain text"), None);
    }

    #[test]
    fn test_read_image_builds_data_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PNG_MAGIC).unwrap();

        let image = read_image(file.path()).unwrap();
        assert_eq!(image.mime(), "image/png");
        assert!(image.data_url().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_read_image_rejects_unknown_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not an image").unwrap();

        assert!(matches!(
            read_image(file.path()),
            Err(UploadError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_image(Path::new("/nonexistent/icon.png")).unwrap_err();
        assert!(matches!(err, UploadError::Read { .. }));
    }
}
