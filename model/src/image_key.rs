/// An S3 object key as delivered in an upload notification.
///
/// Event notifications percent-encode the object key and encode spaces as
/// `+`. The decoded form is what every downstream service call expects; the
/// raw form is what gets echoed back out in the published payload.
#[derive(Debug, Clone)]
pub struct ImageKey {
    raw: String,
    decoded: String,
}

/// The event carried a key that does not percent-decode to UTF-8.
#[derive(Debug, thiserror::Error)]
#[error("could not decode object key {key}")]
pub struct InvalidImageKey {
    key: String,
    source: std::string::FromUtf8Error,
}

impl TryFrom<&str> for ImageKey {
    type Error = InvalidImageKey;

    fn try_from(raw: &str) -> Result<Self, InvalidImageKey> {
        let plus_as_space = raw.replace('+', " ");
        let decoded = urlencoding::decode(&plus_as_space)
            .map_err(|source| InvalidImageKey {
                key: raw.to_string(),
                source,
            })?
            .into_owned();

        Ok(Self {
            raw: raw.to_string(),
            decoded,
        })
    }
}

impl ImageKey {
    /// The key exactly as the event delivered it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The percent-decoded key, which is the object's actual key in the
    /// bucket.
    pub fn decoded(&self) -> &str {
        &self.decoded
    }

    /// The display name of the image: the final path segment of the decoded
    /// key.
    pub fn display_name(&self) -> &str {
        self.decoded.rsplit('/').next().unwrap_or(&self.decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_display_name_from_final_path_segment() {
        let key = ImageKey::try_from("uploads/2024/photo1.jpg").unwrap();
        assert_eq!(key.display_name(), "photo1.jpg");
        assert_eq!(key.decoded(), "uploads/2024/photo1.jpg");
        assert_eq!(key.raw(), "uploads/2024/photo1.jpg");
    }

    #[test]
    fn key_without_separator_is_its_own_display_name() {
        let key = ImageKey::try_from("photo1.jpg").unwrap();
        assert_eq!(key.display_name(), "photo1.jpg");
    }

    #[test]
    fn decodes_percent_encoding_and_plus_as_space() {
        let key = ImageKey::try_from("uploads/my+photo%281%29.jpg").unwrap();
        assert_eq!(key.decoded(), "uploads/my photo(1).jpg");
        assert_eq!(key.display_name(), "my photo(1).jpg");
        assert_eq!(key.raw(), "uploads/my+photo%281%29.jpg");
    }

    #[test]
    fn rejects_keys_that_decode_to_invalid_utf8() {
        assert!(ImageKey::try_from("uploads/%ff%fe.jpg").is_err());
    }
}
