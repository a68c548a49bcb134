//! Response header policy derived from the requested file name.

use mediahost_storage::mime_from_path;

const CACHEABLE_EXTENSIONS: &[&str] = &[
    "mp4", "avi", "mov", "wmv", "flv", "webm", "mkv", "png", "jpg", "jpeg", "gif",
];

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "wmv", "flv", "webm", "mkv"];

/// Cache policy applied to media and image files.
pub const MEDIA_CACHE_CONTROL: &str = "public, max-age=3600";

/// Content type sent for every video container; players sniff the rest.
pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Fallback content type.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Headers decided from the request path alone, before any lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPolicy {
    /// `Cache-Control` value, if the file type is cacheable.
    pub cache_control: Option<&'static str>,
    /// `Content-Type` value.
    pub content_type: &'static str,
}

impl ContentPolicy {
    /// Policy for a request path. Extension matching is case-insensitive.
    pub fn for_path(path: &str) -> Self {
        let ext = extension(path);
        let is = |list: &[&str]| ext.as_deref().is_some_and(|e| list.iter().any(|x| *x == e));

        let cache_control = is(CACHEABLE_EXTENSIONS).then_some(MEDIA_CACHE_CONTROL);
        let content_type = if is(VIDEO_EXTENSIONS) {
            VIDEO_CONTENT_TYPE
        } else {
            mime_from_path(path).unwrap_or(DEFAULT_CONTENT_TYPE)
        };

        Self {
            cache_control,
            content_type,
        }
    }
}

fn extension(path: &str) -> Option<String> {
    let name = path.rsplit('/').next()?;
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_extensions_get_mp4_hint_and_cache() {
        for path in ["/a/clip.mp4", "/a/clip.MKV", "/a/clip.mov", "/a/b.flv"] {
            let policy = ContentPolicy::for_path(path);
            assert_eq!(policy.content_type, VIDEO_CONTENT_TYPE, "{path}");
            assert_eq!(policy.cache_control, Some(MEDIA_CACHE_CONTROL), "{path}");
        }
    }

    #[test]
    fn test_images_are_cached_with_their_own_type() {
        let policy = ContentPolicy::for_path("/a/poster.JPG");
        assert_eq!(policy.content_type, "image/jpeg");
        assert_eq!(policy.cache_control, Some(MEDIA_CACHE_CONTROL));
    }

    #[test]
    fn test_other_files_are_not_cached() {
        let policy = ContentPolicy::for_path("/a/live.m3u8");
        assert_eq!(policy.content_type, "application/vnd.apple.mpegurl");
        assert_eq!(policy.cache_control, None);

        let policy = ContentPolicy::for_path("/a/blob");
        assert_eq!(policy.content_type, DEFAULT_CONTENT_TYPE);
        assert_eq!(policy.cache_control, None);
    }
}
