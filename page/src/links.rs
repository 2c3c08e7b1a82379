//! Outbound navigation targets.
//!
//! The APK and web map links embed the discovered version. Until a version is
//! known they fall back to a target that still works (the release folder, the
//! bare map) rather than a broken `volcanoyt-.apk`.

use url::Url;

pub const ANDROID_RELEASES_URL: &str = "https://file2.yuuki.me/p/Local_EU/App/Android/VolcanoYT/";
pub const WEB_MAP_URL: &str = "https://map.volcanoyt.com/";
pub const WEB_PORTAL_URL: &str = "https://volcanoyt.com";
pub const API_URL: &str = "https://api.volcanoyt.com";
pub const GITHUB_URL: &str = "https://github.com/VolcanoYT";

/// Badge label for a known version.
pub fn badge_text(version: &str) -> String {
    format!("v{version}")
}

/// Direct APK download for `version`, or the release folder.
pub fn android_apk_url(version: Option<&str>) -> String {
    let Some(version) = version else {
        return ANDROID_RELEASES_URL.to_string();
    };
    let Ok(mut url) = Url::parse(ANDROID_RELEASES_URL) else {
        return ANDROID_RELEASES_URL.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(&format!("volcanoyt-{version}.apk"));
    }
    url.into()
}

/// Web map pinned to `version` (busts the map's own asset cache).
pub fn web_map_url(version: Option<&str>) -> String {
    let Some(version) = version else {
        return WEB_MAP_URL.to_string();
    };
    let Ok(mut url) = Url::parse(WEB_MAP_URL) else {
        return WEB_MAP_URL.to_string();
    };
    url.query_pairs_mut().append_pair("v", version);
    url.into()
}

/// A social destination shown in the "Stay Connected" block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialDestination {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    /// Brand background, CSS value.
    pub background: &'static str,
}

pub const SOCIAL_DESTINATIONS: &[SocialDestination] = &[
    SocialDestination {
        label: "Telegram",
        href: "https://t.me/VolcanoYT",
        icon: crate::components::ICON_TELEGRAM,
        background: "#0088cc",
    },
    SocialDestination {
        label: "YouTube",
        href: "https://youtube.com/@VolcanoYT",
        icon: crate::components::ICON_YOUTUBE,
        background: "#ff0000",
    },
    SocialDestination {
        label: "Twitter (Main)",
        href: "https://twitter.com/VolcanoYTz",
        icon: crate::components::ICON_X,
        background: "#000000",
    },
    SocialDestination {
        label: "Twitter (Bot)",
        href: "https://x.com/VolcanoEWS",
        icon: crate::components::ICON_X,
        background: "#000000",
    },
    SocialDestination {
        label: "Bluesky (Main)",
        href: "https://bsky.app/profile/volcanoyt.com",
        icon: crate::components::ICON_BLUESKY,
        background: "#000000",
    },
    SocialDestination {
        label: "Bluesky (Bot)",
        href: "https://bsky.app/profile/ews.volcanoyt.com",
        icon: crate::components::ICON_BLUESKY,
        background: "#000000",
    },
    SocialDestination {
        label: "Facebook",
        href: "https://facebook.com/volcanoytz",
        icon: crate::components::ICON_FACEBOOK,
        background: "#1877f2",
    },
    SocialDestination {
        label: "Instagram",
        href: "https://instagram.com/volcanoytz",
        icon: crate::components::ICON_INSTAGRAM,
        background: "linear-gradient(45deg, #f09433, #dc2743, #bc1888)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn apk_url_embeds_version() {
        assert_eq!(
            android_apk_url(Some("2.0.0")),
            "https://file2.yuuki.me/p/Local_EU/App/Android/VolcanoYT/volcanoyt-2.0.0.apk"
        );
    }

    #[test]
    fn apk_url_without_version_points_at_release_folder() {
        assert_eq!(android_apk_url(None), ANDROID_RELEASES_URL);
    }

    #[test]
    fn apk_url_escapes_path_characters() {
        let url = android_apk_url(Some("2.0/../evil"));
        assert!(url.ends_with("volcanoyt-2.0%2F..%2Fevil.apk"), "{url}");
    }

    #[test]
    fn web_map_url_pins_version() {
        assert_eq!(web_map_url(Some("1.4.2")), "https://map.volcanoyt.com/?v=1.4.2");
        assert_eq!(web_map_url(None), "https://map.volcanoyt.com/");
    }

    #[test]
    fn badge_prefixes_v() {
        assert_eq!(badge_text("1.4.2"), "v1.4.2");
    }

    #[test]
    fn eight_social_destinations() {
        assert_eq!(SOCIAL_DESTINATIONS.len(), 8);
        assert!(SOCIAL_DESTINATIONS.iter().all(|d| d.href.starts_with("https://")));
    }
}
