//! Static brand/content manifest consumed by the marketing frontend.
//!
//! The document is a fixed literal: it is built once per process and every
//! caller receives the same instance.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Serialize;

/// Design tokens, hero assets, and animation timing for the website.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestDocument {
    pub project: &'static str,
    pub domain: &'static str,
    /// Color token name to hex/rgba value, in display order.
    pub palette: IndexMap<&'static str, &'static str>,
    pub fonts: Vec<&'static str>,
    pub og: OpenGraph,
    pub meta_keywords: &'static str,
    pub assets: Vec<ManifestAsset>,
    pub gsap_config: AnimationConfig,
}

/// OpenGraph metadata for link previews.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestAsset {
    pub key: &'static str,
    pub description: &'static str,
    pub alt_text: &'static str,
    /// Page slot the asset is rendered into.
    pub placement: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationConfig {
    /// Seconds.
    pub default_duration: f64,
    pub ease: &'static str,
    /// Seconds between staggered children.
    pub stagger: f64,
    /// Layer name to scroll offset, back to front.
    pub parallax: IndexMap<&'static str, ParallaxOffset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallaxOffset {
    #[serde(rename = "translateY")]
    pub translate_y: &'static str,
}

static MANIFEST: LazyLock<ManifestDocument> = LazyLock::new(build_manifest);

/// The process-wide manifest.
pub fn manifest() -> &'static ManifestDocument {
    &MANIFEST
}

fn build_manifest() -> ManifestDocument {
    ManifestDocument {
        project: "Axalon Systems \u{2014} Brand Visuals & Web Hero Suite",
        domain: "axalonsystems.com",
        palette: IndexMap::from([
            ("bg", "#0B0D10"),
            ("bg2", "#111318"),
            ("surface", "#161A20"),
            ("primary", "#00D1B2"),
            ("secondary", "#6EE7F9"),
            ("text", "#E5E7EB"),
            ("divider", "rgba(255,255,255,0.08)"),
        ]),
        fonts: vec!["Inter", "Space Grotesk", "JetBrains Mono"],
        og: OpenGraph {
            title: "Axalon Systems -- Autonomous inspection drones",
            description: "AI-enabled, modular UAS for precise data capture and automated \
                          reporting -- starting with solar asset inspections.",
        },
        meta_keywords: "autonomous drone inspection, LiDAR drone mapping, drone solar park \
                        inspection India, industrial drone autonomy, defense-grade \
                        autonomous drones India",
        assets: vec![
            ManifestAsset {
                key: "hero_photoreal",
                description: "Primary hero -- solar park overflight with drone and LiDAR overlay",
                alt_text: "Axalon Systems inspection drone flying over a solar farm with LiDAR \
                           overlay, illustrating automated inspection and anomaly detection.",
                placement: "home_hero",
                og_title: None,
                og_description: None,
            },
            ManifestAsset {
                key: "lidar_analytical",
                description: "LiDAR point cloud overhead analytical hero",
                alt_text: "Top-down aerial view of solar park with LiDAR point cloud overlay \
                           showing detected anomalies.",
                placement: "product_hero",
                og_title: None,
                og_description: None,
            },
            ManifestAsset {
                key: "isometric_render",
                description: "Isometric technical render of Axalon UAS with labeled components",
                alt_text: "Isometric studio render of Axalon drone showing modular payload bay \
                           with LiDAR, thermal, RGB camera, and onboard AI compute module.",
                placement: "product_page",
                og_title: None,
                og_description: None,
            },
        ],
        gsap_config: AnimationConfig {
            default_duration: 0.9,
            ease: "power2.out",
            stagger: 0.09,
            parallax: IndexMap::from([
                ("background", ParallaxOffset { translate_y: "-6%" }),
                ("midground", ParallaxOffset { translate_y: "-12%" }),
                ("foreground", ParallaxOffset { translate_y: "-18%" }),
            ]),
        },
    }
}
