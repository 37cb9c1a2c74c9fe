//! Display data for every section. Entities are literal tables, created at
//! mount and never mutated; all runtime "state" is transient UI state
//! (active index, modal visibility, breakpoint).

/// One portfolio category in the Work section.
pub struct WorkService {
    pub title: &'static str,
    pub section_title: &'static str,
    pub description: &'static str,
    pub what_we_do: &'static [&'static str],
    pub cta: &'static str,
    pub media: &'static [MediaItem],
}

/// A single showcased piece: a video with optional poster thumbnail, or an
/// image grid for design work. `style` carries per-item layout overrides
/// (the 9:16 short-form crops).
pub struct MediaItem {
    pub url: Option<&'static str>,
    pub thumbnail: Option<&'static str>,
    pub title: &'static str,
    pub description: &'static str,
    pub images: Option<&'static [&'static str]>,
    pub style: Option<&'static str>,
}

pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
}

pub struct Client {
    pub name: &'static str,
    pub logo: &'static str,
}

/// One entry in the Services list/preview showcase.
pub struct ShowcaseService {
    pub title: &'static str,
    pub description: &'static str,
    pub preview: Preview,
}

pub enum Preview {
    /// A single captioned hero image.
    Single { image: &'static str },
    /// A structured gallery grouped by subsection.
    Gallery { sections: &'static [GallerySection] },
}

pub struct GallerySection {
    pub name: &'static str,
    pub layout: GalleryLayout,
    /// Placeholder swatch colors standing in for final artwork.
    pub swatches: &'static [&'static str],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GalleryLayout {
    /// One 16:9 thumbnail.
    Thumbnail,
    /// Two 3:4 posters side by side.
    Poster,
    /// Three 1:1 posts in a row.
    Instagram,
}

impl GalleryLayout {
    pub fn expected_count(self) -> usize {
        match self {
            GalleryLayout::Thumbnail => 1,
            GalleryLayout::Poster => 2,
            GalleryLayout::Instagram => 3,
        }
    }
}

pub const WORK_SERVICES: &[WorkService] = &[
    WorkService {
        title: "Long-form YouTube Videos",
        section_title: "Make Every Second Count – Long-Form Video Editing That Engages",
        description: "We craft compelling long-form content that keeps viewers hooked till the very end.",
        what_we_do: &[
            "Multi-cam sync",
            "Smooth transitions & B-roll",
            "Title cards & lower thirds",
            "Color grading & sound design",
        ],
        cta: "🎬 Let's turn your raw footage into binge-worthy content.",
        media: &[
            MediaItem {
                url: Some("videos/yt1-dhan-ipo-investing.mp4"),
                thumbnail: Some("images/yt1-dhan-ipo-investing.jpg"),
                title: "Documentary Style",
                description: "Cinematic storytelling approach",
                images: None,
                style: None,
            },
            MediaItem {
                url: Some("videos/yt2-dhan-small-cap.mp4"),
                thumbnail: Some("images/yt2-dhan-small-cap.jpg"),
                title: "Educational Content",
                description: "Clear visual explanations",
                images: None,
                style: None,
            },
            MediaItem {
                url: Some("videos/yt3-dhan-today-in-markets.mp4"),
                thumbnail: Some("images/yt3-dhan-today-in-markets.jpg"),
                title: "Vlog Production",
                description: "Personal brand storytelling",
                images: None,
                style: None,
            },
        ],
    },
    WorkService {
        title: "Podcast Editing",
        section_title: "From Audio to Impact – Pro-Level Podcast Videos",
        description: "Give your podcast the visual edge. We turn your recorded sessions into polished video episodes.",
        what_we_do: &[
            "Multi-angle visual sync",
            "Branded intros/outros",
            "Subtitles & waveform animations",
            "Noise reduction & mastering",
        ],
        cta: "🎧 Let your podcast look as good as it sounds.",
        media: &[
            MediaItem {
                url: Some("videos/p1-army-podcast-trailer.mp4"),
                thumbnail: Some("images/p1-army-podcast.jpeg"),
                title: "Audio Cleanup",
                description: "Noise reduction & enhancement",
                images: None,
                style: None,
            },
            MediaItem {
                url: Some("videos/p2-brahmos-podcast.mp4"),
                thumbnail: Some("images/p2-brahmos-podcast.jpg"),
                title: "Multi-track Mixing",
                description: "Perfect audio balance",
                images: None,
                style: None,
            },
            MediaItem {
                url: Some("videos/p3-grow-podcast.mp4"),
                thumbnail: Some("images/p3-groww-podcast.jpg"),
                title: "Video Podcast",
                description: "Synchronized video editing",
                images: None,
                style: None,
            },
        ],
    },
    WorkService {
        title: "Commercial Ads",
        section_title: "Ads That Convert – Cinematic, Branded, Powerful",
        description: "We create high-impact video ads designed to sell.",
        what_we_do: &[
            "Scripting support (if needed)",
            "Product highlights & animations",
            "Call-to-action visuals",
            "Soundtracks & SFX",
        ],
        cta: "🔥 Ready to create scroll-proof ads that convert like crazy?",
        media: &[
            MediaItem {
                url: Some("videos/ca1-hardik-raja-ppt.mp4"),
                thumbnail: Some("images/hardik-thumb.png"),
                title: "Brand Commercial",
                description: "Corporate identity videos",
                images: None,
                style: None,
            },
            MediaItem {
                url: Some("videos/ca2-qualicom-ad.mp4"),
                thumbnail: Some("images/qualicom-expand.png"),
                title: "Product Launch",
                description: "High-conversion advertising",
                images: None,
                style: None,
            },
            MediaItem {
                url: Some("videos/ca3-thermax-ad.mp4"),
                thumbnail: Some("images/thermax-thumb.png"),
                title: "Social Media Ads",
                description: "Platform-specific optimization",
                images: None,
                style: None,
            },
        ],
    },
    WorkService {
        title: "Short-form Content",
        section_title: "Scroll-Stopping Shorts – Built for Virality",
        description: "Short-form content is king. We design punchy, fast-paced edits that are optimized for Instagram Reels, YouTube Shorts, and TikTok.",
        what_we_do: &[
            "Hook-focused editing",
            "Captions & emojis",
            "Zoom cuts & kinetic effects",
            "Sound syncing to trends",
        ],
        cta: "🚀 Let's make your brand go viral in under 60 seconds.",
        media: &[
            MediaItem {
                url: Some("videos/shorts-reel-edit.mp4"),
                thumbnail: None,
                title: "Instagram Reel Edit",
                description: "Quick cuts with trending music",
                images: None,
                style: Some("object-fit: cover; height: 100%; width: 100%; align-self: flex-start;"),
            },
            MediaItem {
                url: Some("videos/sh2-codehub-ad-jan.mp4"),
                thumbnail: None,
                title: "TikTok Viral Edit",
                description: "Hook within first 3 seconds",
                images: None,
                style: Some("object-fit: cover; height: 100%; width: auto; aspect-ratio: 9/16; margin: 0 auto; display: block;"),
            },
            MediaItem {
                url: Some("videos/sh3-eonx-english.mp4"),
                thumbnail: None,
                title: "YouTube Shorts",
                description: "Vertical format optimization",
                images: None,
                style: Some("object-fit: cover; height: 100%; width: auto; aspect-ratio: 9/16; margin: 0 auto; display: block;"),
            },
        ],
    },
    WorkService {
        title: "Graphic Design",
        section_title: "Visual Identity That Speaks Volumes – Designs That Define Brands",
        description: "From logos to complete brand identities, we create stunning visuals that make your brand unforgettable and instantly recognizable.",
        what_we_do: &[
            "Brand identity & logo design",
            "Social media graphics & templates",
            "Print design & marketing materials",
            "UI/UX design elements",
        ],
        cta: "🎨 Let's create a visual identity that sets you apart from the competition.",
        media: &[
            MediaItem {
                url: None,
                thumbnail: None,
                title: "Brand Identity Design",
                description: "Complete visual brand transformation",
                images: Some(&["images/graphics-thumbnail.png"]),
                style: None,
            },
            MediaItem {
                url: None,
                thumbnail: None,
                title: "Marketing Posters",
                description: "Eye-catching promotional materials",
                images: Some(&["images/graphics-poster1.jpg", "images/graphics-poster2.jpg"]),
                style: None,
            },
            MediaItem {
                url: None,
                thumbnail: None,
                title: "Social Media Posts",
                description: "Consistent brand presence across platforms",
                images: Some(&["images/graphics-post1.png", "images/graphics-post2.jpg"]),
                style: None,
            },
        ],
    },
];

pub const SHOWCASE_SERVICES: &[ShowcaseService] = &[
    ShowcaseService {
        title: "Video Production & Editing",
        description: "Professional video content that tells your story effectively",
        preview: Preview::Single {
            image: "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?w=800&h=600&fit=crop&q=80",
        },
    },
    ShowcaseService {
        title: "Creative Strategy & Design",
        description: "Comprehensive brand development and visual identity systems",
        preview: Preview::Single {
            image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=800&h=600&fit=crop&q=80",
        },
    },
    ShowcaseService {
        title: "Creative Asset Design",
        description: "High-quality digital assets for all your marketing needs",
        preview: Preview::Gallery {
            sections: &[
                GallerySection {
                    name: "Thumbnail Design",
                    layout: GalleryLayout::Thumbnail,
                    swatches: &["#6366F1"],
                },
                GallerySection {
                    name: "Poster Design",
                    layout: GalleryLayout::Poster,
                    swatches: &["#8B5CF6", "#06B6D4"],
                },
                GallerySection {
                    name: "Instagram Posts",
                    layout: GalleryLayout::Instagram,
                    swatches: &["#10B981", "#F59E0B", "#EF4444"],
                },
            ],
        },
    },
    ShowcaseService {
        title: "Content Strategy & Copywriting",
        description: "Compelling narratives that resonate with your audience",
        preview: Preview::Single {
            image: "https://images.unsplash.com/photo-1455390582262-044cdead277a?w=800&h=600&fit=crop&q=80",
        },
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "eonx",
        name: "EONX",
        role: "Digital Transformation",
        content: "Transform your brand's digital presence with data-driven strategies that deliver measurable ROI and sustainable growth across all channels.",
        avatar: "images/eonx-logo.png",
        rating: 5,
    },
    Testimonial {
        id: "qualicom",
        name: "QUALICOM",
        role: "SEO Solutions",
        content: "Maximize your online visibility with SEO strategies that dominate search rankings and drive qualified traffic to your business.",
        avatar: "images/qualicom.jpg",
        rating: 5,
    },
    Testimonial {
        id: "bnb",
        name: "B&B POLYMORES",
        role: "Content Strategy",
        content: "Create compelling content that tells your brand story and builds authentic connections with your target audience across digital platforms.",
        avatar: "images/bnb.jpg",
        rating: 5,
    },
    Testimonial {
        id: "justo",
        name: "JUSTO",
        role: "Marketing Automation",
        content: "Leverage advanced analytics and marketing automation to optimize campaigns and deliver personalized experiences at scale.",
        avatar: "images/justo.webp",
        rating: 5,
    },
    Testimonial {
        id: "nexo",
        name: "NEXO",
        role: "PPC Campaigns",
        content: "Drive immediate results with targeted PPC campaigns that maximize ad spend efficiency and accelerate business growth.",
        avatar: "images/nexo.jpg",
        rating: 5,
    },
    Testimonial {
        id: "trading-monk",
        name: "TRADING MONK",
        role: "Email Marketing",
        content: "Build powerful email marketing funnels that nurture leads, increase customer lifetime value, and boost revenue consistently.",
        avatar: "images/monk.jpg",
        rating: 5,
    },
];

pub const CLIENTS: &[Client] = &[
    Client { name: "Nexo", logo: "images/nexo.jpg" },
    Client { name: "Trading Monk", logo: "images/monk.jpg" },
    Client { name: "Justo", logo: "images/justo.webp" },
    Client { name: "Qualicom", logo: "images/qualicom.jpg" },
    Client { name: "Surya", logo: "images/surya.png" },
    Client { name: "Codehub", logo: "images/codehub-logo.png" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn testimonial_ids_are_unique() {
        let ids: HashSet<&str> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TESTIMONIALS.len());
    }

    #[test]
    fn ratings_are_small_positive_integers() {
        for testimonial in TESTIMONIALS {
            assert!((1..=5).contains(&testimonial.rating), "{}", testimonial.id);
        }
    }

    #[test]
    fn every_work_service_shows_three_media_items() {
        assert_eq!(WORK_SERVICES.len(), 5);
        for service in WORK_SERVICES {
            assert_eq!(service.media.len(), 3, "{}", service.title);
            assert!(!service.what_we_do.is_empty());
        }
    }

    #[test]
    fn media_items_are_either_playable_or_image_grids() {
        for service in WORK_SERVICES {
            for item in service.media {
                assert!(
                    item.url.is_some() || item.images.is_some(),
                    "{} / {}",
                    service.title,
                    item.title
                );
            }
        }
    }

    #[test]
    fn gallery_swatch_counts_match_their_layout() {
        for showcase in SHOWCASE_SERVICES {
            if let Preview::Gallery { sections } = &showcase.preview {
                for section in *sections {
                    assert_eq!(
                        section.swatches.len(),
                        section.layout.expected_count(),
                        "{}",
                        section.name
                    );
                }
            }
        }
    }

    #[test]
    fn client_names_are_unique() {
        let names: HashSet<&str> = CLIENTS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CLIENTS.len());
    }
}
