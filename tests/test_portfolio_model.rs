// ABOUTME: Tests for the portfolio data model and its JSON wire shape

use pluck::models::{
    embed_url, BlockType, ContentBlock, GalleryImage, PortfolioData, ProfileRecord, Tab,
};
use pretty_assertions::assert_eq;

#[test]
fn test_new_portfolio_has_default_work_tab() {
    let data = PortfolioData::new();
    assert_eq!(data.tabs.len(), 1);
    assert_eq!(data.tabs[0].id, "tab-1");
    assert_eq!(data.tabs[0].name, "Work");
    assert!(data.tabs[0].blocks.is_empty());
}

#[test]
fn test_portfolio_serializes_with_camel_case_and_tagged_blocks() {
    let mut data = PortfolioData::new();
    data.full_name = "Ada Lovelace".to_string();
    data.tabs[0].blocks.push(ContentBlock::Video {
        url: "https://youtu.be/XYZ".to_string(),
        title: None,
    });
    data.tabs[0].blocks.push(ContentBlock::Experience {
        title: "Lead".to_string(),
        company: "Acme".to_string(),
        period: String::new(),
        description: String::new(),
        image: None,
    });

    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["fullName"], "Ada Lovelace");
    assert_eq!(json["professionalTitle"], "");
    assert_eq!(json["tabs"][0]["blocks"][0]["type"], "video");
    assert_eq!(json["tabs"][0]["blocks"][1]["type"], "experience");
    // Absent optionals are omitted, not null
    assert!(json["tabs"][0]["blocks"][0].get("title").is_none());
    assert!(json["tabs"][0]["blocks"][1].get("image").is_none());
}

#[test]
fn test_portfolio_json_round_trip() {
    let mut data = PortfolioData::new();
    data.full_name = "Ada".to_string();
    data.tabs[0].blocks.push(ContentBlock::Gallery {
        images: vec![GalleryImage {
            url: "a.jpg".to_string(),
            alt: "A".to_string(),
        }],
    });
    let mut extra = Tab::new("Side Projects".to_string());
    extra.blocks.push(ContentBlock::Video {
        url: "https://vimeo.com/12345".to_string(),
        title: Some("Reel".to_string()),
    });
    data.tabs.push(extra);

    let json = serde_json::to_string(&data).unwrap();
    let back: PortfolioData = serde_json::from_str(&json).unwrap();
    assert_eq!(back, data);
}

#[test]
fn test_generated_tab_ids_are_prefixed_and_unique() {
    let first = Tab::new("One".to_string());
    let second = Tab::new("Two".to_string());
    assert!(first.id.starts_with("tab-"));
    assert!(second.id.starts_with("tab-"));
    assert_ne!(first.id, second.id);
}

#[test]
fn test_block_type_catalogue() {
    let all = BlockType::all();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].title(), "Gallery");
    assert!(all.iter().all(|bt| !bt.description().is_empty()));
}

#[test]
fn test_embed_url_known_hosts() {
    assert_eq!(
        embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        "https://www.youtube.com/embed/dQw4w9WgXcQ"
    );
    assert_eq!(
        embed_url("https://youtu.be/dQw4w9WgXcQ"),
        "https://www.youtube.com/embed/dQw4w9WgXcQ"
    );
    assert_eq!(
        embed_url("https://vimeo.com/12345678"),
        "https://player.vimeo.com/video/12345678"
    );
}

#[test]
fn test_embed_url_passes_through_everything_else() {
    assert_eq!(
        embed_url("https://example.com/talk.mp4"),
        "https://example.com/talk.mp4"
    );
    assert_eq!(embed_url("not a url"), "not a url");
    assert_eq!(
        embed_url("https://www.youtube.com/watch"),
        "https://www.youtube.com/watch"
    );
}

#[test]
fn test_profile_record_tolerates_missing_optionals() {
    let json = r#"{"fullName":"Ada","professionalTitle":"Engineer"}"#;
    let record: ProfileRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.full_name, "Ada");
    assert_eq!(record.bio, "");
    assert_eq!(record.profile_image, "");
}
