// ABOUTME: Portfolio data model - the single mutable value the wizard session edits

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three kinds of content block a tab can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Gallery,
    Video,
    Experience,
}

impl BlockType {
    /// All block types, in picker display order
    pub fn all() -> &'static [BlockType] {
        &[Self::Gallery, Self::Video, Self::Experience]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Gallery => "Gallery",
            Self::Video => "Video",
            Self::Experience => "Experience",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Gallery => "Showcase your work with a beautiful image grid",
            Self::Video => "Embed YouTube or Vimeo videos",
            Self::Experience => "List your work history and achievements",
        }
    }
}

/// A single image entry inside a gallery block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
}

/// One content block, discriminated by a `type` field on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Gallery {
        images: Vec<GalleryImage>,
    },
    Video {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Experience {
        title: String,
        company: String,
        period: String,
        description: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },
}

impl ContentBlock {
    pub fn block_type(&self) -> BlockType {
        match self {
            Self::Gallery { .. } => BlockType::Gallery,
            Self::Video { .. } => BlockType::Video,
            Self::Experience { .. } => BlockType::Experience,
        }
    }
}

/// A social link row; blank rows are tolerated while editing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    /// A row is blank when both fields are empty after trimming.
    /// Blank rows are dropped when the social step commits.
    pub fn is_blank(&self) -> bool {
        self.platform.trim().is_empty() && self.url.trim().is_empty()
    }
}

/// A named, ordered collection of content blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub name: String,
    pub blocks: Vec<ContentBlock>,
}

impl Tab {
    /// Create a tab with a fresh session-unique id
    pub fn new(name: String) -> Self {
        Self {
            id: format!("tab-{}", Uuid::new_v4()),
            name,
            blocks: Vec::new(),
        }
    }
}

/// Root portfolio value; one writer (the wizard controller) per session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub full_name: String,
    pub professional_title: String,
    pub bio: String,
    pub profile_image: String,
    pub social_links: Vec<SocialLink>,
    pub tabs: Vec<Tab>,
}

/// Partial update for the four basic-info fields; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct BasicInfoUpdate {
    pub full_name: Option<String>,
    pub professional_title: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

impl PortfolioData {
    /// Fresh session value: empty basics and a single default "Work" tab
    pub fn new() -> Self {
        Self {
            full_name: String::new(),
            professional_title: String::new(),
            bio: String::new(),
            profile_image: String::new(),
            social_links: Vec::new(),
            tabs: vec![Tab {
                id: "tab-1".to_string(),
                name: "Work".to_string(),
                blocks: Vec::new(),
            }],
        }
    }

    /// Shallow merge of basic-info fields; untouched fields keep their value
    pub fn merge_basic_info(&mut self, update: BasicInfoUpdate) {
        if let Some(full_name) = update.full_name {
            self.full_name = full_name;
        }
        if let Some(professional_title) = update.professional_title {
            self.professional_title = professional_title;
        }
        if let Some(bio) = update.bio {
            self.bio = bio;
        }
        if let Some(profile_image) = update.profile_image {
            self.profile_image = profile_image;
        }
    }

    /// Append a block to the tab with the given id. Unknown ids are a no-op;
    /// returns whether a tab was found.
    pub fn add_block_to_tab(&mut self, tab_id: &str, block: ContentBlock) -> bool {
        match self.tabs.iter_mut().find(|t| t.id == tab_id) {
            Some(tab) => {
                tab.blocks.push(block);
                true
            }
            None => {
                tracing::warn!(tab_id, "add_block_to_tab: no such tab, dropping block");
                false
            }
        }
    }

    /// Append a new tab named "Tab N" where N is its 1-based position at
    /// creation time. Names are never renumbered afterwards.
    pub fn add_tab(&mut self) -> &Tab {
        let tab = Tab::new(format!("Tab {}", self.tabs.len() + 1));
        self.tabs.push(tab);
        self.tabs.last().expect("just pushed")
    }

    /// Remove a tab by id. Deleting the sole remaining tab is rejected.
    /// Returns whether a tab was removed.
    pub fn remove_tab(&mut self, tab_id: &str) -> bool {
        if self.tabs.len() <= 1 {
            return false;
        }
        let before = self.tabs.len();
        self.tabs.retain(|t| t.id != tab_id);
        self.tabs.len() < before
    }

    /// Rename a tab. The trimmed name must be non-empty or the rename is
    /// rejected. Returns whether the rename applied.
    pub fn rename_tab(&mut self, tab_id: &str, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.tabs.iter_mut().find(|t| t.id == tab_id) {
            Some(tab) => {
                tab.name = trimmed.to_string();
                true
            }
            None => false,
        }
    }

    /// Swap the tab at `index` with its previous/next neighbor.
    /// Moves past either boundary are a no-op.
    pub fn move_tab(&mut self, index: usize, direction: MoveDirection) -> bool {
        let target = match direction {
            MoveDirection::Up => {
                if index == 0 || index >= self.tabs.len() {
                    return false;
                }
                index - 1
            }
            MoveDirection::Down => {
                if index + 1 >= self.tabs.len() {
                    return false;
                }
                index + 1
            }
        };
        self.tabs.swap(index, target);
        true
    }

    /// Drop blank social rows; called when the social step commits
    pub fn filter_blank_social_links(&mut self) {
        self.social_links.retain(|link| !link.is_blank());
    }

    pub fn tab_by_id(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for a tab reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_tabs(names: &[&str]) -> Vec<Tab> {
        names.iter().map(|n| Tab::new((*n).to_string())).collect()
    }

    #[test]
    fn test_new_portfolio_has_default_tab() {
        let data = PortfolioData::new();
        assert_eq!(data.tabs.len(), 1);
        assert_eq!(data.tabs[0].id, "tab-1");
        assert_eq!(data.tabs[0].name, "Work");
        assert!(data.tabs[0].blocks.is_empty());
    }

    #[test]
    fn test_merge_basic_info_is_shallow_and_idempotent() {
        let mut data = PortfolioData::new();
        let update = BasicInfoUpdate {
            bio: Some("x".to_string()),
            ..Default::default()
        };
        data.merge_basic_info(update.clone());
        data.merge_basic_info(update);
        assert_eq!(data.bio, "x");
        // Untouched fields keep their values
        assert_eq!(data.full_name, "");
        assert_eq!(data.tabs.len(), 1);
    }

    #[test]
    fn test_add_block_unknown_tab_is_noop() {
        let mut data = PortfolioData::new();
        let added = data.add_block_to_tab(
            "tab-missing",
            ContentBlock::Video {
                url: "https://example.com/v.mp4".to_string(),
                title: None,
            },
        );
        assert!(!added);
        assert!(data.tabs[0].blocks.is_empty());
    }

    #[test]
    fn test_remove_last_tab_rejected() {
        let mut data = PortfolioData::new();
        assert!(!data.remove_tab("tab-1"));
        assert_eq!(data.tabs.len(), 1);

        data.add_tab();
        assert!(data.remove_tab("tab-1"));
        assert_eq!(data.tabs.len(), 1);
        // Back down to one tab: delete rejected again
        let last_id = data.tabs[0].id.clone();
        assert!(!data.remove_tab(&last_id));
    }

    #[test]
    fn test_default_tab_names_use_position_at_creation() {
        let mut data = PortfolioData::new();
        assert_eq!(data.add_tab().name, "Tab 2");
        assert_eq!(data.add_tab().name, "Tab 3");
        let second = data.tabs[1].id.clone();
        data.remove_tab(&second);
        // Gap in numbering after deletion is expected
        assert_eq!(data.add_tab().name, "Tab 3");
    }

    #[test]
    fn test_tab_ids_unique_across_session() {
        let mut data = PortfolioData::new();
        for _ in 0..16 {
            data.add_tab();
        }
        let mut ids: Vec<String> = data.tabs.iter().map(|t| t.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 17);
    }

    #[test]
    fn test_move_tab_swaps_neighbors_and_noops_at_boundaries() {
        let mut data = PortfolioData::new();
        data.tabs = named_tabs(&["A", "B", "C"]);

        assert!(data.move_tab(1, MoveDirection::Up));
        let order: Vec<&str> = data.tabs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);

        assert!(!data.move_tab(0, MoveDirection::Up));
        assert!(!data.move_tab(2, MoveDirection::Down));
        let order: Vec<&str> = data.tabs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_rename_tab_trims_and_rejects_empty() {
        let mut data = PortfolioData::new();
        assert!(data.rename_tab("tab-1", "  Projects  "));
        assert_eq!(data.tabs[0].name, "Projects");
        assert!(!data.rename_tab("tab-1", "   "));
        assert_eq!(data.tabs[0].name, "Projects");
    }

    #[test]
    fn test_filter_blank_social_links() {
        let mut data = PortfolioData::new();
        data.social_links = vec![
            SocialLink::default(),
            SocialLink {
                platform: "LinkedIn".to_string(),
                url: "https://linkedin.com/in/ada".to_string(),
            },
            SocialLink {
                platform: "  ".to_string(),
                url: "".to_string(),
            },
        ];
        data.filter_blank_social_links();
        assert_eq!(data.social_links.len(), 1);
        assert_eq!(data.social_links[0].platform, "LinkedIn");
    }

    #[test]
    fn test_content_block_tagged_serialization() {
        let block = ContentBlock::Video {
            url: "https://youtu.be/XYZ".to_string(),
            title: None,
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["url"], "https://youtu.be/XYZ");
        assert!(json.get("title").is_none());

        let gallery: ContentBlock = serde_json::from_str(
            r#"{"type":"gallery","images":[{"url":"a.jpg","alt":"A"}]}"#,
        )
        .unwrap();
        assert_eq!(gallery.block_type(), BlockType::Gallery);
    }
}
