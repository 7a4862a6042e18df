// ABOUTME: Data models for portfolio content and hosted profile records

pub mod embed;
pub mod portfolio;
pub mod profile;

pub use embed::embed_url;
pub use portfolio::{
    BasicInfoUpdate, BlockType, ContentBlock, GalleryImage, MoveDirection, PortfolioData,
    SocialLink, Tab,
};
pub use profile::ProfileRecord;
