// ABOUTME: Reusable rendering widgets

pub mod phone_frame;

pub use phone_frame::PhoneFrame;
