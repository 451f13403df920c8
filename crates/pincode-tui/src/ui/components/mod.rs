//! Reusable UI components

pub mod notification;
pub mod pin_boxes;
