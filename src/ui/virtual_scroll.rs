// SPDX-License-Identifier: MPL-2.0
//! Virtual-scroller configuration shapes.

/// Scroll axis of the recycling scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// Configuration accepted by the recycling scroller.
///
/// A fixed `item_size` enables recycling with cheap offset math; leaving
/// it unset switches to dynamic per-item sizing, which requires
/// `min_item_size` so the scroller can estimate the unrendered range.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollerSettings {
    pub direction: ScrollDirection,
    /// Fixed item size along the scroll axis.
    pub item_size: Option<f32>,
    /// Items per row when laying out as a grid.
    pub grid_items: Option<u32>,
    /// Item size along the secondary axis in grid mode.
    pub item_secondary_size: Option<f32>,
    /// Lower bound used for dynamic sizing.
    pub min_item_size: Option<f32>,
    /// Item field carrying a per-item size.
    pub size_field: String,
    /// Item field selecting a render variant.
    pub type_field: String,
    /// Item field used as the recycling key.
    pub key_field: String,
    /// Scroll with the page instead of an internal viewport.
    pub page_mode: bool,
    /// Items rendered ahead of first display.
    pub prerender: u32,
    /// Extra pixels rendered outside the viewport.
    pub buffer: f32,
    pub emit_update: bool,
    pub update_interval_ms: u64,
}

impl Default for ScrollerSettings {
    fn default() -> Self {
        Self {
            direction: ScrollDirection::default(),
            item_size: None,
            grid_items: None,
            item_secondary_size: None,
            min_item_size: None,
            size_field: "size".to_string(),
            type_field: "type".to_string(),
            key_field: "id".to_string(),
            page_mode: false,
            prerender: 0,
            buffer: 200.0,
            emit_update: false,
            update_interval_ms: 0,
        }
    }
}

/// Payload handed to the per-item slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSlot {
    pub index: usize,
    /// Whether the item is inside the rendered window, as opposed to a
    /// recycled placeholder.
    pub active: bool,
}
