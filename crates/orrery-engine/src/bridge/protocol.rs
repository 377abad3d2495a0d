//! Host buffer layout.
//! Must stay in sync with the host renderer's protocol module.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 32 floats (view + projection, column-major)]
//! [Instances: max_instances × 20 floats]
//! [Lights: max_lights × 12 floats]
//! [Point batches: max_point_batches × 8 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Point positions are large and static, so they are not part of the
//! per-frame block; the host copies them once through `points_ptr`.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_LIGHTS: usize = 4;
pub const HEADER_LIGHT_COUNT: usize = 5;
pub const HEADER_MAX_POINT_BATCHES: usize = 6;
pub const HEADER_POINT_BATCH_COUNT: usize = 7;
pub const HEADER_POINT_COUNT: usize = 8;
pub const HEADER_MAX_EVENTS: usize = 9;
pub const HEADER_EVENT_COUNT: usize = 10;
pub const HEADER_BACKGROUND_R: usize = 11;
pub const HEADER_BACKGROUND_G: usize = 12;
pub const HEADER_BACKGROUND_B: usize = 13;
pub const HEADER_PIXEL_RATIO: usize = 14;
pub const HEADER_PROTOCOL_VERSION: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats for the camera block (two 4×4 matrices).
pub const CAMERA_FLOATS: usize = 32;

/// Floats per mesh instance (fixed wire format).
pub const INSTANCE_FLOATS: usize = 20;

/// Floats per light record.
pub const LIGHT_FLOATS: usize = 12;

/// Floats per point batch descriptor.
pub const POINT_BATCH_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_lights: usize,
    pub max_point_batches: usize,
    pub max_events: usize,

    /// Offset (in floats) where the camera block begins.
    pub camera_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where point batch descriptors begin.
    pub point_batch_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_instances: usize,
        max_lights: usize,
        max_point_batches: usize,
        max_events: usize,
    ) -> Self {
        let camera_offset = HEADER_FLOATS;
        let instance_data_offset = camera_offset + CAMERA_FLOATS;
        let light_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let point_batch_offset = light_data_offset + max_lights * LIGHT_FLOATS;
        let event_data_offset = point_batch_offset + max_point_batches * POINT_BATCH_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_instances,
            max_lights,
            max_point_batches,
            max_events,
            camera_offset,
            instance_data_offset,
            light_data_offset,
            point_batch_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_lights,
            config.max_point_batches,
            config.max_events,
        )
    }
}
