//! LivePortrait request payload.
//!
//! The animation parameters are constants of the system, not user
//! input: the remote service was tuned against exactly this set, so the
//! field names and values must be reproduced verbatim.

use serde::Serialize;

/// Driving video the service animates every portrait against.
pub const DRIVING_VIDEO_URL: &str =
    "https://segmind-sd-models.s3.amazonaws.com/display_images/liveportrait-video.mp4";

/// JSON body for a LivePortrait generation request.
#[derive(Debug, Clone, Serialize)]
pub struct LivePortraitRequest {
    /// Portrait as raw base64 (data-URI prefix already stripped)
    pub face_image: String,
    /// Reference video driving the animation
    pub driving_video: &'static str,
    /// Face crop size
    pub live_portrait_dsize: u32,
    /// Face crop scale factor
    pub live_portrait_scale: f64,
    /// Maximum driving-video frames to load
    pub video_frame_load_cap: u32,
    /// Zero out lip motion in the source
    pub live_portrait_lip_zero: bool,
    /// Use relative motion transfer
    pub live_portrait_relative: bool,
    /// Horizontal crop offset ratio
    pub live_portrait_vx_ratio: f64,
    /// Vertical crop offset ratio
    pub live_portrait_vy_ratio: f64,
    /// Stitch the animated face back into the frame
    pub live_portrait_stitching: bool,
    /// Driving-video frame stride
    pub video_select_every_n_frames: u32,
    /// Eye retargeting toggle
    pub live_portrait_eye_retargeting: bool,
    /// Lip retargeting toggle
    pub live_portrait_lip_retargeting: bool,
    /// Lip retargeting multiplier
    pub live_portrait_lip_retargeting_multiplier: u32,
    /// Eye retargeting multiplier
    pub live_portrait_eyes_retargeting_multiplier: u32,
}

impl LivePortraitRequest {
    /// Build the fixed-parameter request around a portrait payload.
    pub fn new(face_image: String) -> Self {
        Self {
            face_image,
            driving_video: DRIVING_VIDEO_URL,
            live_portrait_dsize: 512,
            live_portrait_scale: 2.3,
            video_frame_load_cap: 128,
            live_portrait_lip_zero: true,
            live_portrait_relative: true,
            live_portrait_vx_ratio: 0.0,
            live_portrait_vy_ratio: -0.12,
            live_portrait_stitching: true,
            video_select_every_n_frames: 1,
            live_portrait_eye_retargeting: false,
            live_portrait_lip_retargeting: false,
            live_portrait_lip_retargeting_multiplier: 1,
            live_portrait_eyes_retargeting_multiplier: 1,
        }
    }
}
