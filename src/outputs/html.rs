//! HTML demo page rendering.
//!
//! The page is a fragment rather than a full document: one `<script>` tag
//! loading the `lottie-player` web component, a `<style>` block sizing the
//! players, then one `<lottie-player>` per animation:
//!
//! ```text
//! <script src="https://unpkg.com/@lottiefiles/lottie-player@latest/dist/lottie-player.js"></script>
//!
//!
//!         <style>
//!             lottie-player {
//!                 width: 240px;
//!                 height: 240px;
//!                 display: inline-block;
//!             }
//!         </style>
//!
//! <lottie-player autoplay loop mode="normal" src="./a.json"></lottie-player>
//! <lottie-player autoplay loop mode="normal" src="./b.json"></lottie-player>
//! ```

use super::Render;
use crate::models::{ArtifactKind, FilenameList};
use crate::utils::{EscapeMode, src_component};
use std::fmt::Write;

/// Where the `lottie-player` web component is loaded from by default.
pub const DEFAULT_PLAYER_SCRIPT: &str =
    "https://unpkg.com/@lottiefiles/lottie-player@latest/dist/lottie-player.js";

/// Default width and height of each player, in CSS pixels.
pub const DEFAULT_WIDGET_SIZE: u32 = 240;

/// Renders the demo page.
#[derive(Debug, Clone)]
pub struct HtmlDemo {
    /// Absolute URL or relative reference of the player script, emitted as is.
    pub script_src: String,
    pub widget_size: u32,
    pub escape: EscapeMode,
}

impl Default for HtmlDemo {
    fn default() -> Self {
        Self {
            script_src: default_script_src(),
            widget_size: DEFAULT_WIDGET_SIZE,
            escape: EscapeMode::default(),
        }
    }
}

pub(crate) fn default_script_src() -> String {
    DEFAULT_PLAYER_SCRIPT.to_string()
}

impl HtmlDemo {
    /// One `<lottie-player>` declaration, without the trailing newline.
    pub fn widget(&self, name: &str) -> String {
        format!(
            r#"<lottie-player autoplay loop mode="normal" src="./{}"></lottie-player>"#,
            src_component(name, self.escape)
        )
    }
}

impl Render for HtmlDemo {
    const KIND: ArtifactKind = ArtifactKind::Html;

    fn render(&self, names: &FilenameList) -> String {
        let size = self.widget_size;
        let mut html = String::with_capacity(512 + names.len() * 96);

        // Writing into a String cannot fail.
        let _ = writeln!(html, r#"<script src="{}"></script>"#, self.script_src);
        html.push('\n');
        let _ = writeln!(
            html,
            "
        <style>
            lottie-player {{
                width: {size}px;
                height: {size}px;
                display: inline-block;
            }}
        </style>
        "
        );

        for name in names {
            html.push_str(&self.widget(name));
            html.push('\n');
        }
        html
    }
}
