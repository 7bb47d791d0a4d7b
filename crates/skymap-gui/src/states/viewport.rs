/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// The texture no longer matches the viewport and must be re-rendered.
    pub dirty: bool,
    pub viewing_label: String,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            dirty: true,
            viewing_label: String::new(),
        }
    }
}
