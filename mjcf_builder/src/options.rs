/// Settings controlling how an element tree is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Omit attributes that still hold their schema default.
    pub omit_defaults: bool,
    /// Emit children in attachment order across tags. When disabled, children
    /// come out grouped by tag in first-appearance order.
    pub preserve_child_order: bool,
    /// Indent nested elements and break lines.
    pub pretty: bool,
    /// Render childless elements as `<tag />` rather than `<tag></tag>`.
    pub short_empty_elements: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            omit_defaults: true,
            preserve_child_order: true,
            pretty: true,
            short_empty_elements: true,
        }
    }
}
