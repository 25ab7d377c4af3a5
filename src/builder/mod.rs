use crate::common::{
    error::{RenderError, RenderResult},
    metadata::BorderWidth,
    palette::NamedColor,
};

/// Form values for a single render. Built fresh for every user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    content: String,
    foreground: NamedColor,
    background: NamedColor,
    border: BorderWidth,
}

impl RenderRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            foreground: NamedColor::Black,
            background: NamedColor::White,
            border: BorderWidth::default(),
        }
    }

    pub fn content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = content.into();
        self
    }

    pub fn foreground(&mut self, color: NamedColor) -> &mut Self {
        self.foreground = color;
        self
    }

    pub fn background(&mut self, color: NamedColor) -> &mut Self {
        self.background = color;
        self
    }

    pub fn border(&mut self, border: BorderWidth) -> &mut Self {
        self.border = border;
        self
    }

    pub fn payload(&self) -> &str {
        &self.content
    }

    pub fn fg(&self) -> NamedColor {
        self.foreground
    }

    pub fn bg(&self) -> NamedColor {
        self.background
    }

    pub fn border_width(&self) -> BorderWidth {
        self.border
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Foreground: {}, Background: {}, Border: {} }}",
            self.foreground, self.background, self.border
        )
    }

    /// Checks run before anything is encoded. Empty content is reported ahead of a color clash.
    pub fn validate(&self) -> RenderResult<()> {
        if self.content.is_empty() {
            return Err(RenderError::EmptyContent);
        }
        if self.foreground == self.background {
            return Err(RenderError::DuplicateColors);
        }
        Ok(())
    }
}
