use std::borrow::Cow;

use color::Color;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use style::Style;

pub mod color;
pub mod style;

/// Represents a Text component
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent<'a> {
    /// The actual text
    #[serde(flatten)]
    pub content: TextContent<'a>,
    /// Style of the text. Bold, Italic, Color...
    #[serde(flatten)]
    pub style: Style,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Extra text components
    pub extra: Vec<TextComponent<'a>>,
}

impl<'a> TextComponent<'a> {
    pub fn text(text: &'a str) -> Self {
        Self {
            content: TextContent::Text { text: text.into() },
            style: Style::default(),
            extra: vec![],
        }
    }

    pub fn text_string(text: String) -> Self {
        Self {
            content: TextContent::Text { text: text.into() },
            style: Style::default(),
            extra: vec![],
        }
    }

    pub fn translate(key: &'a str) -> Self {
        Self {
            content: TextContent::Translate {
                translate: key.into(),
            },
            style: Style::default(),
            extra: vec![],
        }
    }

    pub fn add_child(mut self, child: TextComponent<'a>) -> Self {
        self.extra.push(child);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn color_named(mut self, color: color::NamedColor) -> Self {
        self.style.color = Some(Color::Named(color));
        self
    }

    /// Makes the text bold
    pub fn bold(mut self) -> Self {
        self.style.bold = Some(true);
        self
    }

    /// Makes the text italic
    pub fn italic(mut self) -> Self {
        self.style.italic = Some(true);
        self
    }

    /// Makes the text underlined
    pub fn underlined(mut self) -> Self {
        self.style.underlined = Some(true);
        self
    }

    /// The raw text of this component and all children, without any styling
    pub fn to_plain(&self) -> String {
        let mut text = match &self.content {
            TextContent::Text { text } => text.clone().into_owned(),
            TextContent::Translate { translate } => translate.clone().into_owned(),
        };
        for child in &self.extra {
            text += &child.to_plain();
        }
        text
    }

    pub fn to_pretty_console(self) -> String {
        let style = self.style;
        let color = style.color;
        let mut text = match self.content {
            TextContent::Text { text } => text.into_owned(),
            TextContent::Translate { translate } => translate.into_owned(),
        };
        if let Some(color) = color {
            text = color.console_color(&text).to_string();
        }
        if style.bold.is_some() {
            text = text.bold().to_string();
        }
        if style.italic.is_some() {
            text = text.italic().to_string();
        }
        if style.underlined.is_some() {
            text = text.underline().to_string();
        }
        for child in self.extra {
            text += &child.to_pretty_console();
        }
        text
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TextContent<'a> {
    /// Raw Text
    Text { text: Cow<'a, str> },
    /// Translated text
    Translate { translate: Cow<'a, str> },
}
