use std::fmt::{Display, Formatter};

use crate::api::FieldName;
use crate::reveal::RevealStyle;
use crate::validation::FieldStyle;

/// Containers the controller addresses directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    FormContainer,
    ResultContainer,
}

/// The submit control. Busy while a prediction is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Busy,
}
impl ButtonState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "🔮 Predecir Precio",
            Self::Busy => "Prediciendo...",
        }
    }
    pub fn markup(&self) -> String {
        match self {
            Self::Idle => self.label().to_string(),
            Self::Busy => format!(r#"<span class="loading"></span>{}"#, self.label()),
        }
    }
    pub fn disabled(&self) -> bool {
        *self == Self::Busy
    }
}
impl Display for ButtonState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let output = match self {
            Self::Idle => "Idle",
            Self::Busy => "Busy",
        };
        write!(f, "{}", output)
    }
}

/// Everything the controller does to the page goes through here.
pub trait View {
    fn set_button(&mut self, state: ButtonState);
    fn set_result_markup(&mut self, markup: String);
    fn set_result_visible(&mut self, visible: bool);
    fn scroll_into_view(&mut self, element: Element);
    fn set_field_style(&mut self, field: FieldName, style: FieldStyle);
    /// Empties every input and drops its range styling.
    fn clear_fields(&mut self);
    fn set_reveal_style(&mut self, element: Element, style: RevealStyle);
}

pub fn prediction_markup(formatted_price: &str) -> String {
    format!(
        r#"<div style="font-size: 1.2rem; margin-bottom: 10px;">Precio Estimado:</div>
<div>{}</div>
<div style="font-size: 0.8rem; margin-top: 10px; opacity: 0.8;">Basado en las características ingresadas</div>"#,
        escape_html(formatted_price)
    )
}
pub fn error_markup(message: &str) -> String {
    format!(
        r#"<div style="color: #ff6b6b; font-size: 1.2rem;">❌ {}</div>"#,
        escape_html(message)
    )
}
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
