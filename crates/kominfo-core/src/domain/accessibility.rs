// ============================================================================
// Kominfo Core - Accessibility Settings
// File: crates/kominfo-core/src/domain/accessibility.rs
// Description: Visitor accessibility panel state, its actions and the CSS
//              hooks the page layout applies
// ============================================================================

use serde::{Deserialize, Serialize};

pub const FONT_SCALE_MIN: u16 = 80;
pub const FONT_SCALE_MAX: u16 = 150;
pub const FONT_SCALE_STEP: u16 = 10;
pub const FONT_SCALE_DEFAULT: u16 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    #[default]
    Normal,
    High,
    Dark,
    Light,
    Inverted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Saturation {
    #[default]
    Normal,
    Low,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSpacing {
    #[default]
    Normal,
    Wide,
    Wider,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    None,
    Left,
    Center,
    Right,
    Justify,
}

/// On/off switches of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Toggle {
    Monochrome,
    HideImages,
    ReadingGuide,
    StopAnimations,
    LargeCursor,
    HighlightLinks,
    ReadableFont,
    LetterSpacing,
    HighlightHeadings,
}

/// Panel state as persisted under `accessibility-settings`. Missing fields
/// take their defaults so older payloads keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessibilitySettings {
    pub font_scale: u16,
    pub contrast: ContrastMode,
    pub saturation: Saturation,
    pub monochrome: bool,
    pub hide_images: bool,
    pub reading_guide: bool,
    pub stop_animations: bool,
    pub large_cursor: bool,
    pub highlight_links: bool,
    pub readable_font: bool,
    pub line_spacing: LineSpacing,
    pub letter_spacing: bool,
    pub text_align: TextAlign,
    pub highlight_headings: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_scale: FONT_SCALE_DEFAULT,
            contrast: ContrastMode::Normal,
            saturation: Saturation::Normal,
            monochrome: false,
            hide_images: false,
            reading_guide: false,
            stop_animations: false,
            large_cursor: false,
            highlight_links: false,
            readable_font: false,
            line_spacing: LineSpacing::Normal,
            letter_spacing: false,
            text_align: TextAlign::None,
            highlight_headings: false,
        }
    }
}

/// One click in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "camelCase")]
pub enum AccessibilityAction {
    Toggle(Toggle),
    IncreaseFont,
    DecreaseFont,
    SetContrast(ContrastMode),
    SetSaturation(Saturation),
    SetLineSpacing(LineSpacing),
    SetTextAlign(TextAlign),
    Reset,
}

impl AccessibilitySettings {
    fn flag_mut(&mut self, toggle: Toggle) -> &mut bool {
        match toggle {
            Toggle::Monochrome => &mut self.monochrome,
            Toggle::HideImages => &mut self.hide_images,
            Toggle::ReadingGuide => &mut self.reading_guide,
            Toggle::StopAnimations => &mut self.stop_animations,
            Toggle::LargeCursor => &mut self.large_cursor,
            Toggle::HighlightLinks => &mut self.highlight_links,
            Toggle::ReadableFont => &mut self.readable_font,
            Toggle::LetterSpacing => &mut self.letter_spacing,
            Toggle::HighlightHeadings => &mut self.highlight_headings,
        }
    }

    /// Flips a switch and returns its new value.
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let flag = self.flag_mut(toggle);
        *flag = !*flag;
        *flag
    }

    /// Returns false when already at the maximum.
    pub fn increase_font(&mut self) -> bool {
        let next = (self.font_scale + FONT_SCALE_STEP).min(FONT_SCALE_MAX);
        let changed = next != self.font_scale;
        self.font_scale = next;
        changed
    }

    /// Returns false when already at the minimum.
    pub fn decrease_font(&mut self) -> bool {
        let next = self.font_scale.saturating_sub(FONT_SCALE_STEP).max(FONT_SCALE_MIN);
        let changed = next != self.font_scale;
        self.font_scale = next;
        changed
    }

    /// Selecting the active contrast mode again switches back to normal.
    pub fn set_contrast(&mut self, mode: ContrastMode) {
        self.contrast = if self.contrast == mode { ContrastMode::Normal } else { mode };
    }

    pub fn set_saturation(&mut self, saturation: Saturation) {
        self.saturation = if self.saturation == saturation { Saturation::Normal } else { saturation };
    }

    pub fn set_line_spacing(&mut self, spacing: LineSpacing) {
        self.line_spacing = spacing;
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = if self.text_align == align { TextAlign::None } else { align };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&mut self, action: AccessibilityAction) {
        match action {
            AccessibilityAction::Toggle(t) => {
                self.toggle(t);
            }
            AccessibilityAction::IncreaseFont => {
                self.increase_font();
            }
            AccessibilityAction::DecreaseFont => {
                self.decrease_font();
            }
            AccessibilityAction::SetContrast(mode) => self.set_contrast(mode),
            AccessibilityAction::SetSaturation(s) => self.set_saturation(s),
            AccessibilityAction::SetLineSpacing(s) => self.set_line_spacing(s),
            AccessibilityAction::SetTextAlign(a) => self.set_text_align(a),
            AccessibilityAction::Reset => self.reset(),
        }
    }

    /// Clamps the font scale into range and onto the step grid.
    fn normalized(mut self) -> Self {
        let clamped = self.font_scale.clamp(FONT_SCALE_MIN, FONT_SCALE_MAX);
        let steps = (clamped - FONT_SCALE_MIN + FONT_SCALE_STEP / 2) / FONT_SCALE_STEP;
        self.font_scale = (FONT_SCALE_MIN + steps * FONT_SCALE_STEP).min(FONT_SCALE_MAX);
        self
    }

    /// Classes set on the document root (`<html class="...">`).
    pub fn css_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        match self.contrast {
            ContrastMode::Normal => {}
            ContrastMode::High => classes.push("a11y-contrast-high"),
            ContrastMode::Dark => classes.push("a11y-contrast-dark"),
            ContrastMode::Light => classes.push("a11y-contrast-light"),
            ContrastMode::Inverted => classes.push("a11y-contrast-inverted"),
        }
        match self.saturation {
            Saturation::Normal => {}
            Saturation::Low => classes.push("a11y-saturation-low"),
            Saturation::High => classes.push("a11y-saturation-high"),
        }
        match self.line_spacing {
            LineSpacing::Normal => {}
            LineSpacing::Wide => classes.push("a11y-line-spacing-wide"),
            LineSpacing::Wider => classes.push("a11y-line-spacing-wider"),
        }
        match self.text_align {
            TextAlign::None => {}
            TextAlign::Left => classes.push("a11y-align-left"),
            TextAlign::Center => classes.push("a11y-align-center"),
            TextAlign::Right => classes.push("a11y-align-right"),
            TextAlign::Justify => classes.push("a11y-align-justify"),
        }

        let flags = [
            (self.monochrome, "a11y-monochrome"),
            (self.hide_images, "a11y-hide-images"),
            (self.reading_guide, "a11y-reading-guide"),
            (self.stop_animations, "a11y-stop-animations"),
            (self.large_cursor, "a11y-large-cursor"),
            (self.highlight_links, "a11y-highlight-links"),
            (self.readable_font, "a11y-readable-font"),
            (self.letter_spacing, "a11y-letter-spacing"),
            (self.highlight_headings, "a11y-highlight-headings"),
        ];
        classes.extend(flags.iter().filter(|(on, _)| *on).map(|(_, class)| *class));
        classes
    }

    /// Inline style for the document root; `None` at the default font size.
    pub fn root_style(&self) -> Option<String> {
        (self.font_scale != FONT_SCALE_DEFAULT).then(|| format!("font-size: {}%;", self.font_scale))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Never fails: unreadable input yields the defaults.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str::<Self>(raw)
            .map(Self::normalized)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_scale_is_bounded() {
        let mut s = AccessibilitySettings::default();
        for _ in 0..10 {
            s.increase_font();
        }
        assert_eq!(s.font_scale, FONT_SCALE_MAX);
        assert!(!s.increase_font());

        for _ in 0..10 {
            s.decrease_font();
        }
        assert_eq!(s.font_scale, FONT_SCALE_MIN);
        assert!(!s.decrease_font());
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut s = AccessibilitySettings::default();
        assert!(s.toggle(Toggle::StopAnimations));
        assert!(s.toggle(Toggle::LargeCursor));
        assert!(!s.is_default());
        assert!(!s.toggle(Toggle::LargeCursor));

        s.reset();
        assert!(s.is_default());
    }

    #[test]
    fn test_selecting_active_contrast_returns_to_normal() {
        let mut s = AccessibilitySettings::default();
        s.set_contrast(ContrastMode::Dark);
        assert_eq!(s.contrast, ContrastMode::Dark);
        s.set_contrast(ContrastMode::Dark);
        assert_eq!(s.contrast, ContrastMode::Normal);
    }

    #[test]
    fn test_css_classes_and_root_style() {
        let mut s = AccessibilitySettings::default();
        assert!(s.css_classes().is_empty());
        assert_eq!(s.root_style(), None);

        s.apply(AccessibilityAction::SetContrast(ContrastMode::High));
        s.apply(AccessibilityAction::Toggle(Toggle::Monochrome));
        s.apply(AccessibilityAction::IncreaseFont);
        assert_eq!(s.css_classes(), vec!["a11y-contrast-high", "a11y-monochrome"]);
        assert_eq!(s.root_style().as_deref(), Some("font-size: 110%;"));
    }

    #[test]
    fn test_json_persistence_is_lenient() {
        let mut s = AccessibilitySettings::default();
        s.toggle(Toggle::HighlightLinks);
        s.set_text_align(TextAlign::Justify);
        assert_eq!(AccessibilitySettings::from_json(&s.to_json()), s);

        assert!(AccessibilitySettings::from_json("not json").is_default());
        assert!(AccessibilitySettings::from_json(r#"{"contrast":"neon"}"#).is_default());

        let partial = AccessibilitySettings::from_json(r#"{"readableFont":true,"fontScale":137}"#);
        assert!(partial.readable_font);
        assert_eq!(partial.font_scale, 140);
        assert_eq!(AccessibilitySettings::from_json(r#"{"fontScale":500}"#).font_scale, 150);
    }

    #[test]
    fn test_action_wire_format() {
        let action: AccessibilityAction =
            serde_json::from_str(r#"{"action":"toggle","value":"hideImages"}"#).unwrap();
        assert_eq!(action, AccessibilityAction::Toggle(Toggle::HideImages));
        let action: AccessibilityAction = serde_json::from_str(r#"{"action":"reset"}"#).unwrap();
        assert_eq!(action, AccessibilityAction::Reset);
    }
}
