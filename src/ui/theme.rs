use crate::state::ThemeMode;
use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    // Screen colors
    pub background: ColorSpec,
    pub surface: ColorSpec,
    pub input: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Accent colors
    pub primary: ColorSpec,
    pub info: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub filter_bg: ColorSpec,

    // Task rows keep their own colors in both modes
    pub completed_row: ColorSpec,
    pub pending_row: ColorSpec,
    pub completed_text: ColorSpec,
    pub row_text: ColorSpec,
}

/// Color specification as plain RGB.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

const COMPLETED_ROW: ColorSpec = ColorSpec::rgb(212, 237, 218);
const PENDING_ROW: ColorSpec = ColorSpec::rgb(248, 215, 218);
const COMPLETED_TEXT: ColorSpec = ColorSpec::rgb(108, 117, 125);
const ROW_TEXT: ColorSpec = ColorSpec::rgb(51, 51, 51);
const REMOVE_RED: ColorSpec = ColorSpec::rgb(220, 53, 69);
const EDIT_BLUE: ColorSpec = ColorSpec::rgb(0, 123, 255);

impl Theme {
    /// Return the palette for the given mode.
    ///
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: ColorSpec::rgb(240, 248, 255), // Alice blue
            surface: ColorSpec::rgb(255, 255, 255),
            input: ColorSpec::rgb(245, 245, 245),
            text: ColorSpec::rgb(51, 51, 51),
            text_muted: ColorSpec::rgb(85, 85, 85),
            primary: ColorSpec::rgb(76, 175, 80), // Green
            info: EDIT_BLUE,
            error: REMOVE_RED,
            border_active: ColorSpec::rgb(76, 175, 80),
            border_normal: ColorSpec::rgb(204, 204, 204),
            filter_bg: ColorSpec::rgb(221, 221, 221),
            completed_row: COMPLETED_ROW,
            pending_row: PENDING_ROW,
            completed_text: COMPLETED_TEXT,
            row_text: ROW_TEXT,
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: ColorSpec::rgb(51, 51, 51),
            surface: ColorSpec::rgb(68, 68, 68),
            input: ColorSpec::rgb(85, 85, 85),
            text: ColorSpec::rgb(245, 245, 245),
            text_muted: ColorSpec::rgb(221, 221, 221),
            primary: ColorSpec::rgb(245, 245, 245),
            info: EDIT_BLUE,
            error: REMOVE_RED,
            border_active: ColorSpec::rgb(245, 245, 245),
            border_normal: ColorSpec::rgb(119, 119, 119),
            filter_bg: ColorSpec::rgb(85, 85, 85),
            completed_row: COMPLETED_ROW,
            pending_row: PENDING_ROW,
            completed_text: COMPLETED_TEXT,
            row_text: ROW_TEXT,
        }
    }
}
