#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiButton {
    pub label: String,
    pub rect: Rect,
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiPanel {
    pub title: String,
    pub rect: Rect,
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiElement {
    Panel(UiPanel),
    Button(UiButton),
}

/// Side of one block-font cell in canvas pixels.
pub const GLYPH_CELL: f32 = 3.0;
const GLYPH_COLUMNS: usize = 3;
const GLYPH_ROWS: usize = 5;
const GLYPH_ADVANCE: f32 = (GLYPH_COLUMNS as f32 + 1.0) * GLYPH_CELL;

impl UiElement {
    pub fn button(label: impl Into<String>, rect: Rect, background: Color) -> Self {
        UiElement::Button(UiButton {
            label: label.into(),
            rect,
            background,
            foreground: Color::WHITE,
        })
    }

    pub fn panel(title: impl Into<String>, rect: Rect, background: Color) -> Self {
        UiElement::Panel(UiPanel {
            title: title.into(),
            rect,
            background,
            foreground: Color::WHITE,
        })
    }

    pub fn label(&self) -> &str {
        match self {
            UiElement::Panel(panel) => &panel.title,
            UiElement::Button(button) => &button.label,
        }
    }

    /// Flattens the element into solid quads: background first, then text.
    pub fn quads(&self) -> Vec<(Rect, Color)> {
        let mut out = Vec::new();
        match self {
            UiElement::Panel(panel) => {
                out.push((panel.rect, panel.background));
                let (cx, _) = panel.rect.center();
                let top = panel.rect.y + GLYPH_CELL * 2.0;
                text_quads(&panel.title, cx, top, panel.foreground, &mut out);
            }
            UiElement::Button(button) => {
                out.push((button.rect, button.background));
                let (cx, cy) = button.rect.center();
                let top = cy - GLYPH_ROWS as f32 * GLYPH_CELL / 2.0;
                text_quads(&button.label, cx, top, button.foreground, &mut out);
            }
        }
        out
    }
}

/// Width of `text` when rendered with the block font.
pub fn text_width(text: &str) -> f32 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    count as f32 * GLYPH_ADVANCE - GLYPH_CELL
}

/// Emits one quad per lit font cell, horizontally centred on `center_x`.
pub fn text_quads(text: &str, center_x: f32, top: f32, color: Color, out: &mut Vec<(Rect, Color)>) {
    let mut pen_x = center_x - text_width(text) / 2.0;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_COLUMNS {
                    if bits & (0b100 >> col) != 0 {
                        out.push((
                            Rect::new(
                                pen_x + col as f32 * GLYPH_CELL,
                                top + row as f32 * GLYPH_CELL,
                                GLYPH_CELL,
                                GLYPH_CELL,
                            ),
                            color,
                        ));
                    }
                }
            }
        }
        pen_x += GLYPH_ADVANCE;
    }
}

/// 3x5 block glyphs; each row is three bits, most significant on the left.
pub fn glyph(ch: char) -> Option<[u8; GLYPH_ROWS]> {
    let rows = match ch.to_ascii_uppercase() {
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        _ => return None,
    };
    Some(rows)
}
