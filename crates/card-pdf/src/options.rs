use crate::geometry::PageGeometry;

/// Card text and layout constants, in device units (PDF points).
///
/// Defaults reproduce the reference rendering; everything is a knob so
/// the layout engine itself stays a pure function of its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub label_text: String,
    pub label_size_pt: f32,
    pub name_size_pt: f32,
    pub key_size_pt: f32,
    pub icon_size_pt: f32,
    pub footer_size_pt: f32,
    /// Vertical advance of one text block.
    pub line_height: f32,
    /// Distance from the quadrant top to the first block.
    pub top_offset: f32,
    /// Display names longer than this get their own line.
    pub long_name_threshold: usize,
    /// Inset of the code image from each side of the column.
    pub image_inset: f32,
    /// Left inset for card text within the column.
    pub text_inset: f32,
    /// Logo x offset from the quadrant origin, and its square fit size.
    pub logo_offset: f32,
    pub logo_size: f32,
    pub promo_text: String,
    pub promo_url: String,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            label_text: "identifiant: ".to_string(),
            label_size_pt: 30.0,
            name_size_pt: 36.0,
            key_size_pt: 18.0,
            icon_size_pt: 20.0,
            footer_size_pt: 24.0,
            line_height: 50.0,
            top_offset: 50.0,
            long_name_threshold: 15,
            image_inset: 70.0,
            text_inset: 70.0,
            logo_offset: 100.0,
            logo_size: 100.0,
            promo_text: "Téléchargez l'app Césium".to_string(),
            promo_url: "https://cesium.app/fr/".to_string(),
        }
    }
}

/// Everything the document assembler needs besides the users themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardOptions {
    pub geometry: PageGeometry,
    pub style: CardStyle,
}
