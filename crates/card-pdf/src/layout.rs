//! Card layout engine.
//!
//! Pure op emission: every function takes explicit geometry and a
//! vertical cursor in layout space (origin top-left, device units) and
//! returns the ops plus the advanced cursor. Nothing here carries
//! state between calls, and no block reaches outside its quadrant.

use crate::geometry::{PageGeometry, Quadrant};
use crate::options::CardStyle;
use crate::types::CardUser;
use printpdf::{
    Actions, BuiltinFont, Color, FontId, LinePoint, LinkAnnotation, Op, PaintMode, Point, Polygon,
    PolygonRing, Pt, Rect, Rgb, TextItem, WindingOrder, XObjectId, XObjectTransform,
};

/// An image already registered with the document, plus its pixel size
/// (needed to compute the fit scale).
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    pub id: XObjectId,
    pub width_px: usize,
    pub height_px: usize,
}

/// Font Awesome "key" glyph, drawn before the public key when an icon
/// font is registered.
const KEY_GLYPH: char = '\u{f084}';

/// The key line sits this far below the cursor within its block.
const KEY_TEXT_DROP: f32 = 30.0;

/// Vertical gap between the footer's two text lines, and their drop
/// below the footer top.
const FOOTER_LINE_DROP: f32 = 30.0;

/// Horizontal gap between the logo box and the footer text.
const FOOTER_TEXT_GAP: f32 = 120.0;

fn black() -> Color {
    Color::Rgb(Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        icc_profile: None,
    })
}

fn link_blue() -> Color {
    Color::Rgb(Rgb {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        icc_profile: None,
    })
}

/// Whether a display name is too long to share a line with its label.
pub fn needs_name_break(display_name: &str, threshold: usize) -> bool {
    display_name.chars().count() > threshold
}

fn line_point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    }
}

/// Stroked rectangle outline; `y_top` is in layout space.
fn stroke_rect(geom: PageGeometry, x: f32, y_top: f32, w: f32, h: f32) -> Op {
    let top = geom.height - y_top;
    let bottom = geom.height - (y_top + h);
    Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![PolygonRing {
                points: vec![
                    line_point(x, top),
                    line_point(x + w, top),
                    line_point(x + w, bottom),
                    line_point(x, bottom),
                ],
            }],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        },
    }
}

/// Outline the four quadrants. Emitted once per page, not per card.
pub fn border_ops(geom: PageGeometry) -> Vec<Op> {
    let (hw, hh) = (geom.half_width(), geom.half_height());
    let mut ops = vec![
        Op::SetOutlineColor { col: black() },
        Op::SetOutlineThickness { pt: Pt(1.0) },
    ];
    for quadrant in Quadrant::ALL {
        let (x, y) = geom.quadrant_origin(quadrant);
        ops.push(stroke_rect(geom, x, y, hw, hh));
    }
    ops
}

/// One single-font text run as its own text section. `y` is the
/// baseline in layout space.
fn text_section(geom: PageGeometry, x: f32, y: f32, font: BuiltinFont, size: f32, text: &str) -> Vec<Op> {
    vec![
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: Point {
                x: Pt(x),
                y: Pt(geom.height - y),
            },
        },
        Op::SetFontSizeBuiltinFont {
            font,
            size: Pt(size),
        },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font,
        },
        Op::EndTextSection,
    ]
}

/// Label plus display name. Short names render inline after the label;
/// names over the threshold get a forced break onto their own line,
/// which costs one extra line of cursor advance.
pub fn label_block(
    geom: PageGeometry,
    base_x: f32,
    cursor: f32,
    display_name: &str,
    style: &CardStyle,
) -> (Vec<Op>, f32) {
    let x = base_x + style.text_inset;
    let baseline = cursor + style.line_height;
    let long_name = needs_name_break(display_name, style.long_name_threshold);

    if long_name {
        let mut ops = text_section(
            geom,
            x,
            baseline,
            BuiltinFont::Helvetica,
            style.label_size_pt,
            &style.label_text,
        );
        ops.extend(text_section(
            geom,
            x,
            baseline + style.line_height,
            BuiltinFont::HelveticaBold,
            style.name_size_pt,
            display_name,
        ));
        (ops, cursor + 2.0 * style.line_height)
    } else {
        // Inline: one text section, font switch between the runs.
        let ops = vec![
            Op::StartTextSection,
            Op::SetTextCursor {
                pos: Point {
                    x: Pt(x),
                    y: Pt(geom.height - baseline),
                },
            },
            Op::SetFontSizeBuiltinFont {
                font: BuiltinFont::Helvetica,
                size: Pt(style.label_size_pt),
            },
            Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(style.label_text.clone())],
                font: BuiltinFont::Helvetica,
            },
            Op::SetFontSizeBuiltinFont {
                font: BuiltinFont::HelveticaBold,
                size: Pt(style.name_size_pt),
            },
            Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(display_name.to_string())],
                font: BuiltinFont::HelveticaBold,
            },
            Op::EndTextSection,
        ];
        (ops, cursor + style.line_height)
    }
}

/// Icon glyph (when an icon font is registered) followed by the raw
/// public key, left-aligned in the column.
pub fn key_block(
    geom: PageGeometry,
    base_x: f32,
    cursor: f32,
    key: &str,
    icon_font: Option<&FontId>,
    style: &CardStyle,
) -> (Vec<Op>, f32) {
    let x = base_x + style.text_inset;
    let baseline = cursor + KEY_TEXT_DROP;

    let mut ops = vec![
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: Point {
                x: Pt(x),
                y: Pt(geom.height - baseline),
            },
        },
    ];
    if let Some(font) = icon_font {
        ops.push(Op::SetFontSize {
            size: Pt(style.icon_size_pt),
            font: font.clone(),
        });
        ops.push(Op::WriteText {
            items: vec![TextItem::Text(format!("{KEY_GLYPH} "))],
            font: font.clone(),
        });
    }
    ops.push(Op::SetFontSizeBuiltinFont {
        font: BuiltinFont::CourierBold,
        size: Pt(style.key_size_pt),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(key.to_string())],
        font: BuiltinFont::CourierBold,
    });
    ops.push(Op::EndTextSection);

    (ops, cursor + 2.0 * style.line_height)
}

/// Place an embedded image with its top-left corner at (`x`, `y_top`),
/// uniformly scaled to fit a `fit_w` x `fit_h` box.
fn image_ops(geom: PageGeometry, image: &EmbeddedImage, x: f32, y_top: f32, fit_w: f32, fit_h: f32) -> Op {
    let scale_w = fit_w / image.width_px as f32;
    let scale_h = fit_h / image.height_px as f32;
    let scale = scale_w.min(scale_h);
    let drawn_h = image.height_px as f32 * scale;

    Op::UseXobject {
        id: image.id.clone(),
        transform: XObjectTransform {
            translate_x: Some(Pt(x)),
            translate_y: Some(Pt(geom.height - (y_top + drawn_h))),
            rotate: None,
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(72.0),
        },
    }
}

/// Scannable-code image, inset from each side of the column and fit
/// into the remaining square.
pub fn image_block(
    geom: PageGeometry,
    base_x: f32,
    cursor: f32,
    code: &EmbeddedImage,
    style: &CardStyle,
) -> (Vec<Op>, f32) {
    let side = geom.half_width() - 2.0 * style.image_inset;
    let ops = vec![image_ops(
        geom,
        code,
        base_x + style.image_inset,
        cursor,
        side,
        side,
    )];
    (ops, cursor + side)
}

/// Logo plus two promotional lines, the second one hyperlinked. The
/// link text and the navigable URL are the same literal.
pub fn footer_block(
    geom: PageGeometry,
    base_x: f32,
    cursor: f32,
    logo: &EmbeddedImage,
    style: &CardStyle,
) -> (Vec<Op>, f32) {
    let logo_x = base_x + style.logo_offset;
    let text_x = logo_x + FOOTER_TEXT_GAP;
    let first_baseline = cursor + FOOTER_LINE_DROP;
    let link_baseline = first_baseline + FOOTER_LINE_DROP;

    let mut ops = vec![image_ops(
        geom,
        logo,
        logo_x,
        cursor,
        style.logo_size,
        style.logo_size,
    )];

    ops.extend(text_section(
        geom,
        text_x,
        first_baseline,
        BuiltinFont::Helvetica,
        style.footer_size_pt,
        &style.promo_text,
    ));

    ops.push(Op::SetFillColor { col: link_blue() });
    ops.extend(text_section(
        geom,
        text_x,
        link_baseline,
        BuiltinFont::Helvetica,
        style.footer_size_pt,
        &style.promo_url,
    ));
    ops.push(Op::SetFillColor { col: black() });

    let link_width = (base_x + geom.half_width() - style.image_inset - text_x).max(0.0);
    ops.push(Op::LinkAnnotation {
        link: LinkAnnotation::new(
            Rect {
                x: Pt(text_x),
                y: Pt(geom.height - (link_baseline + 6.0)),
                width: Pt(link_width),
                height: Pt(style.footer_size_pt + 8.0),
            },
            Actions::Uri(style.promo_url.clone()),
            None,
            None,
            None,
        ),
    });

    (ops, cursor + style.logo_size + 10.0)
}

/// Draw one card into one quadrant. Called four times per page with
/// identical relative logic; only the quadrant origin differs.
pub fn card_ops(
    geom: PageGeometry,
    quadrant: Quadrant,
    user: &CardUser,
    code: &EmbeddedImage,
    logo: &EmbeddedImage,
    icon_font: Option<&FontId>,
    style: &CardStyle,
) -> Vec<Op> {
    let (base_x, base_y) = geom.quadrant_origin(quadrant);
    let mut ops = Vec::new();
    let mut cursor = base_y + style.top_offset;

    let (block, next) = label_block(geom, base_x, cursor, &user.display_name, style);
    ops.extend(block);
    cursor = next;

    let (block, next) = key_block(geom, base_x, cursor, &user.key, icon_font, style);
    ops.extend(block);
    cursor = next;

    let (block, next) = image_block(geom, base_x, cursor, code, style);
    ops.extend(block);
    cursor = next;

    let (block, _) = footer_block(geom, base_x, cursor, logo, style);
    ops.extend(block);

    ops
}

/// Full page for one user: the quadrant borders once, then a card in
/// each of the four quadrants.
pub fn page_ops(
    geom: PageGeometry,
    user: &CardUser,
    code: &EmbeddedImage,
    logo: &EmbeddedImage,
    icon_font: Option<&FontId>,
    style: &CardStyle,
) -> Vec<Op> {
    let mut ops = border_ops(geom);
    for quadrant in Quadrant::ALL {
        ops.extend(card_ops(geom, quadrant, user, code, logo, icon_font, style));
    }
    ops
}
