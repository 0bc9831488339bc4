//! Document assembly: open/append/finalize lifecycle around the layout
//! engine, plus the batch modes.

use crate::layout::{self, EmbeddedImage};
use crate::options::CardOptions;
use crate::types::{CardError, CardUser, OutputMode, Result};
use printpdf::{FontId, Mm, ParsedFont, PdfDocument, PdfPage, PdfSaveOptions, RawImage};
use std::path::{Path, PathBuf};

const MM_PER_PT: f32 = 0.352778;

/// File name for combined output.
pub const COMBINED_FILE_NAME: &str = "user-all.pdf";

/// `user-{displayName}.pdf`, with path separators replaced so a display
/// name can never escape the output directory.
pub fn output_file_name(display_name: &str) -> String {
    let safe: String = display_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("user-{safe}.pdf")
}

/// Static assets shared by every card: the footer logo and, optionally,
/// the icon font for the key glyph.
#[derive(Debug, Clone)]
pub struct DocumentAssets {
    pub logo_png: Vec<u8>,
    pub icon_font: Option<Vec<u8>>,
}

impl DocumentAssets {
    pub async fn load(logo_path: impl AsRef<Path>, icon_font_path: Option<&Path>) -> Result<Self> {
        let logo_png = tokio::fs::read(logo_path.as_ref()).await?;
        let icon_font = match icon_font_path {
            Some(path) => Some(tokio::fs::read(path).await?),
            None => None,
        };
        Ok(Self {
            logo_png,
            icon_font,
        })
    }
}

/// One output file in the making. Owns the document and its pages until
/// finalized; one page per added user.
pub struct CardDocument {
    doc: PdfDocument,
    options: CardOptions,
    logo: EmbeddedImage,
    icon_font: Option<FontId>,
    pages: Vec<PdfPage>,
}

impl CardDocument {
    pub fn new(title: &str, options: &CardOptions, assets: &DocumentAssets) -> Result<Self> {
        let mut doc = PdfDocument::new(title);
        let mut warnings = Vec::new();

        let logo_raw = RawImage::decode_from_bytes(&assets.logo_png, &mut warnings)
            .map_err(CardError::Image)?;
        let logo = EmbeddedImage {
            width_px: logo_raw.width,
            height_px: logo_raw.height,
            id: doc.add_image(&logo_raw),
        };

        let icon_font = match &assets.icon_font {
            Some(bytes) => {
                let parsed = ParsedFont::from_bytes(bytes, 0, &mut warnings)
                    .ok_or_else(|| CardError::Font("could not parse icon font".to_string()))?;
                Some(doc.add_font(&parsed))
            }
            None => None,
        };

        Ok(Self {
            doc,
            options: options.clone(),
            logo,
            icon_font,
            pages: Vec::new(),
        })
    }

    /// Lay out one user's four cards on a fresh page. The page is only
    /// appended once fully built, so a failure here leaves the document
    /// exactly as it was.
    pub fn add_user_page(&mut self, user: &CardUser, qr_png: &[u8]) -> Result<()> {
        let mut warnings = Vec::new();
        let code_raw =
            RawImage::decode_from_bytes(qr_png, &mut warnings).map_err(CardError::Image)?;
        let code = EmbeddedImage {
            width_px: code_raw.width,
            height_px: code_raw.height,
            id: self.doc.add_image(&code_raw),
        };

        let geom = self.options.geometry;
        let ops = layout::page_ops(
            geom,
            user,
            &code,
            &self.logo,
            self.icon_font.as_ref(),
            &self.options.style,
        );
        self.pages.push(PdfPage::new(
            Mm(geom.width * MM_PER_PT),
            Mm(geom.height * MM_PER_PT),
            ops,
        ));
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Finalize to raw PDF bytes.
    pub fn save_bytes(mut self) -> Vec<u8> {
        self.doc.pages = self.pages;
        let mut warnings = Vec::new();
        self.doc.save(&PdfSaveOptions::default(), &mut warnings)
    }

    /// Finalize and write the file.
    ///
    /// Serialization happens inline: the document's parsed fonts are
    /// not `Send`, so it cannot move to the blocking pool.
    pub async fn save_to(self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.save_bytes();
        tokio::fs::write(path.as_ref(), bytes).await?;
        Ok(())
    }
}

/// What a batch run produced: written files plus skip accounting.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub rendered: usize,
    pub skipped: usize,
    pub files: Vec<PathBuf>,
}

/// Render every user, strictly sequentially.
///
/// Per-user failures (oversized payload, undecodable image) skip that
/// user and never abort the batch; only output-file I/O errors do. In
/// `SingleFile` mode a failed user contributes no page and the document
/// is still finalized with all successful pages.
pub async fn run_batch(
    users: &[CardUser],
    mode: OutputMode,
    options: &CardOptions,
    assets: &DocumentAssets,
    out_dir: impl AsRef<Path>,
) -> Result<BatchSummary> {
    let out_dir = out_dir.as_ref();
    tokio::fs::create_dir_all(out_dir).await?;
    let mut summary = BatchSummary::default();

    match mode {
        OutputMode::PerUserFile => {
            for user in users {
                let qr_png = match card_qr::encode_png(user.key.clone()).await {
                    Ok(png) => png,
                    Err(err) => {
                        tracing::warn!("Skipping {}: {}", user.display_name, err);
                        summary.skipped += 1;
                        continue;
                    }
                };

                let mut doc = CardDocument::new(&user.display_name, options, assets)?;
                if let Err(err) = doc.add_user_page(user, &qr_png) {
                    tracing::warn!("Skipping {}: {}", user.display_name, err);
                    summary.skipped += 1;
                    continue;
                }

                let path = out_dir.join(output_file_name(&user.display_name));
                doc.save_to(&path).await?;
                tracing::info!("Created file: {}", path.display());
                summary.rendered += 1;
                summary.files.push(path);
            }
        }
        OutputMode::SingleFile => {
            let mut doc = CardDocument::new("user-all", options, assets)?;
            for user in users {
                let qr_png = match card_qr::encode_png(user.key.clone()).await {
                    Ok(png) => png,
                    Err(err) => {
                        tracing::warn!("Skipping {}: {}", user.display_name, err);
                        summary.skipped += 1;
                        continue;
                    }
                };
                match doc.add_user_page(user, &qr_png) {
                    Ok(()) => {
                        tracing::info!("Added page for {}", user.display_name);
                        summary.rendered += 1;
                    }
                    Err(err) => {
                        tracing::warn!("Skipping {}: {}", user.display_name, err);
                        summary.skipped += 1;
                    }
                }
            }

            if doc.page_count() == 0 {
                tracing::warn!("No users rendered, not writing {COMBINED_FILE_NAME}");
            } else {
                let path = out_dir.join(COMBINED_FILE_NAME);
                doc.save_to(&path).await?;
                tracing::info!("Created file: {}", path.display());
                summary.files.push(path);
            }
        }
    }

    Ok(summary)
}
