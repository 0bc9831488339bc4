use card_pdf::{
    output_file_name, run_batch, CardDocument, CardOptions, CardUser, DocumentAssets, OutputMode,
    COMBINED_FILE_NAME,
};
use tempfile::TempDir;

fn logo_png() -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        100,
        100,
        image::Rgb([30, 90, 200]),
    ));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .unwrap();
    bytes
}

fn assets() -> DocumentAssets {
    DocumentAssets {
        logo_png: logo_png(),
        icon_font: None,
    }
}

fn user(name: &str, key: &str) -> CardUser {
    CardUser {
        display_name: name.to_string(),
        key: key.to_string(),
    }
}

#[test]
fn test_output_file_name() {
    assert_eq!(output_file_name("alice"), "user-alice.pdf");
    assert_eq!(output_file_name("a/b\\c"), "user-a_b_c.pdf");
}

#[test]
fn test_document_has_one_page_per_user() {
    let options = CardOptions::default();
    let mut doc = CardDocument::new("cards", &options, &assets()).unwrap();

    let users = [user("alice", "AAAA"), user("bob", "BBBB"), user("carol", "CCCC")];
    for u in &users {
        let qr = card_qr::encode_png_sync(&u.key).unwrap();
        doc.add_user_page(u, &qr).unwrap();
    }

    assert_eq!(doc.page_count(), 3);
    let bytes = doc.save_bytes();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_failed_page_leaves_document_untouched() {
    let options = CardOptions::default();
    let mut doc = CardDocument::new("cards", &options, &assets()).unwrap();

    let bad = user("mallory", "MMMM");
    assert!(doc.add_user_page(&bad, b"not a png").is_err());
    assert_eq!(doc.page_count(), 0);
}

#[tokio::test]
async fn test_per_user_mode_writes_one_file_per_user() {
    let dir = TempDir::new().unwrap();
    let users = [user("alice", "AAAA"), user("bob", "BBBB")];

    let summary = run_batch(
        &users,
        OutputMode::PerUserFile,
        &CardOptions::default(),
        &assets(),
        dir.path(),
    )
    .await
    .unwrap();

    assert_eq!(summary.rendered, 2);
    assert_eq!(summary.skipped, 0);
    for name in ["user-alice.pdf", "user-bob.pdf"] {
        let bytes = std::fs::read(dir.path().join(name)).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "{name} is not a PDF");
    }
}

#[tokio::test]
async fn test_per_user_mode_skips_oversized_payload() {
    let dir = TempDir::new().unwrap();
    // Second key is far beyond the fixed symbol's capacity.
    let users = [user("alice", "AAAA"), user("bob", &"x".repeat(500))];

    let summary = run_batch(
        &users,
        OutputMode::PerUserFile,
        &CardOptions::default(),
        &assets(),
        dir.path(),
    )
    .await
    .unwrap();

    assert_eq!(summary.rendered, 1);
    assert_eq!(summary.skipped, 1);
    assert!(dir.path().join("user-alice.pdf").exists());
    assert!(!dir.path().join("user-bob.pdf").exists());
}

#[tokio::test]
async fn test_single_file_mode_writes_one_combined_file() {
    let dir = TempDir::new().unwrap();
    let users = [user("alice", "AAAA"), user("bob", "BBBB"), user("carol", "CCCC")];

    let summary = run_batch(
        &users,
        OutputMode::SingleFile,
        &CardOptions::default(),
        &assets(),
        dir.path(),
    )
    .await
    .unwrap();

    assert_eq!(summary.rendered, 3);
    assert_eq!(summary.files.len(), 1);
    let bytes = std::fs::read(dir.path().join(COMBINED_FILE_NAME)).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_single_file_mode_finalizes_despite_a_failed_user() {
    let dir = TempDir::new().unwrap();
    let users = [user("alice", "AAAA"), user("bob", &"x".repeat(500))];

    let summary = run_batch(
        &users,
        OutputMode::SingleFile,
        &CardOptions::default(),
        &assets(),
        dir.path(),
    )
    .await
    .unwrap();

    assert_eq!(summary.rendered, 1);
    assert_eq!(summary.skipped, 1);
    assert!(dir.path().join(COMBINED_FILE_NAME).exists());
}

#[tokio::test]
async fn test_single_file_mode_with_no_users_writes_nothing() {
    let dir = TempDir::new().unwrap();

    let summary = run_batch(
        &[],
        OutputMode::SingleFile,
        &CardOptions::default(),
        &assets(),
        dir.path(),
    )
    .await
    .unwrap();

    assert_eq!(summary.rendered, 0);
    assert!(summary.files.is_empty());
    assert!(!dir.path().join(COMBINED_FILE_NAME).exists());
}
