//! Server icon coercion through `conf set icon` / `conf get icon`.

use craftctl_core::conf::{self, ConfChange};
use craftctl_core::error::CraftError;
use craftctl_core::icon::{icon_dimensions, resize_icon, IconOutcome, ICON_SIZE};
use craftctl_test_utils::fixtures::{png_bytes, write_png};
use craftctl_test_utils::{MemoryFetcher, TestServer};

const ICON_URL: &str = "https://img.test/logo.png";

#[test]
fn test_remote_icon_is_fetched_and_resized() {
    let server = TestServer::with_defaults();
    let fetcher = MemoryFetcher::new().with(ICON_URL, png_bytes(512, 256));

    let change = conf::set(&fetcher, &server.dir, ICON_SIZE, "icon", ICON_URL).unwrap();
    assert_eq!(change, ConfChange::Icon(IconOutcome::Written));
    assert_eq!(icon_dimensions(&server.dir.icon()).unwrap(), (64, 64));
    assert_eq!(fetcher.requests(), vec![ICON_URL.to_string()]);
}

#[test]
fn test_file_url_is_read_locally() {
    let server = TestServer::empty();
    let src = write_png(server.path(), "source.png", 16, 16);
    let source = format!("file://{}", src.display());

    let outcome = resize_icon(&MemoryFetcher::new(), &source, &server.dir.icon(), 64, 64).unwrap();
    assert_eq!(outcome, IconOutcome::Written);
    assert_eq!(icon_dimensions(&server.dir.icon()).unwrap(), (64, 64));
}

#[test]
fn test_icon_overwrites_previous() {
    let server = TestServer::empty();
    write_png(server.path(), "server-icon.png", 10, 10);
    let src = write_png(server.path(), "new.png", 200, 200);

    resize_icon(
        &MemoryFetcher::new(),
        src.to_str().unwrap(),
        &server.dir.icon(),
        64,
        64,
    )
    .unwrap();
    assert_eq!(icon_dimensions(&server.dir.icon()).unwrap(), (64, 64));
}

#[test]
fn test_remote_failure_keeps_existing_icon() {
    let server = TestServer::empty();
    write_png(server.path(), "server-icon.png", 64, 64);

    let result = resize_icon(&MemoryFetcher::new(), ICON_URL, &server.dir.icon(), 64, 64);
    assert!(matches!(result, Err(CraftError::Download { .. })));
    assert!(server.dir.icon().exists());
}

#[test]
fn test_remote_non_image_is_decode_error() {
    let server = TestServer::empty();
    let fetcher = MemoryFetcher::new().with(ICON_URL, "<html>not found</html>");

    let result = resize_icon(&fetcher, ICON_URL, &server.dir.icon(), 64, 64);
    assert!(matches!(result, Err(CraftError::ImageDecode(_))));
}

#[test]
fn test_remove_sentinel_via_conf() {
    let server = TestServer::with_defaults();
    write_png(server.path(), "server-icon.png", 64, 64);

    let change = conf::set(&MemoryFetcher::new(), &server.dir, ICON_SIZE, "icon", "rm").unwrap();
    assert_eq!(change, ConfChange::Icon(IconOutcome::Removed));
    assert!(!server.dir.icon().exists());

    let change = conf::set(&MemoryFetcher::new(), &server.dir, ICON_SIZE, "icon", "rm").unwrap();
    assert_eq!(change, ConfChange::Icon(IconOutcome::NothingToRemove));
}

#[test]
fn test_conf_get_icon_describes_file() {
    let server = TestServer::with_defaults();
    write_png(server.path(), "server-icon.png", 64, 64);

    let described = conf::get(&server.dir, "ICON").unwrap();
    assert!(described.ends_with("server-icon.png (64x64)"), "{described}");
}
