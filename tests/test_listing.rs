use rapide::config::Config;
use rapide::files::listing;
use tempfile::TempDir;

fn fixture() -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("b.txt"), b"b").unwrap();
    std::fs::write(dir.path().join("a.txt"), b"a").unwrap();
    std::fs::create_dir(dir.path().join("zeta")).unwrap();
    std::fs::create_dir(dir.path().join("alpha")).unwrap();

    let cfg = Config::new(5050, dir.path(), false).unwrap();
    (dir, cfg)
}

#[tokio::test]
async fn test_listing_contains_every_child() {
    let (dir, cfg) = fixture();

    let page = listing::render(dir.path(), "/", &cfg).await.unwrap();

    assert!(page.contains(">a.txt</a>"));
    assert!(page.contains(">b.txt</a>"));
    assert!(page.contains(">alpha/</a>"));
    assert!(page.contains(">zeta/</a>"));
}

#[tokio::test]
async fn test_listing_links_carry_display_path_prefix() {
    let (dir, cfg) = fixture();

    let page = listing::render(dir.path(), "/sub/", &cfg).await.unwrap();

    assert!(page.contains("href=\"/sub/a.txt\""));
    assert!(page.contains("href=\"/sub/alpha/\""));
}

#[tokio::test]
async fn test_listing_heading_shows_display_path() {
    let (dir, cfg) = fixture();

    let page = listing::render(dir.path(), "/sub/", &cfg).await.unwrap();

    assert!(page.contains("Index of <b>/sub/</b>"));
}

#[tokio::test]
async fn test_listing_directories_before_files_and_sorted() {
    let (dir, cfg) = fixture();

    let page = listing::render(dir.path(), "/", &cfg).await.unwrap();

    let alpha = page.find(">alpha/</a>").unwrap();
    let zeta = page.find(">zeta/</a>").unwrap();
    let a = page.find(">a.txt</a>").unwrap();
    let b = page.find(">b.txt</a>").unwrap();

    // Directory entries come first, each set lexicographically sorted.
    assert!(alpha < zeta);
    assert!(zeta < a);
    assert!(a < b);
}

#[tokio::test]
async fn test_listing_is_deterministic() {
    let (dir, cfg) = fixture();

    let first = listing::render(dir.path(), "/", &cfg).await.unwrap();
    let second = listing::render(dir.path(), "/", &cfg).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_listing_footer_names_root_and_address() {
    let (dir, cfg) = fixture();

    let page = listing::render(dir.path(), "/", &cfg).await.unwrap();

    assert!(page.contains(&format!("Serving \"{}\"", dir.path().display())));
    assert!(page.contains("127.0.0.1:5050"));
}

#[tokio::test]
async fn test_listing_empty_directory() {
    let dir = TempDir::new().unwrap();
    let cfg = Config::new(5050, dir.path(), false).unwrap();

    let page = listing::render(dir.path(), "/", &cfg).await.unwrap();

    assert!(page.contains("<ul"));
    assert!(!page.contains("<li>"));
}

#[tokio::test]
async fn test_listing_enumeration_failure_is_an_error() {
    let dir = TempDir::new().unwrap();
    let cfg = Config::new(5050, dir.path(), false).unwrap();

    let missing = dir.path().join("vanished");
    let err = listing::render(&missing, "/vanished/", &cfg)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("failed to read directory"));
}
