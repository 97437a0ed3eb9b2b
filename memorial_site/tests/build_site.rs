use std::fs;
use std::path::Path;
use std::process::Command;

use memorial_data::ValidationIssue;
use memorial_site::{BuildOptions, SiteConfig, SiteError, build_site};
use tempfile::TempDir;

const PEOPLE_CSV: &str = "\
name,slug(optional),years,location,story,image1,image1_alt,image2,image2_alt
Jane Doe,,1950-2020,Oak Grove,\"Line one
Line two\",,,,
,,1900,Nowhere,skipped row,,,,
\"Al \"\"Big Al\"\" <Smith> & Sons\",,,,,,,,
Grandma Jo,grandma,,By the lake,,assets/photos/jo.jpg,Jo on the dock,assets/photos/jo2.jpg,
";

fn options(dir: &TempDir, csv_text: &str) -> BuildOptions {
    let csv_path = dir.path().join("people.csv");
    fs::write(&csv_path, csv_text).expect("write csv");
    BuildOptions {
        csv_path,
        out_dir: dir.path().join("site"),
        config: SiteConfig::default(),
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()))
}

#[test]
fn jane_doe_page_matches_expected_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(&dir, PEOPLE_CSV);
    let summary = build_site(&opts).expect("build");

    assert_eq!(summary.pages, 3);
    let page = read(&opts.out_dir.join("people/jane-doe/index.html"));
    assert_eq!(page.matches("<p>").count(), 2);
    assert!(page.contains("<p>Line one</p>"));
    assert!(page.contains("<p>Line two</p>"));
    assert!(page.contains(r#"<p class="small">1950-2020</p>"#));
    assert!(!page.contains("<figure>"));
}

#[test]
fn output_tree_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(&dir, PEOPLE_CSV);
    let summary = build_site(&opts).expect("build");

    assert_eq!(summary.map_path, opts.out_dir.join("map.html"));
    assert!(opts.out_dir.join("assets").is_dir());
    assert!(opts.out_dir.join("people/jane-doe/index.html").is_file());
    assert!(opts.out_dir.join("people/al-big-al-smith-sons/index.html").is_file());
    assert!(opts.out_dir.join("people/grandma/index.html").is_file());
    assert!(!opts.out_dir.join("people/grandma-jo").exists());

    let people: Vec<_> = fs::read_dir(opts.out_dir.join("people")).expect("people dir").collect();
    assert_eq!(people.len(), 3);
}

#[test]
fn blank_name_rows_are_absent_everywhere() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(&dir, PEOPLE_CSV);
    build_site(&opts).expect("build");

    let map = read(&opts.out_dir.join("map.html"));
    assert!(!map.contains("Nowhere"));
    assert!(!map.contains("skipped row"));
    assert_eq!(map.matches("<li>").count(), 3);
}

#[test]
fn map_follows_csv_order_and_locations() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(&dir, PEOPLE_CSV);
    build_site(&opts).expect("build");

    let map = read(&opts.out_dir.join("map.html"));
    let jane = map.find("./people/jane-doe/").expect("jane");
    let al = map.find("./people/al-big-al-smith-sons/").expect("al");
    let jo = map.find("./people/grandma/").expect("jo");
    assert!(jane < al && al < jo);

    assert!(map.contains("Location: Oak Grove"));
    assert!(map.contains("Location: By the lake"));
    assert_eq!(map.matches("Location: ").count(), 2);
}

#[test]
fn special_characters_in_names_are_escaped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(&dir, PEOPLE_CSV);
    build_site(&opts).expect("build");

    let raw_name = r#"Al "Big Al" <Smith> & Sons"#;
    let escaped = "Al &quot;Big Al&quot; &lt;Smith&gt; &amp; Sons";
    for path in [opts.out_dir.join("people/al-big-al-smith-sons/index.html"), opts.out_dir.join("map.html")] {
        let html = read(&path);
        assert!(!html.contains(raw_name), "{} leaks raw name", path.display());
        assert!(!html.contains("<Smith>"));
        assert!(html.contains(escaped), "{} missing escaped name", path.display());
    }
}

#[test]
fn images_render_and_missing_files_are_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(&dir, PEOPLE_CSV);
    fs::create_dir_all(opts.out_dir.join("assets/photos")).expect("mkdir");
    fs::write(opts.out_dir.join("assets/photos/jo.jpg"), b"jpeg").expect("photo");

    let summary = build_site(&opts).expect("build");
    let page = read(&opts.out_dir.join("people/grandma/index.html"));
    assert_eq!(page.matches("<figure>").count(), 2);
    assert!(page.contains(r#"src="../../assets/photos/jo.jpg" alt="Jo on the dock""#));
    assert!(page.contains(r#"src="../../assets/photos/jo2.jpg" alt="Memorial photo""#));

    assert!(summary.issues.contains(&ValidationIssue::MissingImage {
        path: "assets/photos/jo2.jpg".into(),
        row: 4,
    }));
    assert!(!summary.issues.iter().any(|issue| matches!(
        issue,
        ValidationIssue::MissingImage { path, .. } if path == "assets/photos/jo.jpg"
    )));
}

#[test]
fn rebuild_overwrites_without_pruning() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(&dir, PEOPLE_CSV);
    build_site(&opts).expect("first build");

    fs::write(&opts.csv_path, "name,years\nJane Doe,1951-2021\n").expect("rewrite csv");
    let summary = build_site(&opts).expect("second build");
    assert_eq!(summary.pages, 1);

    let page = read(&opts.out_dir.join("people/jane-doe/index.html"));
    assert!(page.contains("1951-2021"));
    assert!(!page.contains("1950-2020"));
    // stale pages from the first run stay on disk, but the map forgets them
    assert!(opts.out_dir.join("people/grandma/index.html").exists());
    assert!(!read(&opts.out_dir.join("map.html")).contains("Grandma Jo"));
}

#[test]
fn duplicate_slugs_are_reported_and_last_row_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(&dir, "name,years\nAnn Lee,1900\nAnn  Lee,2000\n");
    let summary = build_site(&opts).expect("build");

    assert_eq!(
        summary.issues,
        vec![ValidationIssue::DuplicateSlug {
            slug: "ann-lee".into(),
            first_row: 1,
            row: 2,
        }]
    );
    assert!(read(&opts.out_dir.join("people/ann-lee/index.html")).contains("2000"));
}

#[test]
fn missing_csv_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = BuildOptions {
        csv_path: dir.path().join("absent.csv"),
        out_dir: dir.path().join("site"),
        config: SiteConfig::default(),
    };
    let err = build_site(&opts).unwrap_err();
    assert!(matches!(err, SiteError::CsvNotFound(_)));
    assert!(!opts.out_dir.exists());
}

#[test]
fn cli_reports_missing_csv_with_exit_code_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.csv");
    let out = dir.path().join("site");

    let output = Command::new(env!("CARGO_BIN_EXE_generate"))
        .arg(&missing)
        .arg("--out")
        .arg(&out)
        .output()
        .expect("run generate");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("CSV not found: {}", missing.display())));
    assert!(!out.exists());
}

#[test]
fn cli_prints_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(&dir, PEOPLE_CSV);

    let output = Command::new(env!("CARGO_BIN_EXE_generate"))
        .arg(&opts.csv_path)
        .arg("--out")
        .arg(&opts.out_dir)
        .output()
        .expect("run generate");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!(
        "Created 3 pages and rebuilt {} from people.csv",
        opts.out_dir.join("map.html").display()
    );
    assert_eq!(stdout.trim(), expected);
}

#[test]
fn cli_defaults_csv_to_output_root() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("docs");
    fs::create_dir_all(&out).expect("mkdir");
    fs::write(out.join("memorials_completed_with_images.csv"), "name\nAnn\n").expect("csv");

    let output = Command::new(env!("CARGO_BIN_EXE_generate"))
        .arg("--out")
        .arg(&out)
        .output()
        .expect("run generate");

    assert!(output.status.success());
    assert!(out.join("people/ann/index.html").is_file());
}
