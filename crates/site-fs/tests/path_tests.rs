use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use site_fs::NormalizedPath;

#[rstest]
#[case("/site", "post.md", "/site/post.md")]
#[case("/site", "./blog/post.md", "/site/blog/post.md")]
#[case("/site/blog", "../post.md", "/site/post.md")]
#[case("/site", "../../etc/passwd", "/etc/passwd")]
#[case("/site", "/etc/passwd", "/site/etc/passwd")]
#[case("/site/", "blog\\post.md", "/site/blog/post.md")]
fn join_resolves_segments(#[case] base: &str, #[case] segment: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(base).join(segment).as_str(), expected);
}

#[test]
fn traversal_is_visible_to_prefix_check() {
    let root = NormalizedPath::new("/workspace");
    let escaped = root.join("../secrets.md");

    assert_eq!(escaped.as_str(), "/secrets.md");
    assert!(!escaped.starts_with(&root));
}

#[test]
fn starts_with_is_component_wise() {
    let root = NormalizedPath::new("/site");
    assert!(NormalizedPath::new("/site").starts_with(&root));
    assert!(NormalizedPath::new("/site/blog").starts_with(&root));
    assert!(!NormalizedPath::new("/site-other/blog").starts_with(&root));
    assert!(NormalizedPath::new("/anything").starts_with(&NormalizedPath::new("/")));
}

#[test]
fn relative_to_strips_base() {
    let root = NormalizedPath::new("/site");
    let post = NormalizedPath::new("/site/src/content/blog/a.md");
    assert_eq!(post.relative_to(&root), Some("src/content/blog/a.md"));
    assert_eq!(NormalizedPath::new("/elsewhere/a.md").relative_to(&root), None);
}

#[test]
fn leading_parent_segments_are_dropped_for_relative_paths() {
    assert_eq!(NormalizedPath::new("../outside.md").as_str(), "outside.md");
    assert_eq!(NormalizedPath::new("a/../../b").as_str(), "b");
}

#[rstest]
#[case("/site/post.md", Some("md"))]
#[case("/site/post.mdx", Some("mdx"))]
#[case("/site/.hidden", None)]
#[case("/site/README", None)]
fn extension_detection(#[case] path: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(path).extension(), expected);
}

#[test]
fn file_name_and_parent() {
    let path = NormalizedPath::new("/site/blog/post.md");
    assert_eq!(path.file_name(), Some("post.md"));
    assert_eq!(path.parent().unwrap().as_str(), "/site/blog");
    assert_eq!(NormalizedPath::new("/site").parent().unwrap().as_str(), "/");
}

proptest! {
    #[test]
    fn normalized_paths_have_no_dot_segments(s in "[a-z./\\\\]{0,40}") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));
        for segment in as_str.split('/') {
            prop_assert!(segment != "." && segment != "..");
        }
    }

    #[test]
    fn normalization_is_idempotent(s in "[a-z./]{0,40}") {
        let once = NormalizedPath::new(&s);
        let twice = NormalizedPath::new(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn joined_plain_segments_stay_under_base(seg in "[a-z]{1,8}(/[a-z]{1,8}){0,3}") {
        let base = NormalizedPath::new("/site");
        prop_assert!(base.join(&seg).starts_with(&base));
    }
}
