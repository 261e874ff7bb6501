use chrono::NaiveDate;
use proptest::prelude::*;
use site_core::config::FrontmatterConfig;
use site_core::frontmatter::{self, DELIMITER};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
}

proptest! {
    #[test]
    fn existing_header_is_never_touched(body in "\\PC*") {
        let content = format!("{DELIMITER}\n{body}");
        let result = frontmatter::inject(&content, "post.md", date(), &FrontmatterConfig::default());
        prop_assert_eq!(result.as_ref(), content.as_str());
    }

    #[test]
    fn bare_markdown_keeps_body_as_suffix(body in "\\PC*") {
        prop_assume!(!body.starts_with(DELIMITER));
        let result = frontmatter::inject(&body, "post.md", date(), &FrontmatterConfig::default());
        prop_assert!(result.starts_with("---\ntitle: \""));
        prop_assert!(result.ends_with(body.as_str()));
        prop_assert!(result.contains("\npubDate: 2026-01-02\n"));
    }

    #[test]
    fn non_markdown_is_never_touched(body in "\\PC*", stem in "[a-z]{1,8}") {
        let name = format!("{stem}.txt");
        let result = frontmatter::inject(&body, &name, date(), &FrontmatterConfig::default());
        prop_assert_eq!(result.as_ref(), body.as_str());
    }

    #[test]
    fn injection_is_idempotent(body in "\\PC*") {
        let config = FrontmatterConfig::default();
        let once = frontmatter::inject(&body, "post.md", date(), &config).into_owned();
        let twice = frontmatter::inject(&once, "post.md", date(), &config);
        prop_assert_eq!(twice.as_ref(), once.as_str());
    }

    #[test]
    fn derived_title_is_single_line(body in "\\PC*", stem in "[a-z_-]{1,12}") {
        let title = frontmatter::derive_title(&body, &format!("{stem}.md"));
        prop_assert!(!title.contains('\n'));
    }
}
