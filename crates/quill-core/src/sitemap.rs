//! Sitemap generation.
//!
//! Builds the sitemap document from the current posts and categories.
//! The structure is deterministic: the site root first, then one entry
//! per category, then one entry per post in the same date-descending
//! order as the post list.

use chrono::SecondsFormat;

use crate::domain::{Category, Post};

const URLSET_OPEN: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n";

/// Render the sitemap for the given content.
///
/// `posts` is expected in date-descending order and `categories` in
/// name-ascending order, matching the respective list operations.
pub fn build_sitemap(base_url: &str, posts: &[Post], categories: &[Category]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from(URLSET_OPEN);

    push_url(&mut xml, &format!("{base}/"), None, "daily", "1.0");

    for category in categories {
        push_url(
            &mut xml,
            &format!("{base}/category/{}", category.slug),
            None,
            "weekly",
            "0.6",
        );
    }

    for post in posts {
        let lastmod = post.date.to_rfc3339_opts(SecondsFormat::Millis, true);
        push_url(
            &mut xml,
            &format!("{base}/blog/{}", post.slug),
            Some(&lastmod),
            "weekly",
            "0.8",
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: Option<&str>, changefreq: &str, priority: &str) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{loc}</loc>\n"));
    if let Some(lastmod) = lastmod {
        xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
    }
    xml.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
    xml.push_str(&format!("    <priority>{priority}</priority>\n"));
    xml.push_str("  </url>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;

    fn post(slug: &str, date: &str) -> Post {
        Post::new(NewPost {
            title: slug.to_owned(),
            slug: slug.to_owned(),
            date: Some(date.parse().unwrap()),
            ..Default::default()
        })
    }

    #[test]
    fn entry_count_is_root_plus_categories_plus_posts() {
        let posts = vec![post("a", "2024-02-01T00:00:00Z"), post("b", "2024-01-01T00:00:00Z")];
        let categories = vec![Category::new("Tech".to_owned(), "tech".to_owned())];

        let xml = build_sitemap("http://example.com", &posts, &categories);

        assert_eq!(xml.matches("<url>").count(), 1 + categories.len() + posts.len());
    }

    #[test]
    fn entries_keep_root_category_post_order() {
        let posts = vec![
            post("newest", "2024-02-01T00:00:00Z"),
            post("oldest", "2024-01-01T00:00:00Z"),
        ];
        let categories = vec![Category::new("Tech".to_owned(), "tech".to_owned())];

        let xml = build_sitemap("http://example.com", &posts, &categories);

        let root = xml.find("<loc>http://example.com/</loc>").unwrap();
        let category = xml.find("<loc>http://example.com/category/tech</loc>").unwrap();
        let newest = xml.find("<loc>http://example.com/blog/newest</loc>").unwrap();
        let oldest = xml.find("<loc>http://example.com/blog/oldest</loc>").unwrap();
        assert!(root < category && category < newest && newest < oldest);
    }

    #[test]
    fn post_entries_carry_millisecond_lastmod() {
        let posts = vec![post("a", "2024-02-01T10:30:00Z")];

        let xml = build_sitemap("http://example.com/", &posts, &[]);

        assert!(xml.contains("<lastmod>2024-02-01T10:30:00.000Z</lastmod>"));
        assert!(xml.contains("<loc>http://example.com/blog/a</loc>"));
    }

    #[test]
    fn category_entries_have_no_lastmod() {
        let categories = vec![Category::new("Tech".to_owned(), "tech".to_owned())];

        let xml = build_sitemap("http://example.com", &[], &categories);

        let category_entry = xml
            .split("<url>")
            .find(|entry| entry.contains("/category/tech"))
            .unwrap();
        assert!(!category_entry.contains("<lastmod>"));
        assert!(category_entry.contains("<changefreq>weekly</changefreq>"));
        assert!(category_entry.contains("<priority>0.6</priority>"));
    }
}
