//! Share-link construction for blog posts.

use url::form_urlencoded;

use super::models::BlogPost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Twitter,
    LinkedIn,
    CopyLink,
}

impl ShareTarget {
    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::Twitter => "Twitter",
            ShareTarget::LinkedIn => "LinkedIn",
            ShareTarget::CopyLink => "Copy link",
        }
    }
}

/// Canonical URL of a post under the site root.
pub fn post_url(site_url: &str, post: &BlogPost) -> String {
    format!("{}/blog/{}", site_url.trim_end_matches('/'), post.slug)
}

/// The link a share action puts on the clipboard: either the post URL
/// itself or a pre-filled share intent with encoded parameters.
pub fn share_link(target: ShareTarget, post_url: &str, title: &str) -> String {
    match target {
        ShareTarget::Twitter => format!(
            "https://twitter.com/intent/tweet?url={}&text={}",
            encode(post_url),
            encode(title)
        ),
        ShareTarget::LinkedIn => format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encode(post_url)
        ),
        ShareTarget::CopyLink => post_url.to_string(),
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> BlogPost {
        BlogPost {
            slug: "boring-forms".to_string(),
            title: "The Case for Boring Forms".to_string(),
            date: "2024-06-03".to_string(),
            summary: String::new(),
        }
    }

    #[test]
    fn test_post_url_joins_site_and_slug() {
        let p = post();
        assert_eq!(
            post_url("https://example.com", &p),
            "https://example.com/blog/boring-forms"
        );
        // A trailing slash on the site root does not double up.
        assert_eq!(
            post_url("https://example.com/", &p),
            "https://example.com/blog/boring-forms"
        );
    }

    #[test]
    fn test_twitter_link_encodes_parameters() {
        let link = share_link(
            ShareTarget::Twitter,
            "https://example.com/blog/boring-forms",
            "The Case for Boring Forms",
        );
        assert!(link.starts_with("https://twitter.com/intent/tweet?url="));
        assert!(link.contains("url=https%3A%2F%2Fexample.com%2Fblog%2Fboring-forms"));
        assert!(link.contains("text=The+Case+for+Boring+Forms"));
    }

    #[test]
    fn test_linkedin_link_encodes_url() {
        let link = share_link(
            ShareTarget::LinkedIn,
            "https://example.com/blog/boring-forms",
            "ignored",
        );
        assert_eq!(
            link,
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fexample.com%2Fblog%2Fboring-forms"
        );
    }

    #[test]
    fn test_copy_link_is_the_post_url() {
        let url = "https://example.com/blog/boring-forms";
        assert_eq!(share_link(ShareTarget::CopyLink, url, "t"), url);
    }
}
