use anyhow::{Context, Result};
use regex::Regex;
use reqwest::{Client, StatusCode};

/// Title the To-Do frontend must serve.
const EXPECTED_TITLE: &str = "Uber To Do";

/// Bundle path the page must reference in a script tag.
const BUNDLE_SRC: &str = "/static/js/bundle.js";

/// The To-Do webapp serves its page with the expected title and bundle
/// script, and the bundle itself is fetchable.
pub async fn todo_webapp(client: &Client, page_url: &str, script_url: &str) -> Result<()> {
    let response = client
        .get(page_url)
        .send()
        .await
        .with_context(|| format!("error checking todo webapp at {page_url}"))?;
    if response.status() != StatusCode::OK {
        anyhow::bail!("todo webapp was not found (status {})", response.status());
    }

    let html = response
        .text()
        .await
        .with_context(|| format!("error reading todo webapp page from {page_url}"))?;
    let markers = page_markers(&html);
    if !markers.title_found {
        anyhow::bail!("todo webapp title was not found");
    }
    if !markers.script_found {
        anyhow::bail!("bundle script not referenced by todo webapp");
    }

    let script = client
        .get(script_url)
        .send()
        .await
        .with_context(|| format!("error checking script URL {script_url}"))?;
    if script.status() != StatusCode::OK {
        anyhow::bail!("bundle script at {script_url} returned {}", script.status());
    }

    Ok(())
}

#[derive(Debug, PartialEq)]
pub struct PageMarkers {
    pub title_found: bool,
    pub script_found: bool,
}

/// Scan the page HTML for the expected title text and bundle script tag.
pub fn page_markers(html: &str) -> PageMarkers {
    let title_re = Regex::new(r"(?is)<title[^>]*>([^<]*)</title>").expect("invalid regex");
    let title_found = title_re
        .captures(html)
        .is_some_and(|c| c[1].trim() == EXPECTED_TITLE);

    let script_re = Regex::new(r"(?is)<script\b[^>]*\bsrc\s*=\s*['\x22]([^'\x22]*)['\x22][^>]*>")
        .expect("invalid regex");
    let script_found = script_re
        .captures_iter(html)
        .any(|c| &c[1] == BUNDLE_SRC);

    PageMarkers {
        title_found,
        script_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
<html>
  <head>
    <title>Uber To Do</title>
  </head>
  <body>
    <div id="root"></div>
    <script src="/static/js/bundle.js"></script>
  </body>
</html>"#;

    #[test]
    fn test_markers_found_on_expected_page() {
        let markers = page_markers(PAGE);
        assert!(markers.title_found);
        assert!(markers.script_found);
    }

    #[test]
    fn test_title_is_matched_exactly() {
        let page = PAGE.replace("Uber To Do", "Some Other App");
        assert!(!page_markers(&page).title_found);
    }

    #[test]
    fn test_title_whitespace_is_trimmed() {
        let page = PAGE.replace("<title>Uber To Do</title>", "<title>\n  Uber To Do\n</title>");
        assert!(page_markers(&page).title_found);
    }

    #[test]
    fn test_script_matched_with_extra_attributes() {
        let page = PAGE.replace(
            r#"<script src="/static/js/bundle.js"></script>"#,
            r#"<script defer type="text/javascript" src="/static/js/bundle.js"></script>"#,
        );
        assert!(page_markers(&page).script_found);
    }

    #[test]
    fn test_other_script_src_is_not_the_bundle() {
        let page = PAGE.replace("/static/js/bundle.js", "/static/js/vendor.js");
        assert!(!page_markers(&page).script_found);
    }

    #[test]
    fn test_empty_page_has_no_markers() {
        let markers = page_markers("");
        assert!(!markers.title_found);
        assert!(!markers.script_found);
    }
}
