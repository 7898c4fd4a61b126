use html_escape::decode_html_entities;
use lol_html::{HtmlRewriter, Selector, Settings, element};
use reqwest::Client;
use tracing::{debug, trace};
use url::Url;

use crate::{
    config::{DiscoverConfig, validate_container_id},
    errors::DiscoverError,
};

/// Fetched page body together with its final URL (after redirects).
#[derive(Debug, Clone)]
pub struct Page {
    pub url: Url,
    pub body: String,
}

/// GET the page that holds the links.
pub async fn fetch_page(client: &Client, url: &str) -> Result<Page, DiscoverError> {
    let url = Url::parse(url)?;
    trace!(target: "warm.discover", %url, "fetching page");

    let response = client.get(url).send().await?.error_for_status()?;
    let url = response.url().clone();
    let body = response.text().await?;

    debug!(target: "warm.discover", %url, bytes = body.len(), "page fetched");
    Ok(Page { url, body })
}

/// Fetch the configured page and collect the links of its container.
pub async fn discover(client: &Client, cfg: &DiscoverConfig) -> Result<Vec<String>, DiscoverError> {
    cfg.validate()?;
    let page = fetch_page(client, &cfg.page_url).await?;
    discover_links(&page.body, &page.url, &cfg.container_id)
}

/// Collect the absolute URLs of every `a[href]` inside the element `#container_id`.
///
/// Links keep document order and are resolved against `base` the way a browser
/// resolves `a.href`. Only `http` and `https` targets are kept.
pub fn discover_links(
    html: &str,
    base: &Url,
    container_id: &str,
) -> Result<Vec<String>, DiscoverError> {
    validate_container_id(container_id)?;

    let container_sel = format!("#{container_id}");
    let link_sel = format!("#{container_id} a[href]");
    for sel in [&container_sel, &link_sel] {
        sel.parse::<Selector>()
            .map_err(|e| DiscoverError::Parse(format!("selector {sel}: {e}")))?;
    }

    let mut found = false;
    let mut hrefs: Vec<String> = Vec::new();
    {
        let mut rewriter = HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![
                    element!(container_sel, |_el| {
                        found = true;
                        Ok(())
                    }),
                    element!(link_sel, |el| {
                        if let Some(href) = el.get_attribute("href") {
                            hrefs.push(href);
                        }
                        Ok(())
                    }),
                ],
                ..Settings::default()
            },
            |_: &[u8]| {},
        );
        rewriter
            .write(html.as_bytes())
            .map_err(|e| DiscoverError::Parse(e.to_string()))?;
        rewriter
            .end()
            .map_err(|e| DiscoverError::Parse(e.to_string()))?;
    }

    if !found {
        return Err(DiscoverError::ContainerNotFound(container_id.to_string()));
    }

    let links: Vec<String> = hrefs
        .iter()
        .filter_map(|href| resolve(base, href))
        .collect();
    debug!(
        target: "warm.discover",
        container = container_id,
        anchors = hrefs.len(),
        links = links.len(),
        "links discovered"
    );

    if links.is_empty() {
        return Err(DiscoverError::NoLinks);
    }
    Ok(links)
}

fn resolve(base: &Url, href: &str) -> Option<String> {
    // attribute values come back with character references intact
    let href = decode_html_entities(href);
    match base.join(href.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url.into()),
        Ok(url) => {
            trace!(target: "warm.discover", %url, "skipping non-http link");
            None
        }
        Err(e) => {
            trace!(target: "warm.discover", href = %href, error = %e, "skipping unresolvable link");
            None
        }
    }
}

/// Parse a plain URL list: one URL per line, blank lines and `#` comments skipped.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
