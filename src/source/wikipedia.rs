// File: src/source/wikipedia.rs
use crate::config::DataLayout;
use crate::error::SourceError;
use crate::persistence::write_text_file;
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

/// A fetched article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    /// Raw wiki markup, including `[[links]]`.
    pub content: String,
    /// Plain text with markup removed.
    pub sanitized_content: String,
}

/// Resolves an article title to its text, or fails with `PageNotFound`.
pub trait ArticleSource {
    fn fetch(&self, title: &str) -> Result<Article, SourceError>;
}

fn link_pattern() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| {
        Regex::new(r"\[\[([\w ]+)(?:\|[\w ]+)?\]\]").expect("link pattern is valid")
    })
}

/// Titles of the `[[Title]]` and `[[Title|label]]` cross references in `content`.
pub fn extract_links(content: &str) -> Vec<String> {
    link_pattern()
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// One article, fetched on first use and cached afterwards.
pub struct WikipediaArticle<'a, S: ArticleSource + ?Sized> {
    source: &'a S,
    layout: DataLayout,
    title: String,
    article: Option<Article>,
}

impl<'a, S: ArticleSource + ?Sized> WikipediaArticle<'a, S> {
    pub fn new(source: &'a S, layout: DataLayout, title: &str) -> Self {
        Self { source, layout, title: title.to_string(), article: None }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn download(&mut self) -> Result<&Article, SourceError> {
        if self.article.is_none() {
            let article = self.source.fetch(&self.title)?;
            self.article = Some(article);
        }
        self.article
            .as_ref()
            .ok_or_else(|| SourceError::PageNotFound(self.title.clone()))
    }

    /// Writes the article's link titles, one per line, to `wikipedia/{setting}.txt`.
    pub fn download_links(&mut self, setting: &str) -> Result<Vec<String>, SourceError> {
        let links = extract_links(&self.download()?.content);
        let path = self.layout.wikipedia_file(setting);
        write_text_file(&path, &links.join("\n"))?;
        info!(title = %self.title, setting, links = links.len(), "saved article links");
        Ok(links)
    }

    /// Writes the sanitized article text under `wikipedia/source/`.
    pub fn download_content(&mut self) -> Result<(), SourceError> {
        let content = self.download()?.sanitized_content.clone();
        let path = self.layout.wikipedia_source(&self.title);
        write_text_file(&path, &content)?;
        info!(title = %self.title, bytes = content.len(), "saved article content");
        Ok(())
    }
}
