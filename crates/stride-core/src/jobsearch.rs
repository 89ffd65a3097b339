//! Job board search URL generation
//!
//! Builds direct search links for the major boards from a title and
//! location. Query-style boards get percent-encoded parameters; the
//! path-style boards (Naukri, Wellfound, Internshala) use slugs.

use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

/// A search link on one job board
#[derive(Debug, Clone, Serialize)]
pub struct JobBoardLink {
    pub board: &'static str,
    pub url: String,
}

/// Boards covered by `search_urls`, in output order
pub const BOARDS: &[&str] = &[
    "LinkedIn",
    "Indeed",
    "Naukri",
    "Glassdoor",
    "Wellfound",
    "Internshala",
];

fn slugify(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

fn with_params(base: &str, params: &[(&str, &str)]) -> Result<String> {
    let url = Url::parse_with_params(base, params)
        .map_err(|e| Error::Validation(format!("Invalid search URL: {}", e)))?;
    Ok(url.into())
}

/// Build search URLs for `title` in `location` across all boards
pub fn search_urls(title: &str, location: &str) -> Result<Vec<JobBoardLink>> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::Validation("Job title is required".into()));
    }
    let location = match location.trim() {
        "" => "India",
        l => l,
    };

    let title_slug = slugify(title);
    let location_slug = slugify(location);

    Ok(vec![
        JobBoardLink {
            board: "LinkedIn",
            url: with_params(
                "https://www.linkedin.com/jobs/search/",
                &[("keywords", title), ("location", location)],
            )?,
        },
        JobBoardLink {
            board: "Indeed",
            url: with_params("https://www.indeed.com/jobs", &[("q", title), ("l", location)])?,
        },
        JobBoardLink {
            board: "Naukri",
            url: format!("https://www.naukri.com/{}-jobs-in-{}", title_slug, location_slug),
        },
        JobBoardLink {
            board: "Glassdoor",
            url: with_params(
                "https://www.glassdoor.co.in/Job/jobs.htm",
                &[("sc.keyword", title), ("locT", "C"), ("locKeyword", location)],
            )?,
        },
        JobBoardLink {
            board: "Wellfound",
            url: format!("https://wellfound.com/role/r/{}", title_slug),
        },
        JobBoardLink {
            board: "Internshala",
            url: format!(
                "https://internshala.com/jobs/{}-jobs-in-{}",
                title_slug, location_slug
            ),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_rejected() {
        assert!(search_urls("", "India").is_err());
        assert!(search_urls("   ", "India").is_err());
    }

    #[test]
    fn covers_every_board() {
        let links = search_urls("Rust Developer", "Berlin").unwrap();
        let boards: Vec<&str> = links.iter().map(|l| l.board).collect();
        assert_eq!(boards, BOARDS);
    }

    #[test]
    fn query_boards_percent_encode() {
        let links = search_urls("Rust Developer", "New York").unwrap();
        let linkedin = &links[0];
        assert!(linkedin.url.contains("keywords=Rust+Developer") || linkedin.url.contains("keywords=Rust%20Developer"));
    }

    #[test]
    fn path_boards_use_slugs() {
        let links = search_urls("Rust Developer", "New York").unwrap();
        let naukri = links.iter().find(|l| l.board == "Naukri").unwrap();
        assert_eq!(
            naukri.url,
            "https://www.naukri.com/rust-developer-jobs-in-new-york"
        );
    }

    #[test]
    fn blank_location_defaults() {
        let links = search_urls("Analyst", "  ").unwrap();
        let naukri = links.iter().find(|l| l.board == "Naukri").unwrap();
        assert!(naukri.url.ends_with("analyst-jobs-in-india"));
    }
}
