#![allow(dead_code)]

//! Boolean and X-Ray query synthesis.

use serde::{Deserialize, Serialize};

/// Only the first N keywords go into the OR block.
pub const MAX_OR_TERMS: usize = 6;

/// Builds `(k1 OR k2 ...) AND (role) AND location AND (experience)`.
///
/// Clauses for absent optional fields are omitted; order is fixed as
/// keyword block, role, location, experience. An empty keyword list yields
/// an empty string, meaning no query could be produced.
pub fn build_boolean<S: AsRef<str>>(
    keywords: &[S],
    role: Option<&str>,
    location: Option<&str>,
    experience: Option<&str>,
) -> String {
    if keywords.is_empty() {
        return String::new();
    }

    let or_block = keywords
        .iter()
        .take(MAX_OR_TERMS)
        .map(|k| quote_if_phrase(k.as_ref()))
        .collect::<Vec<_>>()
        .join(" OR ");

    let mut clauses = vec![format!("({or_block})")];

    if let Some(role) = role {
        clauses.push(format!("(\"{role}\" OR {role})"));
    }
    if let Some(location) = location {
        clauses.push(location.to_string());
    }
    if let Some(experience) = experience {
        clauses.push(format!(
            "(\"{experience} years\" OR \"{experience} yrs\" OR {experience})"
        ));
    }

    clauses.join(" AND ")
}

fn quote_if_phrase(keyword: &str) -> String {
    if keyword.contains(' ') {
        format!("\"{keyword}\"")
    } else {
        keyword.to_string()
    }
}

/// The fixed set of sites an X-Ray template is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XRaySite {
    Naukri,
    LinkedIn,
    Google,
}

impl XRaySite {
    pub const ALL: [XRaySite; 3] = [XRaySite::Naukri, XRaySite::LinkedIn, XRaySite::Google];

    pub fn name(self) -> &'static str {
        match self {
            XRaySite::Naukri => "Naukri",
            XRaySite::LinkedIn => "LinkedIn",
            XRaySite::Google => "Google",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            XRaySite::Naukri => "site:naukri.com/resume",
            XRaySite::LinkedIn => "site:linkedin.com/in",
            XRaySite::Google => "site:google.com \"resume\"",
        }
    }

    /// Embeds `boolean_query` verbatim after the site operator.
    pub fn render(self, boolean_query: &str) -> String {
        format!("{} {boolean_query}", self.prefix())
    }
}

/// One query string per site. Serializes as `{"Naukri": .., "LinkedIn": .., "Google": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XRayTemplates {
    #[serde(rename = "Naukri")]
    pub naukri: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
    #[serde(rename = "Google")]
    pub google: String,
}

impl XRayTemplates {
    pub fn get(&self, site: XRaySite) -> &str {
        match site {
            XRaySite::Naukri => &self.naukri,
            XRaySite::LinkedIn => &self.linkedin,
            XRaySite::Google => &self.google,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (XRaySite, &str)> + '_ {
        XRaySite::ALL.into_iter().map(move |site| (site, self.get(site)))
    }
}

/// Always produces all three sites, even for an empty `boolean_query`.
pub fn build_xray(boolean_query: &str) -> XRayTemplates {
    XRayTemplates {
        naukri: XRaySite::Naukri.render(boolean_query),
        linkedin: XRaySite::LinkedIn.render(boolean_query),
        google: XRaySite::Google.render(boolean_query),
    }
}
