//! Candidate ranking: scores a shuffled sample of the pool against the JD keywords.
//!
//! Score, starting at 0:
//! 1. +30 if any keyword exactly matches a skill (case-insensitive set membership)
//! 2. +10 per matching keyword, capped at 40 (counts the same matches as step 1)
//! 3. +10 if the requested location is a substring of the candidate's location
//! 4. +5 per year of experience, capped at 25
//! 5. random noise in [-3, 3]
//!
//! then clamped to [0, 100]. Randomness comes from the caller's RNG so a seeded
//! `StdRng` reproduces an exact ranking.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::candidate::{CandidateRecord, ScoredCandidate};

pub const ANY_MATCH_BONUS: i32 = 30;
pub const PER_MATCH_POINTS: i32 = 10;
pub const MATCH_POINTS_CAP: i32 = 40;
pub const LOCATION_BONUS: i32 = 10;
pub const POINTS_PER_YEAR: i32 = 5;
pub const EXPERIENCE_POINTS_CAP: i32 = 25;
pub const NOISE: RangeInclusive<i32> = -3..=3;

/// Deterministic part of the score (steps 1–4), before noise and clamping.
pub fn base_score<S: AsRef<str>>(
    candidate: &CandidateRecord,
    keywords: &[S],
    location: Option<&str>,
) -> i32 {
    let skills: HashSet<String> = candidate.skills.iter().map(|s| s.to_lowercase()).collect();

    let matches = keywords
        .iter()
        .filter(|k| skills.contains(&k.as_ref().to_lowercase()))
        .count();

    let mut score = 0;

    if matches > 0 {
        score += ANY_MATCH_BONUS;
    }
    let match_points = i32::try_from(matches)
        .unwrap_or(i32::MAX)
        .saturating_mul(PER_MATCH_POINTS);
    score += match_points.min(MATCH_POINTS_CAP);

    if location_matches(&candidate.location, location) {
        score += LOCATION_BONUS;
    }

    let experience_points = i32::try_from(candidate.experience_years)
        .unwrap_or(i32::MAX)
        .saturating_mul(POINTS_PER_YEAR);
    score += experience_points.min(EXPERIENCE_POINTS_CAP);

    score
}

fn location_matches(candidate_location: &str, wanted: Option<&str>) -> bool {
    match wanted {
        Some(wanted) if !wanted.is_empty() && !candidate_location.is_empty() => candidate_location
            .to_lowercase()
            .contains(&wanted.to_lowercase()),
        _ => false,
    }
}

pub fn clamp_score(raw: i32) -> u32 {
    raw.clamp(0, 100) as u32
}

/// Shuffles the pool, keeps the first `n`, scores each, and sorts by score descending.
/// The sort is stable, so ties keep their shuffled order.
pub fn rank<S, R>(
    pool: &[CandidateRecord],
    n: usize,
    keywords: &[S],
    location: Option<&str>,
    rng: &mut R,
) -> Vec<ScoredCandidate>
where
    S: AsRef<str>,
    R: Rng,
{
    let mut chosen: Vec<&CandidateRecord> = pool.iter().collect();
    chosen.shuffle(rng);
    chosen.truncate(n);

    let mut scored: Vec<ScoredCandidate> = chosen
        .into_iter()
        .map(|candidate| {
            let noise = rng.random_range(NOISE);
            let score = clamp_score(base_score(candidate, keywords, location) + noise);
            ScoredCandidate::new(candidate, score)
        })
        .collect();

    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored
}
