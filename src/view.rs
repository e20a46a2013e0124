//! Terminal rendering surface for the dashboard.
//!
//! The view keeps the rendered list separate from star state: cards carry
//! the static counts, while each star glyph lives in a map keyed by
//! repository id that only the toggle flow writes after the initial render.

use crate::models::{RepoId, RepositorySummary, StarGlyph};
use colored::*;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCard {
    pub id: RepoId,
    pub name: String,
    pub open_issues: u64,
    pub open_pull_requests: u64,
    pub commit_count: u64,
}

#[derive(Debug, Default)]
pub struct DashboardView {
    greeting: Option<String>,
    cards: Vec<RepositoryCard>,
    stars: HashMap<RepoId, StarGlyph>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn greeting(&self) -> Option<&str> {
        self.greeting.as_deref()
    }

    pub fn set_greeting(&mut self, greeting: impl Into<String>) {
        self.greeting = Some(greeting.into());
    }

    pub fn cards(&self) -> &[RepositoryCard] {
        &self.cards
    }

    /// Clear the list, then render one card per repository in order
    pub fn replace_list(&mut self, repositories: &[RepositorySummary]) {
        self.cards.clear();
        self.stars.clear();

        for repo in repositories {
            self.cards.push(RepositoryCard {
                id: repo.id.clone(),
                name: repo.name.clone(),
                open_issues: repo.open_issues,
                open_pull_requests: repo.open_pull_requests,
                commit_count: repo.commit_count,
            });
            self.stars
                .insert(repo.id.clone(), StarGlyph::from_starred(repo.viewer_has_starred));
        }
    }

    pub fn glyph(&self, id: &RepoId) -> Option<StarGlyph> {
        self.stars.get(id).copied()
    }

    /// Returns false when no control with this id is rendered.
    pub fn set_glyph(&mut self, id: &RepoId, glyph: StarGlyph) -> bool {
        match self.stars.get_mut(id) {
            Some(cell) => {
                *cell = glyph;
                true
            }
            None => false,
        }
    }

    /// Resolve a 1-based position, repository id or repository name
    pub fn find(&self, selector: &str) -> Option<&RepositoryCard> {
        let selector = selector.trim();
        if let Ok(position) = selector.parse::<usize>() {
            if let Some(card) = position.checked_sub(1).and_then(|i| self.cards.get(i)) {
                return Some(card);
            }
        }

        self.cards
            .iter()
            .find(|card| card.id.as_str() == selector)
            .or_else(|| self.cards.iter().find(|card| card.name == selector))
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(greeting) = &self.greeting {
            writeln!(f, "{}", greeting.bold().green())?;
            writeln!(f, "{}", "=".repeat(50).dimmed())?;
        }

        for (index, card) in self.cards.iter().enumerate() {
            let glyph = self.glyph(&card.id).unwrap_or(StarGlyph::Empty);
            let star = if glyph.is_filled() {
                glyph.to_string().yellow()
            } else {
                glyph.to_string().normal()
            };

            writeln!(f, "{}. {} {}", index + 1, card.name.bold(), star)?;
            writeln!(f, "   {} open issues", card.open_issues)?;
            writeln!(f, "   {} open PRs", card.open_pull_requests)?;
            writeln!(f, "   {} commits", card.commit_count)?;
        }

        Ok(())
    }
}
