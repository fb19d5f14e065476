use std::sync::Arc;

use crate::content::{ContentError, ContentQuery, ContentStore, EntryCollection};
use crate::models::season::Standing;
use crate::models::team::Team;
use crate::site::views::TeamView;

/// All teams of one fetch, with the includes needed to resolve their logos.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    pub teams: Vec<Team>,
    collection: EntryCollection,
}

impl TeamRoster {
    pub fn views(&self) -> Vec<TeamView> {
        self.teams
            .iter()
            .map(|team| TeamView::from_team(team, &self.collection))
            .collect()
    }

    pub fn view_of(&self, team: &Team) -> TeamView {
        TeamView::from_team(team, &self.collection)
    }

    pub fn supported_team(&self) -> Option<&Team> {
        self.teams.iter().find(|team| team.is_supported_team)
    }

    pub fn team_for(&self, standing: &Standing) -> Option<&Team> {
        self.teams
            .iter()
            .find(|team| team.is_named_by(standing.team_slug.as_deref(), &standing.team))
    }
}

pub struct TeamService {
    store: Arc<dyn ContentStore>,
}

impl TeamService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Every team, ordered by name, logos included
    #[tracing::instrument(name = "Fetch teams", skip(self))]
    pub async fn roster(&self) -> Result<TeamRoster, ContentError> {
        let query = ContentQuery::new(Team::CONTENT_TYPE)
            .order_by("name", false)
            .limit(100)
            .include(1);
        let collection = self.store.entries(&query).await?;

        let teams = collection
            .items
            .iter()
            .map(Team::from_entry)
            .collect::<Result<Vec<_>, _>>()?;

        if teams.iter().filter(|team| team.is_supported_team).count() > 1 {
            tracing::warn!("More than one team is flagged as the supported team");
        }

        Ok(TeamRoster { teams, collection })
    }
}
