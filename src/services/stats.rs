use crate::catalog;
use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;
use crate::models::Stats;
use crate::repositories::StatsRepository;

#[derive(FromContext, Clone)]
pub struct StatsService {
    stats: StatsRepository,
}

impl StatsService {
    /// Entity counts per kind, each restricted by the entity's own provenance.
    ///
    /// The source count itself is never filtered.
    pub async fn global(&self, filter: &SourceFilter) -> Result<Stats, AppError> {
        let unfiltered = SourceFilter::none();
        let (persons, works, scholarly, places, subjects, languages, sources) = tokio::try_join!(
            self.stats.count(catalog::COUNT_PERSONS, filter),
            self.stats.count(catalog::COUNT_WORKS, filter),
            self.stats.count(catalog::COUNT_SCHOLARLY, filter),
            self.stats.count(catalog::COUNT_PLACES, filter),
            self.stats.count(catalog::COUNT_SUBJECTS, filter),
            self.stats.count(catalog::COUNT_LANGUAGES, filter),
            self.stats.count(catalog::COUNT_SOURCES, &unfiltered),
        )?;

        Ok(Stats {
            persons,
            works,
            scholarly,
            places,
            subjects,
            languages,
            sources,
        })
    }
}
