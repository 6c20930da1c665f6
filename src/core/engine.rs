use crate::adapters::{FileRosterSource, HttpRosterSource};
use crate::core::populator::Populator;
use crate::domain::model::{FillReport, LoadPhase};
use crate::domain::ports::{ConfigProvider, RosterSource, SelectControl};
use crate::utils::error::Result;
use crate::utils::validation::looks_like_url;
use std::time::Duration;
use url::Url;

/// Drives one fill run the way the hosting page does: a failed roster load is
/// logged and otherwise swallowed, leaving the control on its placeholder.
/// Callers who want the failure surfaced use [`Populator::populate`] directly.
pub struct FillEngine<S: RosterSource> {
    populator: Populator<S>,
}

impl<S: RosterSource> FillEngine<S> {
    pub fn new(populator: Populator<S>) -> Self {
        Self { populator }
    }

    pub async fn run<C: SelectControl + ?Sized>(&self, control: &mut C) -> FillReport {
        println!("Filling dropdown...");

        match self.populator.populate(control).await {
            Ok(appended) => {
                println!("Dropdown ready: placeholder + {} option(s)", appended);
                FillReport {
                    phase: LoadPhase::Loaded,
                    appended,
                }
            }
            Err(e) => {
                tracing::warn!("Roster load failed, dropdown keeps placeholder only: {}", e);
                FillReport {
                    phase: LoadPhase::Loading,
                    appended: 0,
                }
            }
        }
    }
}

/// Builds the right roster source for the configured location and runs one
/// fill. A page URL means the location is resolved relative to the page;
/// otherwise an http(s) location is taken as-is and anything else is a local
/// file path.
pub async fn fill_from_config<P, C>(config: &P, control: &mut C) -> Result<FillReport>
where
    P: ConfigProvider,
    C: SelectControl + ?Sized,
{
    let timeout = Duration::from_secs(config.timeout_seconds());
    let location = config.roster_location();

    if let Some(page) = config.page_url() {
        let page = Url::parse(page)?;
        let source = HttpRosterSource::from_page(&page, location)?.with_timeout(timeout)?;
        tracing::debug!("Roster resolved against page to: {}", source.url());
        let populator = Populator::new(source, config.placeholder_text());
        Ok(FillEngine::new(populator).run(control).await)
    } else if looks_like_url(location) {
        let source = HttpRosterSource::new(Url::parse(location)?).with_timeout(timeout)?;
        let populator = Populator::new(source, config.placeholder_text());
        Ok(FillEngine::new(populator).run(control).await)
    } else {
        let populator = Populator::new(FileRosterSource::new(location), config.placeholder_text());
        Ok(FillEngine::new(populator).run(control).await)
    }
}
