//! The interactive loop: choose filters, load, report, page, and maybe start over.

use std::io::{BufRead, Write};

use crate::config::ExplorerConfig;
use crate::error::{ExplorerResult, LoadSeverity};
use crate::ingestion::{LoadOptions, load_trips};
use crate::pager::browse;
use crate::prompt::Prompter;
use crate::report::{Section, duration_stats, station_stats, time_stats, user_stats};
use crate::selection::{FilterSelection, parse_city, parse_day, parse_month};
use crate::types::TripTable;

/// One explorer run over a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: ExplorerConfig,
    load_options: LoadOptions,
}

impl Session {
    /// A session reading datasets per `config` and reporting loads per `load_options`.
    pub fn new(config: ExplorerConfig, load_options: LoadOptions) -> Self {
        Self {
            config,
            load_options,
        }
    }

    /// Run until the user declines to restart or input ends.
    ///
    /// A dataset that cannot be read only abandons the current pass; malformed data (bad
    /// timestamps, no trip durations) ends the run with an error.
    pub fn run<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> ExplorerResult<()> {
        loop {
            let Some(selection) = self.select_filters(prompter)? else {
                return Ok(());
            };

            match load_trips(&self.config, &selection, &self.load_options) {
                Ok(mut table) => self.explore(&mut table, prompter)?,
                Err(e) if e.severity() >= LoadSeverity::Critical => {
                    log::error!("could not load data for {}: {e}", selection.city);
                    prompter.say(&format!("Could not load data for {}: {e}", selection.city))?;
                }
                Err(e) => return Err(e),
            }

            let restart = prompter.ask("\nWould you like to restart? Enter yes or no.\n")?;
            if restart.as_deref() != Some("yes") {
                prompter.say("Stop program !")?;
                return Ok(());
            }
        }
    }

    /// Ask for city, month and day. `None` if input ended first.
    pub fn select_filters<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> ExplorerResult<Option<FilterSelection>> {
        prompter.say("Hello! Let's explore some US bikeshare data!")?;

        let Some(city) = prompter.ask_until(
            "Please enter the name of the city (chicago, new york city, washington): ",
            parse_city,
        )?
        else {
            return Ok(None);
        };
        let Some(month) = prompter.ask_until(
            "Please enter the name of the month (all, january, february, ..., june): ",
            parse_month,
        )?
        else {
            return Ok(None);
        };
        let Some(day) = prompter.ask_until(
            "Please enter the name of the day of the week (all, monday, tuesday, ..., sunday): ",
            parse_day,
        )?
        else {
            return Ok(None);
        };

        prompter.say(&"-".repeat(40))?;
        Ok(Some(FilterSelection { city, month, day }))
    }

    /// Print every report, offering the pager after stations, durations and users.
    pub fn explore<R: BufRead, W: Write>(
        &self,
        table: &mut TripTable,
        prompter: &mut Prompter<R, W>,
    ) -> ExplorerResult<()> {
        if table.is_empty() {
            log::info!("no trips match the selected filters");
        }
        let page_size = self.config.page_size;

        show(prompter, &time_stats(table))?;
        show(prompter, &station_stats(table))?;
        browse(table, page_size, prompter)?;
        show(prompter, &duration_stats(table)?)?;
        browse(table, page_size, prompter)?;
        show(prompter, &user_stats(table))?;
        browse(table, page_size, prompter)
    }
}

fn show<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, section: &Section) -> ExplorerResult<()> {
    section.render(prompter.output())?;
    Ok(())
}
